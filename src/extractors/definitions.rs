//! Definition extraction and cleanup.
//!
//! Glosses live in ordered lists that are direct children of a category
//! section; each list item is one sense. Items carry a lot of freight beyond
//! the gloss itself (usage examples, quotations, nested sub-sense lists),
//! all of which is stripped before the text is kept.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::STRIP_LABELS;
use crate::markup::{Node, NodeKind};

lazy_static! {
    /// Regex for collapsing whitespace runs
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Regex for parenthesis pairs left empty after stripping
    static ref RE_EMPTY_PARENS: Regex = Regex::new(r"\(\s*\)").unwrap();

    /// Regex for bracket pairs left empty after stripping
    static ref RE_EMPTY_BRACKETS: Regex = Regex::new(r"\[\s*\]").unwrap();
}

/// Extract cleaned definition strings from a category section.
///
/// Only ordered lists that are elements of the section itself are scanned;
/// lists nested deeper hold sub-senses or quotations and are excluded. Order
/// and duplicates are preserved; items that clean down to nothing are
/// dropped.
pub fn definitions(section: &[Node]) -> Vec<String> {
    let mut out = Vec::new();

    for node in section {
        if node.kind != NodeKind::OrderedList {
            continue;
        }
        for item in &node.children {
            if item.kind != NodeKind::ListItem {
                continue;
            }
            let text = clean_definition(item);
            if !text.is_empty() {
                out.push(text);
            }
        }
    }

    log::debug!("extracted {} definitions", out.len());
    out
}

/// Clean one list item down to its gloss text.
fn clean_definition(item: &Node) -> String {
    let mut raw = String::new();
    collect_gloss_text(item, &mut raw);

    let collapsed = RE_WHITESPACE.replace_all(&raw, " ");
    let without_parens = RE_EMPTY_PARENS.replace_all(&collapsed, "");
    let without_brackets = RE_EMPTY_BRACKETS.replace_all(&without_parens, "");
    without_brackets.trim().to_string()
}

/// Accumulate text, skipping subtrees that are not part of the gloss:
/// usage-example blocks, quotation/citation blocks, style-only elements
/// (all label-identified), and nested lists of either kind.
fn collect_gloss_text(node: &Node, out: &mut String) {
    if let Some(label) = node.label.as_deref() {
        if STRIP_LABELS.contains(label) {
            return;
        }
    }
    match node.kind {
        NodeKind::OrderedList | NodeKind::UnorderedList => return,
        NodeKind::Text(ref content) => out.push_str(content),
        _ => {},
    }
    for child in &node.children {
        collect_gloss_text(child, out);
    }
}
