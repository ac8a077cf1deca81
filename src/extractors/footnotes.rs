//! Footnote analysis for dialect-marker resolution.
//!
//! Conjugation tables record regional variants in one cell, each variant
//! tagged with a styled superscript glyph that points at a footnote below
//! the table. This stage reads the footnotes and collects the glyphs whose
//! explanatory text names the target dialect.

use std::collections::HashSet;

use crate::config::FOOTNOTE_LABELS;
use crate::markup::{Node, NodeKind};

/// Whether a node is a styled dialect-marker superscript.
pub(crate) fn is_marker(node: &Node) -> bool {
    node.kind == NodeKind::Span { marker: true }
}

/// Collect the marker glyphs denoting the target dialect.
///
/// Scans every footnote container in the section. Within one, the text
/// following a marker (up to the next marker at the same level) explains it;
/// a case-insensitive substring match of the dialect label adds the marker's
/// glyph to the set.
pub fn dialect_markers(section: &[Node], dialect: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    let needle = dialect.to_lowercase();

    for node in section {
        collect_from(node, &needle, &mut out);
    }

    log::debug!("dialect '{}' markers: {:?}", dialect, out);
    out
}

fn collect_from(node: &Node, needle: &str, out: &mut HashSet<String>) {
    let is_footnote = node
        .label
        .as_deref()
        .is_some_and(|l| FOOTNOTE_LABELS.contains(l));

    if is_footnote {
        scan_footnote(node, needle, out);
    } else {
        for child in &node.children {
            collect_from(child, needle, out);
        }
    }
}

/// Walk one footnote container, pairing each marker with the text that
/// follows it.
fn scan_footnote(node: &Node, needle: &str, out: &mut HashSet<String>) {
    let children = &node.children;

    for (i, child) in children.iter().enumerate() {
        if !is_marker(child) {
            // Markers can sit below wrapper nodes inside the container.
            scan_footnote(child, needle, out);
            continue;
        }

        let glyph = child.text_content().trim().to_string();
        if glyph.is_empty() {
            continue;
        }

        let mut explanation = String::new();
        for sibling in &children[i + 1..] {
            if is_marker(sibling) {
                break;
            }
            explanation.push_str(&sibling.text_content());
        }

        if explanation.to_lowercase().contains(needle) {
            out.insert(glyph);
        }
    }
}
