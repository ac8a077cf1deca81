//! Grammatical category section isolation.
//!
//! Splits a language section into one subsection per part-of-speech heading.
//! Only headings whose text exactly matches the category whitelist qualify;
//! everything else (Etymology, Pronunciation, ...) is ignored.

use crate::config::{CATEGORY_NAMES, CATEGORY_RANKS, LANGUAGE_RANK};
use crate::markup::Node;

/// Extract `(category name, section)` pairs from a language section.
///
/// Sections appear in document order. A section extends over the siblings
/// following its heading until the next heading at the language rank or at a
/// rank no deeper than its own; strictly deeper headings (nested subsections
/// such as Conjugation or Quotations) stay attached. Two headings with the
/// same category name yield two separate entries, never merged.
pub fn category_sections(section: &[Node]) -> Vec<(String, &[Node])> {
    let mut out = Vec::new();

    for (i, node) in section.iter().enumerate() {
        let rank = match node.heading_rank() {
            Some(r) if CATEGORY_RANKS.contains(&r) => r,
            _ => continue,
        };

        let name = node.text_content().trim().to_string();
        if !CATEGORY_NAMES.contains(name.as_str()) {
            continue;
        }

        let end = section[i + 1..]
            .iter()
            .position(|n| terminates(n, rank))
            .map(|offset| i + 1 + offset)
            .unwrap_or(section.len());

        log::debug!("category '{}' (rank {}): {} nodes", name, rank, end - i - 1);
        out.push((name, &section[i + 1..end]));
    }

    out
}

/// Whether a node ends the section of a category heading at `rank`.
fn terminates(node: &Node, rank: u8) -> bool {
    match node.heading_rank() {
        Some(r) => r == LANGUAGE_RANK || r <= rank,
        None => false,
    }
}
