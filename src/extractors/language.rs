//! Language section isolation.
//!
//! A page document interleaves sections for every language a word exists in,
//! all as siblings of the document root. This stage finds the contiguous run
//! of nodes belonging to one target language.

use crate::config::{DISAMBIGUATION_DELIMITERS, LANGUAGE_RANK};
use crate::markup::Node;

/// Whether a node is a valid language heading.
///
/// Language headings sit at the language rank and carry an anchor free of
/// disambiguation delimiters; anchors like `Noun_2` or `pt-verb` identify
/// duplicate or derived headings, which are skipped entirely rather than
/// treated as section boundaries.
fn is_language_heading(node: &Node) -> bool {
    if node.heading_rank() != Some(LANGUAGE_RANK) {
        return false;
    }
    match node.anchor() {
        Some(anchor) => !anchor.is_empty() && !anchor.contains(&DISAMBIGUATION_DELIMITERS[..]),
        None => false,
    }
}

/// Isolate the subtree of the given language.
///
/// Returns the run of top-level siblings following the language's heading, up
/// to (excluding) the next valid language heading. `None` means the document
/// has no section for this language; that is an ordinary outcome, not an
/// error.
pub fn language_section<'a>(root: &'a Node, language: &str) -> Option<&'a [Node]> {
    let siblings = &root.children;

    let start = siblings
        .iter()
        .position(|n| is_language_heading(n) && n.anchor() == Some(language))?;

    let end = siblings[start + 1..]
        .iter()
        .position(is_language_heading)
        .map(|offset| start + 1 + offset)
        .unwrap_or(siblings.len());

    log::debug!(
        "language section '{}': {} nodes",
        language,
        end - start - 1
    );
    Some(&siblings[start + 1..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::NodeKind;

    fn language_heading(anchor: &str) -> Node {
        Node::heading(LANGUAGE_RANK, anchor).with_child(Node::text(anchor))
    }

    fn paragraph(text: &str) -> Node {
        Node::new(NodeKind::Paragraph).with_child(Node::text(text))
    }

    #[test]
    fn test_section_runs_to_next_language_heading() {
        let root = Node::new(NodeKind::Paragraph).with_children(vec![
            language_heading("Galician"),
            paragraph("galician content"),
            language_heading("Portuguese"),
            paragraph("first"),
            paragraph("second"),
            language_heading("Spanish"),
            paragraph("spanish content"),
        ]);

        let section = language_section(&root, "Portuguese").unwrap();
        assert_eq!(section.len(), 2);
        assert_eq!(section[0].text_content(), "first");
        assert_eq!(section[1].text_content(), "second");
    }

    #[test]
    fn test_section_runs_to_document_end() {
        let root = Node::new(NodeKind::Paragraph).with_children(vec![
            language_heading("Portuguese"),
            paragraph("content"),
        ]);

        let section = language_section(&root, "Portuguese").unwrap();
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn test_delimited_anchor_is_not_a_boundary() {
        // A duplicate heading anchor like "Portuguese_2" must neither match
        // nor terminate the section that precedes it.
        let root = Node::new(NodeKind::Paragraph).with_children(vec![
            language_heading("Portuguese"),
            paragraph("before"),
            Node::heading(LANGUAGE_RANK, "Portuguese_2").with_child(Node::text("Portuguese")),
            paragraph("after"),
            language_heading("Spanish"),
        ]);

        let section = language_section(&root, "Portuguese").unwrap();
        assert_eq!(section.len(), 3);
        assert!(language_section(&root, "Portuguese_2").is_none());
    }

    #[test]
    fn test_missing_language_is_none() {
        let root = Node::new(NodeKind::Paragraph).with_children(vec![
            language_heading("Spanish"),
            paragraph("spanish content"),
        ]);
        assert!(language_section(&root, "Portuguese").is_none());
    }

    #[test]
    fn test_deeper_headings_do_not_terminate() {
        let root = Node::new(NodeKind::Paragraph).with_children(vec![
            language_heading("Portuguese"),
            Node::heading(3, "Verb").with_child(Node::text("Verb")),
            paragraph("verb content"),
        ]);

        let section = language_section(&root, "Portuguese").unwrap();
        assert_eq!(section.len(), 2);
    }
}
