//! Neutral markup tree consumed by the extraction pipeline.
//!
//! The pipeline never touches raw wikitext or HTML. A content provider parses
//! its payload into this renderer-agnostic tree: rank-tagged headings, ordered
//! children, and opaque role labels carried over from the source markup
//! (footnote containers, usage examples, rail headers, ...). The config module
//! decides what each label means; the tree itself stays dumb.

/// The type of a markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Section heading at a given rank (2 = language, 3-4 = category, deeper
    /// ranks are nested subsections). The anchor is the heading's identifying
    /// id in the source document, distinct from its display text.
    Heading {
        /// Heading rank, counted from the top of the document hierarchy.
        rank: u8,
        /// Identifying anchor id of the heading.
        anchor: String,
    },
    /// Paragraph of flowing content.
    Paragraph,
    /// Ordered (numbered) list.
    OrderedList,
    /// Unordered (bulleted) list.
    UnorderedList,
    /// Item of an ordered or unordered list.
    ListItem,
    /// Table.
    Table,
    /// Row of a table.
    TableRow,
    /// Cell of a table row.
    TableCell {
        /// Whether this is a header cell.
        header: bool,
        /// Number of columns the cell spans.
        colspan: u32,
        /// Number of rows the cell spans.
        rowspan: u32,
    },
    /// Inline span. `marker` is set for styled superscript glyphs that tie a
    /// table-cell variant to an explanatory footnote.
    Span {
        /// Whether this span is a styled dialect-marker superscript.
        marker: bool,
    },
    /// Literal text.
    Text(String),
}

/// A node of the markup tree.
///
/// Children are kept in document order; section boundaries in the extraction
/// stages are expressed as slices over a parent's children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What kind of node this is.
    pub kind: NodeKind,
    /// Opaque role label assigned by the provider (e.g. a CSS class in an
    /// HTML rendering). Interpreted via the tables in [`crate::config`].
    pub label: Option<String>,
    /// Child nodes, in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node of the given kind with no label and no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            label: None,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    /// Create a heading node. The display text goes in as a child text node.
    pub fn heading(rank: u8, anchor: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading {
            rank,
            anchor: anchor.into(),
        })
    }

    /// Create a plain inline span wrapping the given text.
    pub fn span(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Span { marker: false }).with_child(Self::text(content))
    }

    /// Create a styled dialect-marker superscript with the given glyph.
    pub fn marker(glyph: impl Into<String>) -> Self {
        Self::new(NodeKind::Span { marker: true }).with_child(Self::text(glyph))
    }

    /// Create a data cell.
    pub fn data_cell() -> Self {
        Self::new(NodeKind::TableCell {
            header: false,
            colspan: 1,
            rowspan: 1,
        })
    }

    /// Create a header cell.
    pub fn header_cell() -> Self {
        Self::new(NodeKind::TableCell {
            header: true,
            colspan: 1,
            rowspan: 1,
        })
    }

    /// Attach a role label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the colspan of a table cell. No effect on other node kinds.
    pub fn with_colspan(mut self, span: u32) -> Self {
        if let NodeKind::TableCell { ref mut colspan, .. } = self.kind {
            *colspan = span;
        }
        self
    }

    /// Set the rowspan of a table cell. No effect on other node kinds.
    pub fn with_rowspan(mut self, span: u32) -> Self {
        if let NodeKind::TableCell { ref mut rowspan, .. } = self.kind {
            *rowspan = span;
        }
        self
    }

    /// Heading rank, if this node is a heading.
    pub fn heading_rank(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Heading { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// Heading anchor id, if this node is a heading.
    pub fn anchor(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Heading { ref anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// Whether the node carries the given role label.
    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }

    /// Concatenated text of this node and all descendants, in document order.
    ///
    /// No separators are inserted between adjacent text nodes, mirroring how
    /// a rendered document concatenates inline content.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text(ref content) = self.kind {
            out.push_str(content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Whether any descendant (including self) satisfies the predicate.
    pub fn any_descendant(&self, pred: &dyn Fn(&Node) -> bool) -> bool {
        if pred(self) {
            return true;
        }
        self.children.iter().any(|c| c.any_descendant(pred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_concatenates_in_document_order() {
        let node = Node::new(NodeKind::Paragraph)
            .with_child(Node::text("to "))
            .with_child(Node::span("wait"))
            .with_child(Node::text("; to hope"));
        assert_eq!(node.text_content(), "to wait; to hope");
    }

    #[test]
    fn test_heading_accessors() {
        let h = Node::heading(2, "Portuguese").with_child(Node::text("Portuguese"));
        assert_eq!(h.heading_rank(), Some(2));
        assert_eq!(h.anchor(), Some("Portuguese"));
        assert_eq!(Node::text("x").heading_rank(), None);
    }

    #[test]
    fn test_cell_span_builders() {
        let cell = Node::header_cell().with_colspan(7);
        assert_eq!(
            cell.kind,
            NodeKind::TableCell {
                header: true,
                colspan: 7,
                rowspan: 1
            }
        );

        // Span setters do not touch non-cell nodes.
        let p = Node::new(NodeKind::Paragraph).with_colspan(3);
        assert_eq!(p.kind, NodeKind::Paragraph);
    }

    #[test]
    fn test_marker_span() {
        let m = Node::marker("1");
        assert_eq!(m.kind, NodeKind::Span { marker: true });
        assert_eq!(m.text_content(), "1");
    }

    #[test]
    fn test_any_descendant() {
        let row = Node::new(NodeKind::TableRow)
            .with_child(Node::data_cell().with_child(Node::span("falo")));
        assert!(row.any_descendant(&|n| matches!(n.kind, NodeKind::Span { .. })));
        assert!(!row.any_descendant(&|n| matches!(n.kind, NodeKind::Table)));
    }
}
