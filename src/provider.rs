//! Content provider boundary.
//!
//! The pipeline does not fetch or parse raw markup itself; it consumes an
//! already-materialized [`Node`] tree from a [`ContentProvider`]. Network
//! access, payload decoding, and tree construction live behind this trait,
//! which is the pipeline's only suspension point.

use crate::error::Result;
use crate::markup::Node;

/// A fetched page: its canonical title and the parsed markup tree.
#[derive(Debug, Clone)]
pub struct Page {
    /// Canonical page title as reported by the source.
    pub title: String,
    /// Root of the parsed markup tree. Section headings and their content
    /// are the root's direct children, in document order.
    pub root: Node,
}

impl Page {
    /// Create a page from a title and a parsed tree.
    pub fn new(title: impl Into<String>, root: Node) -> Self {
        Self {
            title: title.into(),
            root,
        }
    }
}

/// Source of parsed page documents.
///
/// `Ok(None)` means the page does not exist; that is a valid, cacheable
/// outcome.
/// `Err(_)` means the provider failed to supply an answer; such failures
/// propagate to the caller and are never cached.
pub trait ContentProvider {
    /// Fetch the page with the given title.
    fn fetch(&self, title: &str) -> Result<Option<Page>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::markup::NodeKind;

    struct EmptyProvider;

    impl ContentProvider for EmptyProvider {
        fn fetch(&self, _title: &str) -> Result<Option<Page>> {
            Ok(None)
        }
    }

    struct FailingProvider;

    impl ContentProvider for FailingProvider {
        fn fetch(&self, _title: &str) -> Result<Option<Page>> {
            Err(Error::Provider("offline".to_string()))
        }
    }

    #[test]
    fn test_not_found_is_not_an_error() {
        let provider = EmptyProvider;
        assert!(provider.fetch("palavra").unwrap().is_none());
    }

    #[test]
    fn test_failure_propagates() {
        let provider = FailingProvider;
        assert!(provider.fetch("palavra").is_err());
    }

    #[test]
    fn test_page_construction() {
        let page = Page::new("esperar", Node::new(NodeKind::Paragraph));
        assert_eq!(page.title, "esperar");
    }
}
