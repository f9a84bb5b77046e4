//! Format trait and implementations for different document types.
//!
//! A format pairs a tree-sitter grammar with a query selecting heading nodes, and knows how to
//! read a heading's rank and inline text off the nodes that query matches.

pub mod markdown;

use tree_sitter::Node;

/// Grammar-specific knowledge needed to pull headings out of a document.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Query whose `@heading` captures are heading nodes.
    fn heading_query(&self) -> &str;

    /// Rank of a captured heading node, `None` if the node is not a heading after all.
    fn heading_level(&self, node: Node<'_>) -> Option<usize>;

    /// Raw inline text of a captured heading node.
    fn heading_text(&self, node: Node<'_>, source: &[u8]) -> String;
}
