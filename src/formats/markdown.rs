//! Markdown format implementation using tree-sitter-md.
//!
//! Both ATX (`## Title`) and setext (underlined) headings are recognised. MDX documents parse
//! with the same grammar: JSX blocks come through as HTML blocks and never look like headings.

use crate::formats::Format;
use tree_sitter::Node;

/// Tree-sitter queries for markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, node: Node<'_>) -> Option<usize> {
        let mut cursor = node.walk();
        let level = node.children(&mut cursor).find_map(|child| match child.kind() {
            "setext_h1_underline" => Some(1),
            "setext_h2_underline" => Some(2),
            kind => kind
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|n| n.parse().ok()),
        });
        level
    }

    fn heading_text(&self, node: Node<'_>, source: &[u8]) -> String {
        let Some(inline) = find_inline(node) else {
            return String::new();
        };
        let raw = inline.utf8_text(source).unwrap_or_default();
        let joined = raw.lines().map(str::trim).collect::<Vec<_>>().join(" ");
        strip_closing_sequence(&joined).to_string()
    }
}

/// First `inline` node at or below `node`.
fn find_inline(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() == "inline" {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(find_inline)
}

/// Drop an optional ATX closing sequence (`## Title ##`).
fn strip_closing_sequence(text: &str) -> &str {
    let trimmed = text.trim_end();
    let without = trimmed.trim_end_matches('#');
    if without.len() == trimmed.len() {
        return trimmed;
    }
    if without.is_empty() || without.ends_with(' ') || without.ends_with('\t') {
        without.trim_end()
    } else {
        trimmed
    }
}
