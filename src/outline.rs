//! Outline construction: nesting a heading list into a tree with unique anchors.
//!
//! The outline is built once per document and never patched afterwards; everything downstream
//! (rendering, tracking, HTML emission) reads slugs from it instead of deriving its own.

use crate::anchor::SlugRegistry;
use crate::heading::{preorder, HeadingNode, MAX_LEVEL};
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One entry in a document outline.
pub struct OutlineNode {
    /// Document-unique anchor, or empty when the heading has no sluggable text.
    pub slug: String,
    /// Heading text exactly as written.
    pub label: String,
    /// Heading rank, always greater than the parent's.
    pub level: usize,
    /// Zero-based source line of the heading.
    pub line: usize,
    /// 1-based position of this heading in document order among the outlined headings.
    pub ordinal: usize,
    /// Subheadings in document order.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    #[must_use]
    /// Whether the node can be linked to and observed.
    pub fn is_navigable(&self) -> bool {
        !self.slug.is_empty()
    }

    /// Visit this node and its descendants in pre-order, with their 1-based depth.
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a OutlineNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk(depth + 1, visit);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which heading ranks make it into the outline.
pub struct OutlineOptions {
    /// Shallowest rank kept (inclusive).
    pub min_level: usize,
    /// Deepest rank kept (inclusive).
    pub max_level: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: MAX_LEVEL,
        }
    }
}

impl OutlineOptions {
    fn keeps(self, level: usize) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}

/// Nest headings into an outline forest using the default options.
///
/// See [`build_outline_with`].
#[must_use]
pub fn build_outline(headings: &[HeadingNode]) -> Vec<OutlineNode> {
    build_outline_with(headings, OutlineOptions::default())
}

/// Nest headings into an outline forest.
///
/// Input is first flattened in document order, so partial nesting from the parser is ignored.
/// A stack holds the path of open nodes: for each heading, entries whose level is not strictly
/// lower are popped, and the heading becomes a child of the remaining top (or a new root).
/// Slugs are claimed from one registry in the same pass, so duplicate suffixes follow document
/// order whatever the nesting.
#[must_use]
pub fn build_outline_with(headings: &[HeadingNode], options: OutlineOptions) -> Vec<OutlineNode> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut registry = SlugRegistry::new();
    // Child index at each depth of the open path, alongside that node's level.
    let mut path: Vec<usize> = Vec::new();
    let mut levels: Vec<usize> = Vec::new();
    let mut ordinal = 0;

    for heading in preorder(headings) {
        if !options.keeps(heading.level) {
            continue;
        }

        while levels.last().is_some_and(|&open| open >= heading.level) {
            levels.pop();
            path.pop();
        }

        ordinal += 1;
        let slug = registry.claim(&heading.plain_text());
        if slug.is_empty() {
            debug!(line = heading.line, text = %heading.text, "heading has no anchor");
        }

        let siblings = children_at(&mut roots, &path);
        siblings.push(OutlineNode {
            slug,
            label: heading.text.clone(),
            level: heading.level,
            line: heading.line,
            ordinal,
            children: Vec::new(),
        });
        path.push(siblings.len() - 1);
        levels.push(heading.level);
    }

    roots
}

/// The child list of the node reached by following `path` from the roots.
fn children_at<'a>(roots: &'a mut Vec<OutlineNode>, path: &[usize]) -> &'a mut Vec<OutlineNode> {
    path.iter()
        .fold(roots, |siblings, &index| &mut siblings[index].children)
}

/// Slugs of every navigable node, in document (pre-order) order.
#[must_use]
pub fn flatten(outline: &[OutlineNode]) -> Vec<String> {
    let mut slugs = Vec::new();
    for root in outline {
        root.walk(1, &mut |node, _| {
            if node.is_navigable() {
                slugs.push(node.slug.clone());
            }
        });
    }
    slugs
}

/// Total number of nodes in the forest, navigable or not.
#[must_use]
pub fn count(outline: &[OutlineNode]) -> usize {
    outline.iter().map(|node| 1 + count(&node.children)).sum()
}

/// Find a node by slug.
#[must_use]
pub fn find<'a>(outline: &'a [OutlineNode], slug: &str) -> Option<&'a OutlineNode> {
    if slug.is_empty() {
        return None;
    }
    outline.iter().find_map(|node| {
        if node.slug == slug {
            Some(node)
        } else {
            find(&node.children, slug)
        }
    })
}

/// `(slug, line)` for every navigable node, in document order.
#[must_use]
pub fn anchors(outline: &[OutlineNode]) -> Vec<(String, usize)> {
    let mut anchors = Vec::new();
    for root in outline {
        root.walk(1, &mut |node, _| {
            if node.is_navigable() {
                anchors.push((node.slug.clone(), node.line));
            }
        });
    }
    anchors
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
