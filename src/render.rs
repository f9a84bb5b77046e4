//! Depth-bounded navigation trees for the current active section.
//!
//! Rendering is a pure function of the outline and the active slug, so it is simply re-run
//! whenever the tracker reports a change.

use crate::outline::OutlineNode;
use serde::Serialize;

/// Default number of outline levels shown before deeper entries are cut off.
pub const DEFAULT_MAX_DEPTH: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One entry in a rendered table of contents.
pub struct NavItem {
    /// Anchor of the heading (empty when not navigable).
    pub slug: String,
    /// Heading text as written.
    pub label: String,
    /// Fragment link, absent for headings without an anchor.
    pub href: Option<String>,
    /// Whether this entry is the active section.
    pub active: bool,
    /// 1-based depth of the entry in the rendered tree.
    pub depth: usize,
    /// Nested entries, empty at the depth bound.
    pub children: Vec<NavItem>,
}

/// Render an outline forest into navigation items.
///
/// `depth` is the depth of `outline` itself (1 for a document's roots). Entries at `max_depth`
/// are emitted without their children; a forest already past `max_depth` renders as nothing.
/// Only entries with a non-empty slug equal to `active` are marked active.
#[must_use]
pub fn render(
    outline: &[OutlineNode],
    active: Option<&str>,
    depth: usize,
    max_depth: usize,
) -> Vec<NavItem> {
    if depth > max_depth {
        return Vec::new();
    }

    outline
        .iter()
        .map(|node| NavItem {
            slug: node.slug.clone(),
            label: node.label.clone(),
            href: node.is_navigable().then(|| format!("#{}", node.slug)),
            active: node.is_navigable() && active == Some(node.slug.as_str()),
            depth,
            children: render(&node.children, active, depth + 1, max_depth),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Renderer configured with a depth bound.
pub struct OutlineRenderer {
    /// Deepest level rendered; entries there become leaves.
    pub max_depth: usize,
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl OutlineRenderer {
    #[must_use]
    /// Renderer with a custom depth bound (at least one level).
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    #[must_use]
    /// Render `outline` starting at `depth`.
    pub fn render(&self, outline: &[OutlineNode], active: Option<&str>, depth: usize) -> Vec<NavItem> {
        render(outline, active, depth, self.max_depth)
    }

    #[must_use]
    /// Render a document's outline from its roots.
    pub fn render_document(&self, outline: &[OutlineNode], active: Option<&str>) -> Vec<NavItem> {
        self.render(outline, active, 1)
    }
}

/// Flatten rendered items in display order.
#[must_use]
pub fn visible(items: &[NavItem]) -> Vec<&NavItem> {
    let mut out = Vec::new();
    for item in items {
        out.push(item);
        out.extend(visible(&item.children));
    }
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
