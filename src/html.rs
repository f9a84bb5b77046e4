//! HTML emission for outlines, routed through an injected [`Components`] table.

use crate::components::Components;
use crate::heading::HeadingTag;
use crate::outline::OutlineNode;
use crate::render::NavItem;

/// Emit every outline heading as an anchored heading element, in document order.
#[must_use]
pub fn render_headings(outline: &[OutlineNode], components: &impl Components) -> String {
    let mut out = String::new();
    for root in outline {
        root.walk(1, &mut |node, _| {
            components.heading(
                &mut out,
                HeadingTag::from_level(node.level),
                &node.slug,
                &node.label,
            );
        });
    }
    out
}

/// Emit rendered navigation items as nested lists.
#[must_use]
pub fn render_toc(items: &[NavItem], components: &impl Components) -> String {
    let mut out = String::new();
    if !items.is_empty() {
        write_list(&mut out, items, items[0].depth, components);
    }
    out
}

fn write_list(out: &mut String, items: &[NavItem], depth: usize, components: &impl Components) {
    components.list_start(out, depth);
    for item in items {
        components.entry_start(out, item);
        if !item.children.is_empty() {
            write_list(out, &item.children, depth + 1, components);
        }
        components.entry_end(out, item);
    }
    components.list_end(out, depth);
}

#[cfg(test)]
#[path = "tests/html.rs"]
mod tests;
