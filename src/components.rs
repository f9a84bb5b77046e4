//! Component tables: how headings and contents entries turn into markup.
//!
//! The outline code never branches on which heading element it is emitting. It asks a
//! [`Components`] table, keyed by the closed [`HeadingTag`] set, and callers inject their own
//! table to change the markup (custom link wrappers, extra classes, another output language).

use crate::heading::HeadingTag;
use crate::render::NavItem;
use std::fmt::Write;

/// Markup producers for the pieces of a table of contents.
pub trait Components {
    /// Emit a heading element carrying its anchor.
    fn heading(&self, out: &mut String, tag: HeadingTag, anchor: &str, label: &str);

    /// Open a contents list at `depth`.
    fn list_start(&self, out: &mut String, depth: usize);

    /// Close a contents list at `depth`.
    fn list_end(&self, out: &mut String, depth: usize);

    /// Open a contents entry (its children, if any, follow before [`Components::entry_end`]).
    fn entry_start(&self, out: &mut String, item: &NavItem);

    /// Close a contents entry.
    fn entry_end(&self, out: &mut String, item: &NavItem);
}

#[derive(Clone, Debug)]
/// Plain HTML output with an `active` class on the active entry.
pub struct HtmlComponents {
    /// Class added to the active contents entry.
    pub active_class: String,
    /// Prefix put in front of every `#fragment` link (e.g. the page path).
    pub base_href: String,
}

impl Default for HtmlComponents {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            base_href: String::new(),
        }
    }
}

impl Components for HtmlComponents {
    fn heading(&self, out: &mut String, tag: HeadingTag, anchor: &str, label: &str) {
        let name = tag.name();
        let label = escape(label);
        if anchor.is_empty() {
            let _ = writeln!(out, "<{name}>{label}</{name}>");
        } else {
            let _ = writeln!(out, "<{name} id=\"{}\">{label}</{name}>", escape(anchor));
        }
    }

    fn list_start(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{}<ul>", indent(depth));
    }

    fn list_end(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{}</ul>", indent(depth));
    }

    fn entry_start(&self, out: &mut String, item: &NavItem) {
        let pad = indent(item.depth);
        let class = if item.active {
            format!(" class=\"{}\"", escape(&self.active_class))
        } else {
            String::new()
        };
        let label = escape(&item.label);
        match &item.href {
            Some(href) => {
                let href = escape(&format!("{}{href}", self.base_href));
                let _ = write!(out, "{pad}  <li{class}><a href=\"{href}\">{label}</a>");
            }
            None => {
                let _ = write!(out, "{pad}  <li{class}>{label}");
            }
        }
        if !item.children.is_empty() {
            out.push('\n');
        }
    }

    fn entry_end(&self, out: &mut String, item: &NavItem) {
        if !item.children.is_empty() {
            out.push_str(&indent(item.depth));
            out.push_str("  ");
        }
        out.push_str("</li>\n");
    }
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth.saturating_sub(1))
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
