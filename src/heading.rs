//! Heading representation produced by document parsing.
//!
//! A heading is the raw material for the outline: its level, its inline text exactly as written,
//! and where it sits in the source. Parsers may hand headings over flat or partially nested;
//! the outline builder re-nests them either way.

use serde::Serialize;

/// Deepest heading rank markdown can express.
pub const MAX_LEVEL: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A document heading as extracted by a [`Format`](crate::formats::Format).
pub struct HeadingNode {
    /// Heading rank (1 for `#`, 2 for `##`, …), within `1..=MAX_LEVEL`.
    pub level: usize,
    /// Inline content of the heading, markup included.
    pub text: String,
    /// Zero-based line of the heading in the source file.
    pub line: usize,
    /// Headings the parser already nested under this one.
    pub children: Vec<HeadingNode>,
}

impl HeadingNode {
    #[must_use]
    /// A childless heading, with `level` clamped into the markdown range.
    pub fn new(level: usize, text: impl Into<String>, line: usize) -> Self {
        Self {
            level: level.clamp(1, MAX_LEVEL),
            text: text.into(),
            line,
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Heading text with inline markup removed, as used for slugging.
    pub fn plain_text(&self) -> String {
        plain_text(&self.text)
    }

    /// Visit this heading and its nested headings in document (pre-) order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a HeadingNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Flatten possibly nested headings into document order.
#[must_use]
pub fn preorder(headings: &[HeadingNode]) -> Vec<&HeadingNode> {
    let mut flat = Vec::with_capacity(headings.len());
    for heading in headings {
        heading.walk(&mut |h| flat.push(h));
    }
    flat
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
/// HTML heading element for a given rank.
pub enum HeadingTag {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingTag {
    #[must_use]
    /// Tag for a heading level; levels past 6 render as `<h6>`.
    pub fn from_level(level: usize) -> Self {
        match level {
            0 | 1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            _ => Self::H6,
        }
    }

    #[must_use]
    /// Element name, e.g. `"h2"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Strip inline markdown markup, keeping the readable text.
///
/// Handles emphasis and strikethrough markers, code ticks, backslash escapes, link and image
/// destinations (`[label](url)` keeps `label`), and inline HTML or JSX tags. Underscores inside
/// words survive so that `snake_case` stays one word.
#[must_use]
pub fn plain_text(inline: &str) -> String {
    let chars: Vec<char> = inline.chars().collect();
    let mut out = String::with_capacity(inline.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                    i += 1;
                }
            }
            '*' | '`' | '~' | '[' => {}
            '_' => {
                let inner_word = i > 0
                    && chars[i - 1].is_alphanumeric()
                    && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
                if inner_word {
                    out.push(c);
                }
            }
            '!' if chars.get(i + 1) == Some(&'[') => {}
            ']' => {
                if chars.get(i + 1) == Some(&'(') {
                    i = skip_destination(&chars, i + 1);
                }
            }
            '<' => match tag_end(&chars, i) {
                Some(close) => i = close,
                None => out.push(c),
            },
            _ => out.push(c),
        }
        i += 1;
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Index of the `)` balancing the `(` at `open`, or the last index when unbalanced.
fn skip_destination(chars: &[char], open: usize) -> usize {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    chars.len() - 1
}

/// Index of the `>` closing an inline tag opened at `open`, if the `<` there starts one.
///
/// Closing tags, comments and declarations always count. An opening tag counts when it carries
/// attributes, is self-closing, or names a lowercase HTML element, so `a < b` and `Vec<T>` stay
/// text while `<br>` and `<Badge text="new" />` are dropped.
fn tag_end(chars: &[char], open: usize) -> Option<usize> {
    let close = chars[open + 1..]
        .iter()
        .position(|&c| c == '>' || c == '<')
        .map(|offset| open + 1 + offset)
        .filter(|&at| chars[at] == '>')?;
    let first = *chars.get(open + 1)?;
    if first == '/' || first == '!' {
        return Some(close);
    }
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let name_end = chars[open + 1..close]
        .iter()
        .position(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':')))
        .map_or(close, |offset| open + 1 + offset);
    let is_tag = match chars[name_end] {
        '>' => first.is_ascii_lowercase(),
        '/' => name_end + 1 == close,
        c => c.is_whitespace(),
    };
    is_tag.then_some(close)
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
