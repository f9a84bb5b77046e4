//! Documents: front matter, body and headings of one source file.
//!
//! Front matter is a YAML block fenced by `---` lines at the very top of the file. It is split
//! off before parsing so its closing fence can never be mistaken for a setext underline.

use crate::error::Result;
use crate::formats::Format;
use crate::heading::HeadingNode;
use crate::input;
use crate::outline::{build_outline_with, OutlineNode, OutlineOptions};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Metadata block preceding the document body.
pub struct FrontMatter {
    /// Document title.
    pub title: Option<String>,
    /// One-line description shown under the title.
    pub description: Option<String>,
    /// Longer summary.
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
    /// Publication date, as written.
    pub date: Option<String>,
    /// Author name.
    pub author: Option<String>,
    /// Every other key, untouched.
    pub extra: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// Parse a YAML mapping. Blank input gives empty front matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut fields: BTreeMap<String, Value> = serde_yaml::from_str(yaml)?;
        let mut take = |key: &str| fields.remove(key).and_then(scalar_text);
        Ok(Self {
            title: take("title"),
            description: take("description"),
            summary: take("abstract"),
            date: take("date"),
            author: take("author"),
            extra: fields,
        })
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Split a leading front matter block from `source`.
///
/// Returns the raw YAML (empty when there is none), the body, and the zero-based line the body
/// starts on. An opening fence without a closing one is not front matter.
#[must_use]
pub fn split_front_matter(source: &str) -> (&str, &str, usize) {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return ("", source, 0);
    };
    if first.trim_end() != "---" {
        return ("", source, 0);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for (index, line) in lines.enumerate() {
        let fence = line.trim_end();
        if fence == "---" || fence == "..." {
            let body_start = offset + line.len();
            return (&source[yaml_start..offset], &source[body_start..], index + 2);
        }
        offset += line.len();
    }

    ("", source, 0)
}

#[derive(Clone, Debug)]
/// A parsed source file.
pub struct Document {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Full source text, front matter included.
    pub source: String,
    /// Parsed front matter.
    pub front_matter: FrontMatter,
    /// Line the body starts on.
    pub body_line: usize,
    /// Headings with lines relative to the full source.
    pub headings: Vec<HeadingNode>,
}

impl Document {
    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<F: Format + ?Sized>(path: &Path, format: &F) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(path, source, format)
    }

    /// Parse a document from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter is malformed or the body cannot be parsed.
    pub fn parse<F: Format + ?Sized>(path: &Path, source: String, format: &F) -> Result<Self> {
        let (yaml, body, body_line) = split_front_matter(&source);
        let front_matter = FrontMatter::from_yaml(yaml)?;
        let mut headings = input::extract_headings(body, format)?;
        for heading in &mut headings {
            heading.line += body_line;
        }
        debug!(path = %path.display(), headings = headings.len(), "document parsed");

        Ok(Self {
            path: path.to_path_buf(),
            source,
            front_matter,
            body_line,
            headings,
        })
    }

    #[must_use]
    /// Build the outline for this document.
    pub fn outline(&self, options: OutlineOptions) -> Vec<OutlineNode> {
        build_outline_with(&self.headings, options)
    }

    #[must_use]
    /// Front matter title, else the first top-level heading, else the file stem.
    pub fn title(&self) -> String {
        if let Some(title) = &self.front_matter.title {
            return title.clone();
        }
        if let Some(heading) = self.headings.iter().find(|h| h.level == 1) {
            return heading.plain_text();
        }
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    /// Number of lines in the full source.
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
