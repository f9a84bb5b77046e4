//! Locating documents on disk and extracting their headings.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::heading::HeadingNode;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tracing::{debug, warn};
use tree_sitter::{Parser, Query, QueryCursor};
use walkdir::{DirEntry, WalkDir};

/// Expand paths into the documents they name.
///
/// Files are kept as given; directories are walked recursively for files whose suffix is in
/// `extensions`. Hidden entries inside directories are skipped and symlinked directories are
/// not descended into. The result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    documents.sort();
    documents.dedup();
    debug!(count = documents.len(), "documents found");
    Ok(documents)
}

fn walk(dir: &Path, extensions: &[String], documents: &mut Vec<PathBuf>) -> io::Result<()> {
    let entries = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(path, extensions) {
            documents.push(path.to_path_buf());
        }
    }
    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Parse `source` and return its headings in document order, lines relative to `source`.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded, or tree-sitter gives up.
pub fn extract_headings<F: Format + ?Sized>(source: &str, format: &F) -> Result<Vec<HeadingNode>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("document".to_string()))?;
    let query = Query::new(&language, format.heading_query())?;

    let bytes = source.as_bytes();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    let mut headings = Vec::new();

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(node) else {
                warn!(kind = node.kind(), "captured node is not a heading");
                continue;
            };
            let text = format.heading_text(node, bytes);
            headings.push(HeadingNode::new(level, text, node.start_position().row));
        }
    }

    headings.sort_by_key(|heading| heading.line);
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
