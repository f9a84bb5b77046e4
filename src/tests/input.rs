use super::{extract_headings, find_documents};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_find_documents_filters_and_sorts() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("posts/drafts")).unwrap();
    fs::create_dir_all(root.join(".hidden")).unwrap();
    fs::write(root.join("posts/b.mdx"), "# B").unwrap();
    fs::write(root.join("posts/a.md"), "# A").unwrap();
    fs::write(root.join("posts/drafts/c.MD"), "# C").unwrap();
    fs::write(root.join("posts/image.png"), "").unwrap();
    fs::write(root.join(".hidden/d.md"), "# D").unwrap();

    let extensions = vec!["md".to_string(), "mdx".to_string()];
    let found = find_documents(vec![root.to_path_buf(), root.join("posts/a.md")], &extensions).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, vec!["posts/a.md", "posts/b.mdx", "posts/drafts/c.MD"]);
}

#[test]
fn test_find_documents_missing_path() {
    let dir = tempdir().unwrap();
    let result = find_documents(vec![dir.path().join("nope.md")], &["md".to_string()]);
    assert!(result.is_err());
}

#[test]
fn test_explicit_file_kept_regardless_of_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("README.txt");
    fs::write(&path, "# Readme").unwrap();
    let found = find_documents(vec![path.clone()], &["md".to_string()]).unwrap();
    assert_eq!(found, vec![path]);
}

#[test]
fn test_extract_headings_levels() {
    let source = "# One\n\ntext\n\n## Two\n\n###### Six\n\n    # indented code\n";
    let headings = extract_headings(source, &MarkdownFormat).unwrap();
    let levels: Vec<(usize, usize, &str)> = headings
        .iter()
        .map(|h| (h.level, h.line, h.text.as_str()))
        .collect();
    assert_eq!(levels, vec![(1, 0, "One"), (2, 4, "Two"), (6, 6, "Six")]);
}

#[test]
fn test_extract_keeps_inline_markup() {
    let headings = extract_headings("## The **rise** of `x`\n", &MarkdownFormat).unwrap();
    assert_eq!(headings[0].text, "The **rise** of `x`");
    assert_eq!(headings[0].plain_text(), "The rise of x");
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_cycle_is_not_followed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.md"), "# A").unwrap();
    std::os::unix::fs::symlink(root, root.join("loop")).unwrap();

    let found = find_documents(vec![root.to_path_buf()], &["md".to_string()]).unwrap();
    assert_eq!(found, vec![root.join("a.md")]);
}
