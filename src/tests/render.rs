use super::{render, visible, OutlineRenderer, DEFAULT_MAX_DEPTH};
use crate::heading::HeadingNode;
use crate::outline::build_outline;

fn chain(depth: usize) -> Vec<HeadingNode> {
    (1..=depth)
        .map(|level| HeadingNode::new(level, format!("Level {level}"), level))
        .collect()
}

#[test]
fn test_marks_only_active_slug() {
    let outline = build_outline(&[
        HeadingNode::new(2, "Web is the medium", 0),
        HeadingNode::new(3, "Machine readability", 4),
        HeadingNode::new(2, "Analytics", 8),
    ]);
    let items = OutlineRenderer::default().render_document(&outline, Some("machine-readability"));
    let active: Vec<&str> = visible(&items)
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.slug.as_str())
        .collect();
    assert_eq!(active, vec!["machine-readability"]);
    assert_eq!(items[0].href.as_deref(), Some("#web-is-the-medium"));
}

#[test]
fn test_no_active_before_tracking() {
    let outline = build_outline(&[HeadingNode::new(1, "A", 0)]);
    let items = render(&outline, None, 1, DEFAULT_MAX_DEPTH);
    assert!(!items[0].active);
}

#[test]
fn test_empty_slug_never_active() {
    let outline = build_outline(&[HeadingNode::new(2, "", 0), HeadingNode::new(2, "B", 2)]);
    let items = render(&outline, Some(""), 1, DEFAULT_MAX_DEPTH);
    assert!(items.iter().all(|item| !item.active));
    assert_eq!(items[0].href, None);
}

#[test]
fn test_depth_bound() {
    let outline = build_outline(&chain(7));
    let items = OutlineRenderer::default().render_document(&outline, None);
    let rendered = visible(&items);
    assert_eq!(rendered.len(), 5);
    assert!(rendered.iter().all(|item| item.depth <= 5));
    assert_eq!(rendered[4].label, "Level 5");
    assert!(rendered[4].children.is_empty(), "depth 5 renders as a leaf");
}

#[test]
fn test_custom_depth_bound() {
    let outline = build_outline(&chain(4));
    let items = OutlineRenderer::new(2).render_document(&outline, Some("level-4"));
    assert_eq!(visible(&items).len(), 2);
    assert!(visible(&items).iter().all(|item| !item.active));
    assert_eq!(OutlineRenderer::new(0).max_depth, 1);
}

#[test]
fn test_subtree_render_starts_at_depth() {
    let outline = build_outline(&chain(3));
    let items = render(&outline[0].children, None, 2, 2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].depth, 2);
    assert!(items[0].children.is_empty());
    assert!(render(&outline, None, 6, 5).is_empty());
}

#[test]
fn test_empty_outline() {
    assert!(render(&[], Some("anything"), 1, DEFAULT_MAX_DEPTH).is_empty());
}
