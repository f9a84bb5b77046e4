use super::ViewportSurface;
use crate::tracker::{ActiveSectionTracker, IntersectionEvent, ObservationSurface, TriggerBand};

fn anchors() -> Vec<(String, usize)> {
    vec![
        ("a".to_string(), 0),
        ("b".to_string(), 10),
        ("c".to_string(), 20),
    ]
}

fn tracker(band: TriggerBand, height: usize) -> ActiveSectionTracker<ViewportSurface> {
    let surface = ViewportSurface::new(anchors(), 30, height);
    ActiveSectionTracker::mount(["c", "a", "b", "ghost"], surface, band)
}

#[test]
fn test_registration_in_document_order() {
    let tracker = tracker(TriggerBand::default(), 10);
    assert_eq!(tracker.observed(), vec!["c", "a", "b"]);
    assert_eq!(tracker.surface().registered(), 3);
}

#[test]
fn test_initial_evaluation_activates_top_heading() {
    let mut tracker = tracker(TriggerBand::default(), 10);
    let events = tracker.surface_mut().evaluate();
    assert_eq!(events, vec![IntersectionEvent::entered("a")]);
    tracker.handle(&events);
    assert_eq!(tracker.active(), Some("a"));
}

#[test]
fn test_scrolling_moves_active_section() {
    let mut tracker = tracker(TriggerBand::default(), 10);
    let events = tracker.surface_mut().evaluate();
    tracker.handle(&events);

    // Band is the top fifth: lines [9, 11) hold "b".
    let events = tracker.surface_mut().scroll_to(9);
    assert_eq!(
        events,
        vec![IntersectionEvent::left("a"), IntersectionEvent::entered("b")]
    );
    tracker.handle(&events);
    assert_eq!(tracker.active(), Some("b"));

    // Between anchors nothing enters, so "b" stays active.
    let events = tracker.surface_mut().scroll_by(4);
    tracker.handle(&events);
    assert_eq!(tracker.active(), Some("b"));

    let events = tracker.surface_mut().scroll_by(-13);
    assert_eq!(events, vec![IntersectionEvent::entered("a")]);
    tracker.handle(&events);
    assert_eq!(tracker.active(), Some("a"));
}

#[test]
fn test_scroll_clamps_to_document() {
    let mut surface = ViewportSurface::new(anchors(), 30, 10);
    surface.scroll_to(500);
    assert_eq!(surface.offset(), 29);
    surface.scroll_by(-100);
    assert_eq!(surface.offset(), 0);
}

#[test]
fn test_scroll_to_anchor_respects_band() {
    let band = TriggerBand::new(0.5, 0.25).unwrap();
    let mut tracker = tracker(band, 8);
    let events = tracker
        .surface_mut()
        .scroll_to_anchor("c")
        .unwrap_or_default();
    assert_eq!(tracker.surface().offset(), 16);
    assert_eq!(tracker.surface().band_lines(band), (20, 22));
    tracker.handle(&events);
    assert_eq!(tracker.active(), Some("c"));
    assert!(tracker.surface_mut().scroll_to_anchor("ghost").is_none());
}

#[test]
fn test_resize_reevaluates() {
    let mut tracker = tracker(TriggerBand::default(), 10);
    tracker.surface_mut().scroll_to(5);
    assert!(tracker.surface_mut().evaluate().is_empty());
    // Fifty rows make the band [5, 15), which now reaches "b".
    let events = tracker.surface_mut().resize(50);
    assert_eq!(events, vec![IntersectionEvent::entered("b")]);
}

#[test]
fn test_unmount_clears_surface() {
    let mut tracker = tracker(TriggerBand::default(), 10);
    tracker.unmount();
    assert_eq!(tracker.surface().registered(), 0);
    let events = tracker.surface_mut().scroll_to(10);
    assert!(events.is_empty());
    assert!(!tracker.handle(&[IntersectionEvent::entered("b")]));
    assert_eq!(tracker.active(), None);
}

#[test]
fn test_each_registration_keeps_its_own_band() {
    let mut surface = ViewportSurface::new(anchors(), 30, 10);
    // "a" watches the top fifth, "b" watches the bottom half: rows [5, 10).
    let _a = surface.observe("a", TriggerBand::default()).unwrap();
    let _b = surface.observe("b", TriggerBand::new(0.5, 0.0).unwrap()).unwrap();
    let events = surface.evaluate();
    assert_eq!(events, vec![IntersectionEvent::entered("a")]);

    // Offset 1: "a" leaves the top band, "b" at line 10 lands in rows [6, 11).
    let events = surface.scroll_to(1);
    assert_eq!(
        events,
        vec![IntersectionEvent::left("a"), IntersectionEvent::entered("b")]
    );
}
