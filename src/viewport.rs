//! A line-addressed viewport acting as an observation surface.
//!
//! The terminal reader shows a window of `height` lines starting at `offset`. Anchors sit on the
//! source line of their heading. Every scroll or resize re-evaluates which registered anchors
//! fall inside the trigger band and reports the ones that crossed it.

use crate::tracker::{IntersectionEvent, ObservationSurface, TriggerBand};
use std::collections::{HashMap, HashSet};
use tracing::trace;

#[derive(Debug, PartialEq, Eq)]
/// Live registration of one anchor on a [`ViewportSurface`].
pub struct AnchorRegistration {
    slug: String,
}

#[derive(Debug)]
/// Scrollable window over a document with anchors at fixed lines.
pub struct ViewportSurface {
    anchors: HashMap<String, usize>,
    /// Registered anchors sorted by line, so events come out in document order. Each keeps
    /// the band it was observed with.
    registered: Vec<(usize, String, TriggerBand)>,
    inside: HashSet<String>,
    total_lines: usize,
    offset: usize,
    height: usize,
}

impl ViewportSurface {
    #[must_use]
    /// Viewport over `total_lines` lines, `height` rows tall, scrolled to the top.
    pub fn new(anchors: Vec<(String, usize)>, total_lines: usize, height: usize) -> Self {
        Self {
            anchors: anchors.into_iter().collect(),
            registered: Vec::new(),
            inside: HashSet::new(),
            total_lines,
            offset: 0,
            height,
        }
    }

    #[must_use]
    /// First visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    /// Lines in the document.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    #[must_use]
    /// Absolute line range `[start, end)` currently covered by `band`.
    pub fn band_lines(&self, band: TriggerBand) -> (usize, usize) {
        let (start, end) = band.rows(self.height);
        (self.offset + start, self.offset + end)
    }

    fn band_of(&self, slug: &str) -> Option<TriggerBand> {
        self.registered
            .iter()
            .find(|(_, registered, _)| registered == slug)
            .map(|(_, _, band)| *band)
    }

    #[must_use]
    /// Line an anchor sits on.
    pub fn line_of(&self, slug: &str) -> Option<usize> {
        self.anchors.get(slug).copied()
    }

    #[must_use]
    /// Number of anchors currently registered.
    pub fn registered(&self) -> usize {
        self.registered.len()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(1)
    }

    /// Report registered anchors that entered or left the band since the last evaluation.
    pub fn evaluate(&mut self) -> Vec<IntersectionEvent> {
        let mut events = Vec::new();
        for (line, slug, band) in &self.registered {
            let (start, end) = band.rows(self.height);
            let now_inside = (self.offset + start..self.offset + end).contains(line);
            let was_inside = self.inside.contains(slug);
            if now_inside && !was_inside {
                self.inside.insert(slug.clone());
                events.push(IntersectionEvent::entered(slug.clone()));
            } else if !now_inside && was_inside {
                self.inside.remove(slug);
                events.push(IntersectionEvent::left(slug.clone()));
            }
        }
        if !events.is_empty() {
            trace!(offset = self.offset, count = events.len(), "band crossings");
        }
        events
    }

    /// Scroll so `offset` is the first visible line (clamped to the document).
    pub fn scroll_to(&mut self, offset: usize) -> Vec<IntersectionEvent> {
        self.offset = offset.min(self.max_offset());
        self.evaluate()
    }

    /// Scroll by `delta` lines, negative meaning up.
    pub fn scroll_by(&mut self, delta: isize) -> Vec<IntersectionEvent> {
        let offset = self.offset.saturating_add_signed(delta);
        self.scroll_to(offset)
    }

    /// Scroll so the anchor's line is the first line of the band it was observed with.
    pub fn scroll_to_anchor(&mut self, slug: &str) -> Option<Vec<IntersectionEvent>> {
        let line = self.line_of(slug)?;
        let band = self.band_of(slug).unwrap_or_default();
        let (band_start, _) = band.rows(self.height);
        Some(self.scroll_to(line.saturating_sub(band_start)))
    }

    /// Change the number of visible rows.
    pub fn resize(&mut self, height: usize) -> Vec<IntersectionEvent> {
        self.height = height;
        self.evaluate()
    }
}

impl ObservationSurface for ViewportSurface {
    type Registration = AnchorRegistration;

    fn observe(&mut self, slug: &str, band: TriggerBand) -> Option<AnchorRegistration> {
        let line = self.line_of(slug)?;
        let at = self.registered.partition_point(|(l, _, _)| *l <= line);
        self.registered.insert(at, (line, slug.to_string(), band));
        Some(AnchorRegistration {
            slug: slug.to_string(),
        })
    }

    fn release(&mut self, registration: AnchorRegistration) {
        self.registered
            .retain(|(_, slug, _)| *slug != registration.slug);
        self.inside.remove(&registration.slug);
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
