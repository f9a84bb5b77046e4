//! Active-section tracking driven by visibility events.
//!
//! Whatever displays the document (a browser, a terminal viewport) is modelled as an
//! [`ObservationSurface`]: it can watch an anchor and later stop watching it, and it reports
//! batches of [`IntersectionEvent`]s as anchors cross its [`TriggerBand`]. The tracker turns
//! those batches into a single "active slug".
//!
//! ```text
//! Uninitialized --entered(s)--> Tracking(s) --entered(t)--> Tracking(t)
//!               --navigate(s)->             --navigate(t)->
//! ```
//!
//! The most recently delivered event wins. A manual [`navigate`](ActiveSectionTracker::navigate)
//! is not sticky: the next visibility event overrides it. Once unmounted, every registration
//! has been released and nothing mutates the state any more.

use crate::error::{Error, Result};
use tracing::{debug, trace};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The section currently considered in view.
pub enum ActiveSection {
    /// No section has entered the band yet.
    #[default]
    Uninitialized,
    /// The last section reported entering the band (or navigated to).
    Tracking(String),
}

impl ActiveSection {
    #[must_use]
    /// Active slug, if any.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Uninitialized => None,
            Self::Tracking(slug) => Some(slug),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Region of the viewport, as fractions of its height, where headings become active.
///
/// The default excludes nothing at the top and the lower 80%, so a heading becomes active as
/// soon as it reaches the upper fifth of the viewport.
pub struct TriggerBand {
    top: f64,
    bottom: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top: 0.0,
            bottom: 0.8,
        }
    }
}

impl TriggerBand {
    /// Band excluding `top` of the viewport from above and `bottom` from below.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBand`] if either fraction lies outside `[0, 1)` or together they
    /// leave no visible region.
    pub fn new(top: f64, bottom: f64) -> Result<Self> {
        let valid = (0.0..1.0).contains(&top) && (0.0..1.0).contains(&bottom) && top + bottom < 1.0;
        if valid {
            Ok(Self { top, bottom })
        } else {
            Err(Error::InvalidBand { top, bottom })
        }
    }

    #[must_use]
    /// Fraction excluded from the top.
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    /// Fraction excluded from the bottom.
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    /// Half-open row range `[start, end)` covered by the band in a viewport `height` rows tall.
    ///
    /// The band always covers at least one row of a non-empty viewport.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn rows(self, height: usize) -> (usize, usize) {
        if height == 0 {
            return (0, 0);
        }
        let rows = height as f64;
        let start = ((rows * self.top).floor() as usize).min(height - 1);
        let end = ((rows * (1.0 - self.bottom)).ceil() as usize).clamp(start + 1, height);
        (start, end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A watched anchor crossing the trigger band.
pub struct IntersectionEvent {
    /// Anchor slug the event is about.
    pub slug: String,
    /// `true` when the anchor entered the band, `false` when it left.
    pub entered: bool,
}

impl IntersectionEvent {
    #[must_use]
    /// An anchor entering the band.
    pub fn entered(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            entered: true,
        }
    }

    #[must_use]
    /// An anchor leaving the band.
    pub fn left(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            entered: false,
        }
    }
}

/// Something that displays anchors and can report when they cross its trigger band.
pub trait ObservationSurface {
    /// Token returned for each successful registration and handed back on release.
    type Registration;

    /// Start watching `slug` with the given band. `None` if there is no such anchor.
    fn observe(&mut self, slug: &str, band: TriggerBand) -> Option<Self::Registration>;

    /// Stop watching a previously registered anchor.
    fn release(&mut self, registration: Self::Registration);
}

/// Holds the active slug for one mounted document view.
pub struct ActiveSectionTracker<S: ObservationSurface> {
    surface: S,
    band: TriggerBand,
    state: ActiveSection,
    observed: Vec<(String, S::Registration)>,
    mounted: bool,
}

impl<S: ObservationSurface> ActiveSectionTracker<S> {
    /// Register every slug with `surface` and start in [`ActiveSection::Uninitialized`].
    ///
    /// Empty slugs and slugs the surface has no anchor for are skipped.
    pub fn mount<I, T>(slugs: I, mut surface: S, band: TriggerBand) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut observed = Vec::new();
        for slug in slugs {
            let slug = slug.as_ref();
            if slug.is_empty() {
                continue;
            }
            match surface.observe(slug, band) {
                Some(registration) => observed.push((slug.to_string(), registration)),
                None => debug!(slug, "no anchor to observe, skipping"),
            }
        }
        debug!(observed = observed.len(), "tracker mounted");

        Self {
            surface,
            band,
            state: ActiveSection::Uninitialized,
            observed,
            mounted: true,
        }
    }

    #[must_use]
    /// Current state.
    pub fn state(&self) -> &ActiveSection {
        &self.state
    }

    #[must_use]
    /// Current active slug, if any.
    pub fn active(&self) -> Option<&str> {
        self.state.slug()
    }

    #[must_use]
    /// Slugs with a live registration, in registration order.
    pub fn observed(&self) -> Vec<&str> {
        self.observed.iter().map(|(slug, _)| slug.as_str()).collect()
    }

    #[must_use]
    /// Whether the tracker still reacts to events.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    /// Trigger band the anchors were registered with.
    pub fn band(&self) -> TriggerBand {
        self.band
    }

    #[must_use]
    /// The surface being observed.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface being observed, e.g. to scroll it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn is_observed(&self, slug: &str) -> bool {
        self.observed.iter().any(|(observed, _)| observed == slug)
    }

    /// Apply a batch of events in delivery order. Returns whether the active slug changed.
    pub fn handle(&mut self, events: &[IntersectionEvent]) -> bool {
        if !self.mounted {
            trace!(count = events.len(), "events after unmount ignored");
            return false;
        }

        let before = self.state.clone();
        for event in events {
            if !event.entered {
                continue;
            }
            if self.is_observed(&event.slug) {
                self.state = ActiveSection::Tracking(event.slug.clone());
            } else {
                trace!(slug = %event.slug, "event for unobserved anchor");
            }
        }

        let changed = before != self.state;
        if changed {
            debug!(active = ?self.state.slug(), "active section changed");
        }
        changed
    }

    /// Make `slug` active right away, as when the reader picks a contents entry.
    ///
    /// Returns `false` (and changes nothing) for unobserved slugs or after unmount.
    pub fn navigate(&mut self, slug: &str) -> bool {
        if !self.mounted || !self.is_observed(slug) {
            return false;
        }
        self.state = ActiveSection::Tracking(slug.to_string());
        true
    }

    /// Release every registration and stop reacting to events.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let released = self.observed.len();
        for (_, registration) in self.observed.drain(..) {
            self.surface.release(registration);
        }
        self.mounted = false;
        debug!(released, "tracker unmounted");
    }
}

impl<S: ObservationSurface> Drop for ActiveSectionTracker<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
