//! The core state machine bridging a document, its outline and the interactive reader.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user scrolls
//! and jumps around. Each open document gets a [`Reader`]: the parsed document, its outline, a
//! tracker mounted on a terminal viewport, and the rendered contents for the current active
//! section. Scrolling moves the viewport, the viewport reports band crossings, the tracker
//! decides the active section, and the contents are re-rendered when that changes.

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::formats::markdown::MarkdownFormat;
use crate::outline::{anchors, count, find, flatten, OutlineNode, OutlineOptions};
use crate::render::{visible, NavItem, OutlineRenderer};
use crate::tracker::{ActiveSectionTracker, IntersectionEvent, TriggerBand};
use crate::viewport::ViewportSurface;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, PartialEq)]
/// Determines navigation scope and quit behavior based on project size.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(Debug, PartialEq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files for multi-file projects.
    FileList,
    /// Shows a document next to its table of contents.
    Reader,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Which reader pane receives movement keys.
pub enum Focus {
    /// Movement keys scroll the document.
    Document,
    /// Movement keys move the contents selection.
    Contents,
}

/// One mounted document view.
pub struct Reader {
    /// The parsed document.
    pub document: Document,
    /// Outline built once when the document was opened.
    pub outline: Vec<OutlineNode>,
    /// Active-section tracker observing the viewport.
    pub tracker: ActiveSectionTracker<ViewportSurface>,
    /// Contents rendered for the current active section.
    pub nav: Vec<NavItem>,
    /// Index of the highlighted contents entry in display order.
    pub selected: usize,
    renderer: OutlineRenderer,
}

impl Reader {
    /// Parse the document at `path` and mount a tracker on a fresh viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    pub fn open(
        path: &Path,
        options: OutlineOptions,
        renderer: OutlineRenderer,
        band: TriggerBand,
    ) -> Result<Self> {
        let document = Document::load(path, &MarkdownFormat)?;
        let outline = document.outline(options);
        let surface = ViewportSurface::new(anchors(&outline), document.line_count(), 0);
        let tracker = ActiveSectionTracker::mount(flatten(&outline), surface, band);
        let nav = renderer.render_document(&outline, None);
        debug!(
            path = %path.display(),
            headings = count(&outline),
            observed = tracker.observed().len(),
            "reader opened"
        );

        Ok(Self {
            document,
            outline,
            tracker,
            nav,
            selected: 0,
            renderer,
        })
    }

    #[must_use]
    /// Active slug, if any section has become active.
    pub fn active(&self) -> Option<&str> {
        self.tracker.active()
    }

    #[must_use]
    /// Contents entries in display order.
    pub fn entries(&self) -> Vec<&NavItem> {
        visible(&self.nav)
    }

    /// Feed viewport events to the tracker and re-render when the active section moved.
    fn apply(&mut self, events: &[IntersectionEvent]) -> bool {
        let changed = self.tracker.handle(events);
        if changed {
            self.rerender();
        }
        changed
    }

    fn rerender(&mut self) {
        self.nav = self
            .renderer
            .render_document(&self.outline, self.tracker.active());
    }

    fn select_active(&mut self) {
        if let Some(active) = self.tracker.active() {
            if let Some(index) = visible(&self.nav).iter().position(|item| item.slug == active) {
                self.selected = index;
            }
        }
    }

    /// Scroll by `delta` lines.
    pub fn scroll_by(&mut self, delta: isize) {
        let events = self.tracker.surface_mut().scroll_by(delta);
        if self.apply(&events) {
            self.select_active();
        }
    }

    /// Scroll to an absolute line.
    pub fn scroll_to(&mut self, offset: usize) {
        let events = self.tracker.surface_mut().scroll_to(offset);
        if self.apply(&events) {
            self.select_active();
        }
    }

    /// Change the viewport height, as after a terminal resize.
    pub fn resize(&mut self, height: usize) {
        if self.tracker.surface().height() == height {
            return;
        }
        let events = self.tracker.surface_mut().resize(height);
        if self.apply(&events) {
            self.select_active();
        }
    }

    /// Jump to the selected contents entry.
    ///
    /// The entry becomes active immediately; the scroll that follows may report other anchors
    /// entering the band, and those win as any later event would.
    pub fn navigate_selected(&mut self) -> Option<String> {
        let slug = self.entries().get(self.selected)?.slug.clone();
        if slug.is_empty() || !self.tracker.navigate(&slug) {
            return None;
        }
        self.rerender();
        if let Some(events) = self.tracker.surface_mut().scroll_to_anchor(&slug) {
            self.apply(&events);
        }
        debug!(slug = %slug, line = ?find(&self.outline, &slug).map(|node| node.line), "navigated");
        Some(slug)
    }

    /// Move the contents selection by `delta` entries.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.entries().len();
        if count == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
    }

    /// Release the tracker's registrations.
    pub fn close(&mut self) {
        self.tracker.unmount();
    }
}

/// Bridges the document list and the reader, maintaining session state.
pub struct AppState {
    /// File paths available for reading.
    pub files: Vec<PathBuf>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls navigation behavior and file list visibility.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Pane receiving movement keys in the reader.
    pub focus: Focus,
    /// The open document, if any.
    pub reader: Option<Reader>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    options: OutlineOptions,
    renderer: OutlineRenderer,
    band: TriggerBand,
}

impl AppState {
    #[must_use]
    /// Initialises application state and determines file mode.
    ///
    /// Single-file projects skip the file list and quit directly to shell, while multi-file
    /// projects show a file selector and return to it on 'q'.
    pub fn new(files: Vec<PathBuf>, config: &Config, band: TriggerBand) -> Self {
        let file_mode = if files.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };

        Self {
            files,
            current_file_index: 0,
            file_mode,
            current_view: View::FileList,
            focus: Focus::Document,
            reader: None,
            message: None,
            options: config.outline_options(),
            renderer: config.renderer(),
            band,
        }
    }

    /// Open the selected file in the reader, closing whatever was open.
    ///
    /// A document that fails to load leaves the app on the file list with a message.
    pub fn open_current(&mut self) {
        self.close_reader();
        let Some(path) = self.files.get(self.current_file_index) else {
            return;
        };
        match Reader::open(path, self.options, self.renderer, self.band) {
            Ok(reader) => {
                self.reader = Some(reader);
                self.current_view = View::Reader;
                self.focus = Focus::Document;
                self.message = None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open document");
                self.message = Some(format!("Cannot open {}: {e}", path.display()));
                self.current_view = View::FileList;
            }
        }
    }

    /// Unmount and drop the open document.
    pub fn close_reader(&mut self) {
        if let Some(mut reader) = self.reader.take() {
            reader.close();
        }
    }

    /// Leave the reader. Returns `true` when the app should quit.
    pub fn back(&mut self) -> bool {
        if self.file_mode == FileMode::Multi && self.current_view == View::Reader {
            self.close_reader();
            self.current_view = View::FileList;
            false
        } else {
            true
        }
    }

    /// Switch focus between the document and the contents.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Document => Focus::Contents,
            Focus::Contents => Focus::Document,
        };
    }

    /// Move the file list selection by `delta` entries.
    pub fn move_file_selection(&mut self, delta: isize) {
        if self.files.is_empty() {
            return;
        }
        self.current_file_index = self
            .current_file_index
            .saturating_add_signed(delta)
            .min(self.files.len() - 1);
    }

    /// Jump to the selected contents entry and report it in the status bar.
    pub fn navigate_selected(&mut self) {
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        self.message = match reader.navigate_selected() {
            Some(slug) => Some(format!("#{slug}")),
            None => Some("Heading has no anchor".to_string()),
        };
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
