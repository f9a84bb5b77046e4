//! marginalia: outlines, anchors and scroll-tracked tables of contents for markdown documents.
//!
//! A document is split into front matter and body, its headings are extracted with tree-sitter,
//! and the heading list is nested into an outline whose every node carries a unique anchor slug.
//! The outline feeds two consumers: a pure renderer producing a navigational tree, and an
//! active-section tracker driven by visibility events from whatever surface displays the text.
#![allow(clippy::multiple_crate_versions)]

pub mod anchor;
pub mod app_state;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod heading;
pub mod html;
pub mod input;
pub mod logging;
pub mod outline;
pub mod render;
pub mod tracker;
pub mod ui;
pub mod viewport;

pub use error::{Error, Result};
