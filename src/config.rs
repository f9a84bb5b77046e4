//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a marginalia.toml, and if present we load settings from there.
//! This provides file extensions, the heading window and depth of the table of contents, and
//! the trigger band that decides when a section becomes active.

use crate::error::{Error, Result};
use crate::outline::OutlineOptions;
use crate::render::OutlineRenderer;
use crate::tracker::TriggerBand;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "marginalia.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from marginalia.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "mdx".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = 5)]
    /// Deepest table of contents level rendered.
    pub max_depth: usize,
    #[facet(default = 1)]
    /// Shallowest heading rank included in the outline.
    pub min_level: usize,
    #[facet(default = 6)]
    /// Deepest heading rank included in the outline.
    pub max_level: usize,
    #[facet(default = 0.0)]
    /// Fraction of the viewport excluded from the top of the trigger band.
    pub band_top: f64,
    #[facet(default = 0.8)]
    /// Fraction of the viewport excluded from the bottom of the trigger band.
    pub band_bottom: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string(), "mdx".to_string()],
            max_depth: 5,
            min_level: 1,
            max_level: 6,
            band_top: 0.0,
            band_bottom: 0.8,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from marginalia.toml if present.
    ///
    /// An unreadable or invalid file is reported and the defaults are used instead.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this struct.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this struct.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Trigger band described by `band_top` and `band_bottom`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fractions do not describe a usable band.
    pub fn band(&self) -> Result<TriggerBand> {
        TriggerBand::new(self.band_top, self.band_bottom)
    }

    #[must_use]
    /// Heading window for outline construction.
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    #[must_use]
    /// Renderer bounded by `max_depth`.
    pub fn renderer(&self) -> OutlineRenderer {
        OutlineRenderer::new(self.max_depth)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
