//! Error types shared across document loading, configuration and tracking.

use thiserror::Error;

/// Failures surfaced to callers of the library.
///
/// Heading text that cannot be slugged, duplicate headings, and anchors missing at tracker
/// setup are deliberately absent: those degrade locally instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a document or configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML block at the top of a document could not be parsed.
    #[error("front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    /// Serialising an outline to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("grammar error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// A format's heading query did not compile against its grammar.
    #[error("query error: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// tree-sitter produced no tree for a document.
    #[error("failed to parse {0}")]
    Parse(String),

    /// `marginalia.toml` exists but is not valid.
    #[error("config error: {0}")]
    Config(String),

    /// A trigger band leaves no visible region or uses fractions outside `[0, 1)`.
    #[error("invalid trigger band: top {top}, bottom {bottom}")]
    InvalidBand {
        /// Fraction excluded from the top of the viewport.
        top: f64,
        /// Fraction excluded from the bottom of the viewport.
        bottom: f64,
    },
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
