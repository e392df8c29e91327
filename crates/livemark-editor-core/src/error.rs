//! Error types for the boundaries around the engine.
//!
//! Resolving decorations never fails; these cover style loading and the
//! parser hand-off.

use thiserror::Error;

/// Errors loading a [`MarkdownStyle`](crate::style::MarkdownStyle).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StyleError {
    /// A color string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// Malformed style JSON.
    #[error("malformed style: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors producing ranges from source text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The parser's range list could not be decoded.
    #[error("malformed range list: {0}")]
    Wire(#[from] serde_json::Error),

    /// The parser itself reported a failure.
    #[error("parser failed: {0}")]
    Parser(String),
}
