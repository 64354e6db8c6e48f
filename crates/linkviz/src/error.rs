//! Error types for linkviz operations.
//!
//! This module provides the main error type [`LinkvizError`] which wraps
//! the error conditions that can occur while building a session, replaying a
//! script or rendering a scene.

use std::io;

use thiserror::Error;

use linkviz_script::error::ParseError;

use crate::{export, layout::LayoutError};

/// The main error type for linkviz operations.
///
/// # Diagnostic Variants
///
/// The `Script` variant keeps the script source next to the parse error so
/// the diagnostics' spans can be rendered against it.
#[derive(Debug, Error)]
pub enum LinkvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Script { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinkvizError {
    /// Create a new `Script` error with the associated source code.
    pub fn new_script_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Script {
            err,
            src: src.into(),
        }
    }
}
