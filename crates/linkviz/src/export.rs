//! Export of laid-out scenes.
//!
//! # Pipeline Position
//!
//! ```text
//! List values
//!     ↓ layout
//! Scene (positioned nodes and connectors)
//!     ↓ palette
//! Colored Scene
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use crate::layout::Scene;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Exports a colored scene to the backend's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error>;
}

/// Errors that can occur during scene export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
