//! Layout engine for positioning list nodes and routing their connectors.
//!
//! This module turns a snapshot of list values into positioned geometry ready
//! for rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! List values
//!     ↓ LayoutEngine (node centers, row wrapping)
//!     ↓ ConnectorRouter (connector descriptors, paths, glyphs)
//! Scene
//!     ↓ palette, export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`LayoutParams`] - Dimensions shared by the engine, router and validator
//! - [`LayoutEngine`] - Boustrophedon node placement
//! - [`ConnectorRouter`] - Connector endpoints, line shapes and end markers
//! - [`LayoutValidator`] - Checks that a parameter set fits its canvas
//! - [`Scene`] - The nodes and connectors of one redraw

mod engine;
mod params;
mod router;
mod scene;
mod validator;

use thiserror::Error;

pub use engine::LayoutEngine;
pub use params::{CurveRatio, LayoutParams};
pub use router::{ConnectorRouter, ConnectorStyle};
pub use scene::Scene;
pub use validator::{Infeasibility, LayoutValidator};

/// Errors produced while laying out a scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// More nodes were supplied than the layout can hold.
    #[error("cannot lay out {count} nodes; the canvas holds at most {max}")]
    CapacityExceeded { count: usize, max: usize },

    /// The parameters cannot produce a layout that fits the canvas.
    #[error("layout parameters do not fit the canvas: {0}")]
    Infeasible(#[from] Infeasibility),
}
