//! Drawable geometry for list scenes.
//!
//! - [`NodeGraph`] and [`NodeSize`] describe the node boxes
//! - [`ConnectorDescriptor`], [`ConnectorPath`] and [`TerminalGlyph`] describe
//!   the lines between them

mod connector;
mod node;

pub use connector::{
    ConnectorColors, ConnectorDescriptor, ConnectorDirection, ConnectorKind, ConnectorPath,
    FlowFlags, PathSegment, TerminalGlyph,
};
pub use node::{NodeGraph, NodeSize};
