//! linkviz Core Types and Definitions
//!
//! This crate provides the foundational types for linkviz, the linked-list
//! visualizer. It includes:
//!
//! - **Lists**: Arena-backed single, dual and circular lists ([`list`] module)
//! - **Checks**: Input checking shared by list operations ([`check`] module)
//! - **Control**: Requests a front end sends to a session ([`control`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Node and connector graphics ([`draw`] module)

pub mod check;
pub mod color;
pub mod control;
pub mod draw;
pub mod geometry;
pub mod list;
