//! Utility modules.

pub mod geometry;

pub use geometry::*;
