//! Geometry primitives and the path assembler
//!
//! Engines produce either ordered point sequences or path descriptions;
//! both are plain values created per request and dropped after rendering.

/// Path commands and conversion from points and polygons
pub mod path;
/// Two-dimensional points
pub mod point;

pub use path::{PathCommand, PathData};
pub use point::Point;
