//! Pattern generation engines
//!
//! Each engine is a pure function of its configuration. The dispatcher in
//! [`crate::pipeline`] picks the engine by matching on
//! [`crate::model::PatternConfig`].

/// Closed-form curve sampling
pub mod parametric;
/// Polygon tiles and repeat geometry
pub mod tessellation;
/// String rewriting and turtle interpretation
pub mod turtle;
