//! Mathematical utilities shared by the pattern engines

/// Angle conversion and polar stepping helpers
pub mod angle;
