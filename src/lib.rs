//! Generative SVG patterns and invitation cards composed over them
//!
//! Three engines turn a pattern configuration into geometry: a turtle
//! interpreter for string-rewriting systems, a sampler for closed-form
//! curves and a polygon tiler. The geometry is wrapped into a repeating
//! fill that paints a fixed-size canvas, and a card compositor layers a
//! translucent overlay and six lines of text on top. An optional
//! structured-inference service chooses the engine, the configuration and
//! the text from a free-text request; every answer it fails to give is
//! replaced by a fixed fallback.

#![forbid(unsafe_code)]

/// Background and card composition
pub mod compose;
/// Pattern generation engines
pub mod engine;
/// Points and path descriptions
pub mod geometry;
/// Inference collaborator, routing and offline sampling
pub mod inference;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for angles and polar stepping
pub mod math;
/// Configuration, content and result types
pub mod model;
/// Engine dispatch and the prompt-driven generator
pub mod pipeline;

pub use io::error::{PatternError, Result};
