//! Request pipeline: engine dispatch, composition and fallbacks

/// Engine dispatch and the prompt-driven card flow
pub mod generator;

pub use generator::{Generator, build_tile, compose_card, render_pattern};
