//! Composition of generated geometry into documents
//!
//! The tile compositor wraps geometry into a repeating fill and paints the
//! canvas with it. The card compositor layers an overlay and text on top of
//! such a background.

/// Card layering over a tiled background
pub mod card;
/// Escaping and document scaffolding shared by the compositors
pub mod markup;
/// Repeating fill definitions and background documents
pub mod tile;
