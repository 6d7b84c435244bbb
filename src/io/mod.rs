//! Command-line surface, request files, constants and errors

/// Command-line interface and batch processing
pub mod cli;
/// Rendering constants and default values
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// Progress display for batch rendering
pub mod progress;
/// Render request documents
pub mod request;
