//! Structured inference: the collaborator boundary and the flows built on it
//!
//! Every request either yields a validated value or nothing; the callers
//! substitute fixed fallbacks so generation never fails on inference.

/// Service trait, schema descriptors and the structured request helper
pub mod collaborator;
/// Prompt assembly and engine keywords
pub mod prompt;
/// Engine classification
pub mod router;
/// Seeded offline inference service
pub mod sampler;

pub use collaborator::{Inference, InferenceFailure, SchemaDescriptor, Unavailable};
pub use router::{EngineChoice, classify_engine};
pub use sampler::SeededSampler;
