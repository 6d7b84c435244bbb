//! Request and result data model
//!
//! Everything here is created per request and discarded once the response
//! is produced. The only shared value is the immutable default content.

/// Pattern configurations for the three engines
pub mod config;
/// Card text and color scheme supplied by the content provider
pub mod content;
/// Generated documents and their provenance
pub mod result;

pub use config::{
    EngineKind, EquationKind, ParametricConfig, PatternConfig, StyleParams, TessellationConfig,
    TileShape, TurtleConfig,
};
pub use content::{ColorScheme, ContentConfig, DEFAULT_CONTENT};
pub use result::{CardResult, PatternArtifact};

/// Range checks applied to structured values received from outside the crate
pub trait Validate {
    /// Check the value against its documented constraints
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidParameter`] for the first
    /// violated constraint
    fn validate(&self) -> crate::Result<()>;
}

impl Validate for PatternConfig {
    fn validate(&self) -> crate::Result<()> {
        Self::validate(self)
    }
}

impl Validate for ContentConfig {
    fn validate(&self) -> crate::Result<()> {
        Self::validate(self)
    }
}
