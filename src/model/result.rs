//! Generated documents and the configuration that produced them

use crate::io::error::{Result, serialization_error};
use crate::model::config::PatternConfig;
use crate::model::content::ContentConfig;
use serde::{Deserialize, Serialize};

/// Pattern-only document with a placeholder caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternArtifact {
    /// Complete document markup
    pub svg_string: String,
    /// Configuration the pattern was generated from
    pub config: PatternConfig,
}

/// Immutable record of one card generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardResult {
    /// Complete card markup
    pub card_svg: String,
    /// Configuration of the background pattern
    pub pattern_config: PatternConfig,
    /// Text and colors layered over the pattern
    pub content_config: ContentConfig,
}

impl CardResult {
    /// Pretty-printed JSON form of the record
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Serialization`] if encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| serialization_error(&"card record", e))
    }
}
