//! Render request documents read by the command-line tool

use crate::io::error::{Result, WithPath, serialization_error};
use crate::model::Validate;
use crate::model::config::PatternConfig;
use crate::model::content::{ContentConfig, DEFAULT_CONTENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A pattern configuration with optional card content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Pattern to render
    pub pattern: PatternConfig,
    /// Card content; the default content is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentConfig>,
}

impl RenderRequest {
    /// Parse a request from JSON text
    ///
    /// Range validation is not applied: engines accept any numeric input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::Serialization`] for malformed JSON
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| serialization_error(&"render request", e))
    }

    /// Read and parse a request file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_path(path, "read")?;
        serde_json::from_str(&text)
            .map_err(|e| serialization_error(&format!("request '{}'", path.display()), e))
    }

    /// Content to compose, falling back to the default content
    pub fn content_or_default(&self) -> ContentConfig {
        self.content
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENT.clone())
    }

    /// Check the pattern and content against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<()> {
        self.pattern.validate()?;
        self.content.as_ref().map_or(Ok(()), Validate::validate)
    }
}
