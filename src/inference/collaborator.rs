//! Boundary to the external structured-inference service
//!
//! The service receives a prompt and a target schema and answers with a
//! structured value. Transport errors, empty answers, values that do not
//! deserialize, values missing required fields and values failing range
//! validation are all the same thing to the caller: no value.

use crate::model::Validate;
use crate::model::config::EngineKind;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Target schema of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaDescriptor {
    /// Engine classification: `{"engine_type": ...}`
    EngineChoice,
    /// Pattern configuration for one engine
    Pattern(EngineKind),
    /// Card text and color scheme
    Content,
}

impl SchemaDescriptor {
    /// Schema name sent to the service
    pub const fn name(self) -> &'static str {
        match self {
            Self::EngineChoice => "EngineChoice",
            Self::Pattern(EngineKind::Turtle) => "LSystemConfig",
            Self::Pattern(EngineKind::Parametric) => "ParametricConfig",
            Self::Pattern(EngineKind::Tessellation) => "TessellationConfig",
            Self::Content => "ContentConfig",
        }
    }

    /// Top-level fields an answer must carry
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::EngineChoice => &["engine_type"],
            Self::Pattern(_) => &["parameters", "style"],
            Self::Content => &[
                "event_title",
                "event_subtitle",
                "date_placeholder",
                "time_placeholder",
                "venue_placeholder",
                "rsvp_text",
                "color_scheme",
            ],
        }
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque failure reported by an inference service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceFailure {
    /// Human-readable cause, for logs only
    pub reason: String,
}

impl InferenceFailure {
    /// Create a failure with a reason
    pub fn new(reason: &impl ToString) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for InferenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inference failed: {}", self.reason)
    }
}

impl std::error::Error for InferenceFailure {}

/// A structured-inference service
pub trait Inference {
    /// Ask for a value matching `schema`
    ///
    /// # Errors
    ///
    /// Returns an [`InferenceFailure`] when the service cannot answer
    fn request(
        &self,
        prompt: &str,
        schema: SchemaDescriptor,
    ) -> std::result::Result<Value, InferenceFailure>;
}

/// Service that never answers; every request takes the fallback path
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Inference for Unavailable {
    fn request(
        &self,
        _prompt: &str,
        schema: SchemaDescriptor,
    ) -> std::result::Result<Value, InferenceFailure> {
        Err(InferenceFailure::new(&format!(
            "no inference service configured for {schema}"
        )))
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Fill in the engine tag of a pattern answer that omitted it
fn normalize(mut value: Value, schema: SchemaDescriptor) -> Value {
    if let (SchemaDescriptor::Pattern(kind), Value::Object(fields)) = (schema, &mut value) {
        fields
            .entry("engine_type")
            .or_insert_with(|| Value::String(kind.as_str().to_string()));
    }
    value
}

fn check_shape(value: &Value, schema: SchemaDescriptor) -> std::result::Result<(), String> {
    if is_empty(value) {
        return Err("empty answer".to_string());
    }
    let Some(fields) = value.as_object() else {
        return Err("answer is not an object".to_string());
    };
    match schema
        .required_fields()
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        Some(missing) => Err(format!("missing field '{missing}'")),
        None => Ok(()),
    }
}

/// Request a typed value, collapsing every kind of failure into `None`
pub fn request_structured<T, I>(inference: &I, prompt: &str, schema: SchemaDescriptor) -> Option<T>
where
    T: DeserializeOwned + Validate,
    I: Inference + ?Sized,
{
    let value = match inference.request(prompt, schema) {
        Ok(value) => normalize(value, schema),
        Err(failure) => {
            warn!(%schema, %failure, "inference request failed");
            return None;
        }
    };

    if let Err(reason) = check_shape(&value, schema) {
        warn!(%schema, %reason, "inference answer does not match schema");
        return None;
    }

    let parsed: T = match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(%schema, %error, "inference answer failed to deserialize");
            return None;
        }
    };

    if let Err(error) = parsed.validate() {
        warn!(%schema, %error, "inference answer failed validation");
        return None;
    }

    debug!(%schema, "inference answer accepted");
    Some(parsed)
}
