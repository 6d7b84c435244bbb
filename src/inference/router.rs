//! Engine selection from a free-text request

use crate::inference::collaborator::{Inference, SchemaDescriptor, request_structured};
use crate::inference::prompt::build_router_prompt;
use crate::model::Validate;
use crate::model::config::EngineKind;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Classification answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineChoice {
    /// Selected engine; unknown identifiers already map to the turtle engine
    pub engine_type: EngineKind,
}

impl Validate for EngineChoice {
    fn validate(&self) -> crate::Result<()> {
        Ok(())
    }
}

/// Pick the engine for a request, defaulting to the turtle engine on any failure
pub fn classify_engine<I: Inference + ?Sized>(inference: &I, user_prompt: &str) -> EngineKind {
    let prompt = build_router_prompt(user_prompt);
    let engine =
        request_structured::<EngineChoice, _>(inference, &prompt, SchemaDescriptor::EngineChoice)
            .map_or(EngineKind::Turtle, |choice| choice.engine_type);
    info!(%engine, "engine selected");
    engine
}
