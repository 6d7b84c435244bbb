//! Engine dispatch and the prompt-driven card flow
//!
//! A configuration is matched to its engine, the geometry is wrapped into a
//! tile, and the tile paints the canvas. The prompt flow asks the inference
//! service for the engine, the configuration and the content, substituting
//! a fixed value for each answer that does not arrive. A configuration is
//! only ever requested for, and rendered by, the engine it was selected for.

use crate::compose::card;
use crate::compose::tile::{TileDefinition, render_background};
use crate::engine::{parametric, tessellation, turtle};
use crate::geometry::{PathData, Point};
use crate::inference::collaborator::{Inference, SchemaDescriptor, request_structured};
use crate::inference::prompt::{build_content_prompt, build_engine_prompt};
use crate::inference::router::classify_engine;
use crate::io::configuration::{PATH_CENTER, PLACEHOLDER_CAPTION};
use crate::model::config::{EngineKind, PatternConfig};
use crate::model::content::{ContentConfig, DEFAULT_CONTENT};
use crate::model::result::{CardResult, PatternArtifact};
use tracing::{info, warn};

/// Generate the geometry for a configuration and wrap it into a tile
pub fn build_tile(config: &PatternConfig) -> TileDefinition {
    match config {
        PatternConfig::Turtle { parameters, style } => TileDefinition::from_path(
            EngineKind::Turtle,
            turtle::generate(parameters),
            style.clone(),
        ),
        PatternConfig::Parametric { parameters, style } => {
            let points = parametric::generate(parameters);
            let path = PathData::from_points(&points, Point::new(PATH_CENTER, PATH_CENTER));
            TileDefinition::from_path(EngineKind::Parametric, path, style.clone())
        }
        PatternConfig::Tessellation { parameters, style } => {
            TileDefinition::from_tessellation(tessellation::generate(parameters), style.clone())
        }
    }
}

/// Pattern-only document with the placeholder caption
pub fn render_pattern(config: &PatternConfig) -> PatternArtifact {
    let tile = build_tile(config);
    PatternArtifact {
        svg_string: render_background(&tile, Some(PLACEHOLDER_CAPTION)),
        config: config.clone(),
    }
}

/// Card with the configuration's pattern as background
pub fn compose_card(config: &PatternConfig, content: ContentConfig) -> CardResult {
    let background = render_background(&build_tile(config), None);
    CardResult {
        card_svg: card::compose_from_markup(&background, &content),
        pattern_config: config.clone(),
        content_config: content,
    }
}

/// Prompt-driven generator backed by an inference service
#[derive(Debug)]
pub struct Generator<I> {
    inference: I,
}

impl<I: Inference> Generator<I> {
    /// Create a generator around an inference service
    pub const fn new(inference: I) -> Self {
        Self { inference }
    }

    /// The inference service in use
    pub const fn inference(&self) -> &I {
        &self.inference
    }

    /// Configuration for `kind`, or that engine's fallback configuration
    pub fn request_pattern(&self, kind: EngineKind, user_prompt: &str) -> PatternConfig {
        let prompt = build_engine_prompt(kind, user_prompt);
        let schema = SchemaDescriptor::Pattern(kind);
        request_structured::<PatternConfig, _>(&self.inference, &prompt, schema)
            .filter(|config| {
                let matches = config.kind() == kind;
                if !matches {
                    warn!(
                        requested = %kind,
                        received = %config.kind(),
                        "configuration for another engine discarded"
                    );
                }
                matches
            })
            .unwrap_or_else(|| {
                warn!(engine = %kind, "using fallback pattern configuration");
                PatternConfig::fallback(kind)
            })
    }

    /// Card content for the request, or the default content
    pub fn request_content(&self, user_prompt: &str) -> ContentConfig {
        let prompt = build_content_prompt(user_prompt);
        request_structured::<ContentConfig, _>(&self.inference, &prompt, SchemaDescriptor::Content)
            .unwrap_or_else(|| {
                warn!("using default card content");
                DEFAULT_CONTENT.clone()
            })
    }

    /// Pattern-only document for a request
    pub fn generate_pattern(&self, user_prompt: &str) -> PatternArtifact {
        let kind = classify_engine(&self.inference, user_prompt);
        render_pattern(&self.request_pattern(kind, user_prompt))
    }

    /// Complete card for a request
    pub fn generate_card(&self, user_prompt: &str) -> CardResult {
        let kind = classify_engine(&self.inference, user_prompt);
        let config = self.request_pattern(kind, user_prompt);
        let content = self.request_content(user_prompt);
        let result = compose_card(&config, content);
        info!(engine = %kind, title = %result.content_config.event_title, "card generated");
        result
    }
}
