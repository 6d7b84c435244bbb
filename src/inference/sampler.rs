//! Offline inference service driven by a seeded random generator
//!
//! Classifies requests by keyword and samples pattern configurations inside
//! the documented ranges, so the whole pipeline runs without a remote
//! model. It has no content model: content requests fail and cards use the
//! default content.

use crate::inference::collaborator::{Inference, InferenceFailure, SchemaDescriptor};
use crate::inference::prompt::{keywords, user_request};
use crate::model::config::{
    EngineKind, EquationKind, ParametricConfig, PatternConfig, StyleParams, TessellationConfig,
    TileShape, TurtleConfig,
};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::f64::consts::TAU;

/// Named rewriting systems the sampler chooses from
pub const TURTLE_PRESETS: [(&str, &str, &[(&str, &str)], f64, u32); 4] = [
    ("fern", "X", &[("X", "F+[[X]-X]-F[-FX]+X"), ("F", "FF")], 25.0, 5),
    ("koch", "F--F--F", &[("F", "F+F--F+F")], 60.0, 3),
    ("sierpinski", "F-G-G", &[("F", "F-G+F+G-F"), ("G", "GG")], 120.0, 5),
    ("dragon", "FX", &[("X", "X+YF+"), ("Y", "-FX-Y")], 90.0, 8),
];

const STROKES: [&str; 6] = [
    "#2E8B57", "#8B4513", "#4B0082", "#FF1493", "#1E90FF", "#DAA520",
];

const PALETTE_COLORS: [&str; 8] = [
    "#4682B4", "#87CEEB", "#B0E0E6", "#F4A460", "#CD5C5C", "#FFF8DC", "#2F4F4F", "#DDA0DD",
];

/// Seeded offline stand-in for the inference service
#[derive(Debug)]
pub struct SeededSampler {
    rng: RefCell<StdRng>,
}

impl SeededSampler {
    /// Create a sampler with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Engine whose keywords occur most often in the request, if any occur
    pub fn classify(request: &str) -> Option<EngineKind> {
        let request = request.to_lowercase();
        EngineKind::ALL
            .into_iter()
            .map(|kind| {
                let hits = keywords(kind)
                    .iter()
                    .filter(|word| request.contains(**word))
                    .count();
                (kind, hits)
            })
            .filter(|(_, hits)| *hits > 0)
            .max_by_key(|(_, hits)| *hits)
            .map(|(kind, _)| kind)
    }

    /// Draw a valid configuration for `kind`
    pub fn sample_pattern(&self, kind: EngineKind) -> PatternConfig {
        let mut rng = self.rng.borrow_mut();
        let stroke = STROKES.choose(&mut *rng).copied().unwrap_or("#000000");

        match kind {
            EngineKind::Turtle => {
                let (_, axiom, rules, angle, iterations) = TURTLE_PRESETS
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or(TURTLE_PRESETS[0]);
                PatternConfig::Turtle {
                    parameters: TurtleConfig::new(axiom, rules, angle, iterations),
                    style: StyleParams::new("none", stroke, 0.5),
                }
            }
            EngineKind::Parametric => {
                let equation = EquationKind::ALL
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or_default();
                let mut parameters = ParametricConfig::new(
                    equation,
                    rng.random_range(100.0..=300.0),
                    rng.random_range(100.0..=300.0),
                    f64::from(rng.random_range(1_u8..=12)),
                    f64::from(rng.random_range(1_u8..=12)),
                );
                parameters.phase_shift = rng.random_range(0.0..TAU);
                parameters.num_points = rng.random_range(500..=2000);
                PatternConfig::Parametric {
                    parameters,
                    style: StyleParams::new("none", stroke, rng.random_range(1.0..=4.0)),
                }
            }
            EngineKind::Tessellation => {
                let shape = TileShape::ALL.choose(&mut *rng).copied().unwrap_or_default();
                let mut colors = PALETTE_COLORS.to_vec();
                colors.shuffle(&mut *rng);
                colors.truncate(rng.random_range(2..=5));
                let mut parameters =
                    TessellationConfig::new(shape, rng.random_range(50.0..=200.0), &colors);
                parameters.rotation = [0.0, 15.0, 30.0, 45.0]
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or(0.0);
                parameters.spacing = rng.random_range(0.0..=10.0);
                PatternConfig::Tessellation {
                    parameters,
                    style: StyleParams::tessellation(),
                }
            }
        }
    }
}

impl Inference for SeededSampler {
    fn request(
        &self,
        prompt: &str,
        schema: SchemaDescriptor,
    ) -> std::result::Result<Value, InferenceFailure> {
        match schema {
            SchemaDescriptor::EngineChoice => Self::classify(user_request(prompt))
                .map(|kind| json!({ "engine_type": kind.as_str() }))
                .ok_or_else(|| InferenceFailure::new(&"no engine keywords in request")),
            SchemaDescriptor::Pattern(kind) => serde_json::to_value(self.sample_pattern(kind))
                .map_err(|e| InferenceFailure::new(&e)),
            SchemaDescriptor::Content => {
                Err(InferenceFailure::new(&"sampler has no content model"))
            }
        }
    }
}
