//! Pattern configuration: one variant per generation engine plus shared style
//!
//! The JSON form is tagged by `engine_type` and nests the engine parameters
//! under `parameters`, next to a `style` block:
//!
//! ```json
//! { "engine_type": "parametric",
//!   "parameters": { "equation_type": "rose", "amplitude_a": 200.0, ... },
//!   "style": { "fill": "none", "stroke": "#FF1493", "stroke_width": 2.0 } }
//! ```
//!
//! Engines accept any numeric input; [`PatternConfig::validate`] enforces the
//! documented ranges on values that come from outside the crate.

use crate::io::error::{Result, invalid_parameter};
use crate::io::configuration::MAX_TURTLE_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::TAU;
use std::fmt;
use std::ops::RangeInclusive;

/// Valid amplitude range for parametric curves
pub const AMPLITUDE_RANGE: RangeInclusive<f64> = 50.0..=500.0;
/// Valid frequency range for parametric curves
pub const FREQUENCY_RANGE: RangeInclusive<f64> = 1.0..=20.0;
/// Valid phase shift range in radians
pub const PHASE_RANGE: RangeInclusive<f64> = 0.0..=TAU;
/// Valid sample count range for parametric curves
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 500..=2000;
/// Valid tile size range in pixels
pub const TILE_SIZE_RANGE: RangeInclusive<f64> = 50.0..=200.0;
/// Valid tile rotation range in degrees
pub const ROTATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;
/// Valid gap between tiles in pixels
pub const SPACING_RANGE: RangeInclusive<f64> = 0.0..=10.0;
/// Valid number of palette entries
pub const PALETTE_LEN_RANGE: RangeInclusive<usize> = 2..=5;

/// Identifier of a generation engine
///
/// Unknown identifiers parse to [`EngineKind::Turtle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum EngineKind {
    /// Recursive string rewriting interpreted as turtle movements
    #[default]
    Turtle,
    /// Sampled closed-form curves
    Parametric,
    /// Polygon tiles repeated on a lattice
    Tessellation,
}

impl EngineKind {
    /// All engines in declaration order
    pub const ALL: [Self; 3] = [Self::Turtle, Self::Parametric, Self::Tessellation];

    /// Wire identifier of the engine
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Turtle => "l_system",
            Self::Parametric => "parametric",
            Self::Tessellation => "tessellation",
        }
    }

    /// Parse an identifier, falling back to the turtle engine
    pub fn parse(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "l_system" | "lsystem" | "turtle" => Self::Turtle,
            "parametric" => Self::Parametric,
            "tessellation" => Self::Tessellation,
            other => {
                tracing::warn!(identifier = other, "unknown engine, using l_system");
                Self::Turtle
            }
        }
    }
}

/// Closed-form curve family
///
/// Unknown identifiers parse to [`EquationKind::Rose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum EquationKind {
    /// `r = a·cos(k·θ)`
    #[default]
    Rose,
    /// `x = A·sin(a·t + δ), y = B·sin(b·t)`
    Lissajous,
    /// Circle rolling around the outside of a fixed circle
    Epitrochoid,
    /// Circle rolling around the inside of a fixed circle
    Hypotrochoid,
}

impl EquationKind {
    /// All curve families in declaration order
    pub const ALL: [Self; 4] = [
        Self::Rose,
        Self::Lissajous,
        Self::Epitrochoid,
        Self::Hypotrochoid,
    ];

    /// Wire identifier of the family
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Lissajous => "lissajous",
            Self::Epitrochoid => "epitrochoid",
            Self::Hypotrochoid => "hypotrochoid",
        }
    }

    /// Parse an identifier, falling back to the rose curve
    pub fn parse(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "rose" => Self::Rose,
            "lissajous" => Self::Lissajous,
            "epitrochoid" => Self::Epitrochoid,
            "hypotrochoid" => Self::Hypotrochoid,
            other => {
                tracing::warn!(identifier = other, "unknown equation, using rose");
                Self::Rose
            }
        }
    }
}

/// Shape of a tessellation tile
///
/// Unknown identifiers parse to [`TileShape::Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TileShape {
    /// Axis-aligned square
    #[default]
    Square,
    /// Regular hexagon, flat top
    Hexagon,
    /// Equilateral triangle, apex up
    Triangle,
    /// Square standing on a corner
    Diamond,
}

impl TileShape {
    /// All shapes in declaration order
    pub const ALL: [Self; 4] = [Self::Square, Self::Hexagon, Self::Triangle, Self::Diamond];

    /// Wire identifier of the shape
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Hexagon => "hexagon",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
        }
    }

    /// Parse an identifier, falling back to the square
    pub fn parse(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "hexagon" => Self::Hexagon,
            "triangle" => Self::Triangle,
            "diamond" => Self::Diamond,
            other => {
                tracing::warn!(identifier = other, "unknown tile shape, using square");
                Self::Square
            }
        }
    }
}

macro_rules! string_enum_conversions {
    ($($kind:ty),*) => {$(
        impl From<String> for $kind {
            fn from(identifier: String) -> Self {
                Self::parse(&identifier)
            }
        }

        impl From<$kind> for &'static str {
            fn from(kind: $kind) -> Self {
                kind.as_str()
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

string_enum_conversions!(EngineKind, EquationKind, TileShape);

/// Fill and stroke applied to generated geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Fill color, or `none`
    pub fill: String,
    /// Stroke color
    pub stroke: String,
    /// Stroke width in pixels
    pub stroke_width: f64,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::new("none", "#000000", 1.0)
    }
}

impl StyleParams {
    /// Create a style from its parts
    pub fn new(fill: &str, stroke: &str, stroke_width: f64) -> Self {
        Self {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        }
    }

    /// Hairline outline used for turtle patterns
    pub fn turtle() -> Self {
        Self::new("none", "#000000", 0.5)
    }

    /// Outline used for parametric curves
    pub fn parametric() -> Self {
        Self::new("none", "#000000", 2.0)
    }

    /// Tile outline used for tessellations; the fill is superseded by the palette
    pub fn tessellation() -> Self {
        Self::new("#4682B4", "#FFFFFF", 1.0)
    }

    fn validate(&self) -> Result<()> {
        if !(self.stroke_width >= 0.0 && self.stroke_width.is_finite()) {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &"must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Parameters of the string-rewriting engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Initial symbol string
    pub axiom: String,
    /// Production rules keyed by a single symbol; unmapped symbols are kept
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
    /// Turn angle in degrees
    pub angle: f64,
    /// Number of rewriting rounds
    pub iterations: u32,
    /// Segment length before the per-round decay
    #[serde(default = "TurtleConfig::default_line_length")]
    pub line_length: f64,
    /// Starting x coordinate
    #[serde(default = "TurtleConfig::default_start_x")]
    pub start_x: f64,
    /// Starting y coordinate
    #[serde(default = "TurtleConfig::default_start_y")]
    pub start_y: f64,
    /// Starting heading in degrees; -90 points up
    #[serde(default = "TurtleConfig::default_start_angle")]
    pub start_angle: f64,
}

impl TurtleConfig {
    /// Create a configuration with the default segment length and start pose
    pub fn new(axiom: &str, rules: &[(&str, &str)], angle: f64, iterations: u32) -> Self {
        Self {
            axiom: axiom.to_string(),
            rules: rules
                .iter()
                .map(|(symbol, replacement)| ((*symbol).to_string(), (*replacement).to_string()))
                .collect(),
            angle,
            iterations,
            line_length: Self::default_line_length(),
            start_x: Self::default_start_x(),
            start_y: Self::default_start_y(),
            start_angle: Self::default_start_angle(),
        }
    }

    const fn default_line_length() -> f64 {
        5.0
    }

    const fn default_start_x() -> f64 {
        500.0
    }

    const fn default_start_y() -> f64 {
        950.0
    }

    const fn default_start_angle() -> f64 {
        -90.0
    }

    fn validate(&self) -> Result<()> {
        if self.axiom.is_empty() {
            return Err(invalid_parameter("axiom", &"", &"must not be empty"));
        }
        if let Some(symbol) = self.rules.keys().find(|s| s.chars().count() != 1) {
            return Err(invalid_parameter(
                "rules",
                symbol,
                &"rule keys must be a single symbol",
            ));
        }
        if self.iterations > MAX_TURTLE_ITERATIONS {
            return Err(invalid_parameter(
                "iterations",
                &self.iterations,
                &format!("must be at most {MAX_TURTLE_ITERATIONS}"),
            ));
        }
        if !(self.line_length > 0.0 && self.line_length.is_finite()) {
            return Err(invalid_parameter(
                "line_length",
                &self.line_length,
                &"must be positive",
            ));
        }
        for (name, value) in [
            ("angle", self.angle),
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("start_angle", self.start_angle),
        ] {
            if !value.is_finite() {
                return Err(invalid_parameter(name, &value, &"must be finite"));
            }
        }
        Ok(())
    }
}

/// Parameters of the parametric-curve engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricConfig {
    /// Curve family
    pub equation_type: EquationKind,
    /// Scale along x, or the fixed-circle radius for trochoids
    pub amplitude_a: f64,
    /// Scale along y, or the basis of the tracing distance for trochoids
    pub amplitude_b: f64,
    /// Cycles along x
    pub frequency_a: f64,
    /// Cycles along y
    pub frequency_b: f64,
    /// Phase offset in radians
    #[serde(default)]
    pub phase_shift: f64,
    /// Number of samples
    #[serde(default = "ParametricConfig::default_num_points")]
    pub num_points: usize,
}

impl ParametricConfig {
    /// Create a configuration with no phase shift and the default sample count
    pub const fn new(
        equation_type: EquationKind,
        amplitude_a: f64,
        amplitude_b: f64,
        frequency_a: f64,
        frequency_b: f64,
    ) -> Self {
        Self {
            equation_type,
            amplitude_a,
            amplitude_b,
            frequency_a,
            frequency_b,
            phase_shift: 0.0,
            num_points: Self::default_num_points(),
        }
    }

    const fn default_num_points() -> usize {
        1000
    }

    fn validate(&self) -> Result<()> {
        for (name, value, range) in [
            ("amplitude_a", self.amplitude_a, &AMPLITUDE_RANGE),
            ("amplitude_b", self.amplitude_b, &AMPLITUDE_RANGE),
            ("frequency_a", self.frequency_a, &FREQUENCY_RANGE),
            ("frequency_b", self.frequency_b, &FREQUENCY_RANGE),
            ("phase_shift", self.phase_shift, &PHASE_RANGE),
        ] {
            check_range(name, value, range)?;
        }
        if !POINT_COUNT_RANGE.contains(&self.num_points) {
            return Err(invalid_parameter(
                "num_points",
                &self.num_points,
                &format!(
                    "must be within {}..={}",
                    POINT_COUNT_RANGE.start(),
                    POINT_COUNT_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters of the tessellation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TessellationConfig {
    /// Tile shape
    pub tile_shape: TileShape,
    /// Tile size in pixels
    pub tile_size: f64,
    /// Extra rotation in degrees applied after placement
    #[serde(default)]
    pub rotation: f64,
    /// Gap between tiles in pixels
    #[serde(default)]
    pub spacing: f64,
    /// Ordered tile colors; the first two alternate between instances
    pub color_palette: Vec<String>,
}

impl TessellationConfig {
    /// Create an unrotated, gapless configuration
    pub fn new(tile_shape: TileShape, tile_size: f64, color_palette: &[&str]) -> Self {
        Self {
            tile_shape,
            tile_size,
            rotation: 0.0,
            spacing: 0.0,
            color_palette: color_palette.iter().map(ToString::to_string).collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        check_range("tile_size", self.tile_size, &TILE_SIZE_RANGE)?;
        check_range("rotation", self.rotation, &ROTATION_RANGE)?;
        check_range("spacing", self.spacing, &SPACING_RANGE)?;
        if !PALETTE_LEN_RANGE.contains(&self.color_palette.len()) {
            return Err(invalid_parameter(
                "color_palette",
                &self.color_palette.len(),
                &"must contain between 2 and 5 colors",
            ));
        }
        Ok(())
    }
}

/// Complete pattern configuration, one variant per engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine_type")]
pub enum PatternConfig {
    /// String-rewriting pattern
    #[serde(rename = "l_system")]
    Turtle {
        /// Rewriting and turtle parameters
        parameters: TurtleConfig,
        /// Path style
        #[serde(default = "StyleParams::turtle")]
        style: StyleParams,
    },
    /// Parametric-curve pattern
    #[serde(rename = "parametric")]
    Parametric {
        /// Curve parameters
        parameters: ParametricConfig,
        /// Path style
        #[serde(default = "StyleParams::parametric")]
        style: StyleParams,
    },
    /// Tessellation pattern
    #[serde(rename = "tessellation")]
    Tessellation {
        /// Tile parameters
        parameters: TessellationConfig,
        /// Tile outline style
        #[serde(default = "StyleParams::tessellation")]
        style: StyleParams,
    },
}

impl PatternConfig {
    /// Engine this configuration is destined for
    pub const fn kind(&self) -> EngineKind {
        match self {
            Self::Turtle { .. } => EngineKind::Turtle,
            Self::Parametric { .. } => EngineKind::Parametric,
            Self::Tessellation { .. } => EngineKind::Tessellation,
        }
    }

    /// Shared style block
    pub const fn style(&self) -> &StyleParams {
        match self {
            Self::Turtle { style, .. }
            | Self::Parametric { style, .. }
            | Self::Tessellation { style, .. } => style,
        }
    }

    /// Check every parameter against its documented range
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidParameter`] naming the first
    /// parameter that is out of range
    pub fn validate(&self) -> Result<()> {
        self.style().validate()?;
        match self {
            Self::Turtle { parameters, .. } => parameters.validate(),
            Self::Parametric { parameters, .. } => parameters.validate(),
            Self::Tessellation { parameters, .. } => parameters.validate(),
        }
    }

    /// Fixed configuration used when none could be obtained for `kind`
    pub fn fallback(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Turtle => Self::Turtle {
                parameters: TurtleConfig::new(
                    "X",
                    &[("X", "F+[[X]-X]-F[-FX]+X"), ("F", "FF")],
                    25.0,
                    5,
                ),
                style: StyleParams::new("none", "#2E8B57", 0.5),
            },
            EngineKind::Parametric => Self::Parametric {
                parameters: ParametricConfig::new(EquationKind::Rose, 200.0, 200.0, 5.0, 3.0),
                style: StyleParams::new("none", "#FF1493", 2.0),
            },
            EngineKind::Tessellation => Self::Tessellation {
                parameters: TessellationConfig::new(
                    TileShape::Hexagon,
                    100.0,
                    &["#4682B4", "#87CEEB", "#B0E0E6"],
                ),
                style: StyleParams::tessellation(),
            },
        }
    }
}

fn check_range(parameter: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be within {}..={}", range.start(), range.end()),
        ))
    }
}
