//! Rendering constants and runtime configuration defaults

// Card canvas in logical units
/// Width of every generated document
pub const CANVAS_WIDTH: f64 = 1080.0;
/// Height of every generated document
pub const CANVAS_HEIGHT: f64 = 1920.0;

// Path-based patterns are drawn on a square design space and scaled into a cell
/// Side of the design space that turtle and parametric paths are drawn in
pub const PATH_VIEW_BOX: f64 = 1000.0;
/// Side of the repeat cell that a path pattern is scaled into
pub const PATH_TILE_SIZE: f64 = 300.0;
/// Offset added to parametric points so curves sit in the middle of the design space
pub const PATH_CENTER: f64 = 500.0;

/// Base of the exponential step-length decay applied per rewriting round
pub const TURTLE_STEP_DECAY: f64 = 1.2;

// Rewriting grows exponentially, so both the rounds and the string are bounded
/// Maximum rewriting rounds accepted from a configuration
pub const MAX_TURTLE_ITERATIONS: u32 = 8;
/// Maximum rewritten string length that is interpreted
pub const MAX_REWRITE_LENGTH: usize = 4_000_000;
/// Maximum samples drawn for one parametric curve
pub const MAX_CURVE_POINTS: usize = 2000;

/// Fill used when a background cannot be recovered from pattern markup
pub const NEUTRAL_FILL: &str = "#CCCCCC";
/// Caption shown on pattern-only documents
pub const PLACEHOLDER_CAPTION: &str = "Your Event Here";

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;
/// Number of cards produced by one sampling run
pub const DEFAULT_SAMPLE_COUNT: usize = 1;

// Output settings
/// Suffix of the pattern-only document written for each request
pub const PATTERN_SUFFIX: &str = "_pattern.svg";
/// Suffix of the composed card document
pub const CARD_SUFFIX: &str = "_card.svg";
/// Suffix of the serialized card record
pub const CARD_RECORD_SUFFIX: &str = "_card.json";
/// Extension of request files picked up from a directory
pub const REQUEST_EXTENSION: &str = "json";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
