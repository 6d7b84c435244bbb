//! String rewriting and turtle interpretation
//!
//! The axiom is rewritten for the configured number of rounds, then walked
//! by a turtle that keeps a position, a heading and an explicit stack of
//! saved states for branching:
//!
//! | Symbol     | Effect                                             |
//! |------------|----------------------------------------------------|
//! | `F`, `G`   | move forward one step, drawing a segment           |
//! | `+`        | heading -= angle                                   |
//! | `-`        | heading += angle                                   |
//! | `[`        | push (position, heading)                           |
//! | `]`        | pop (position, heading) and lift the pen           |
//! | other      | no-op                                              |
//!
//! A pop with an empty stack is ignored.

use crate::geometry::{PathData, Point};
use crate::io::configuration::{MAX_REWRITE_LENGTH, MAX_TURTLE_ITERATIONS, TURTLE_STEP_DECAY};
use crate::math::angle;
use crate::model::config::TurtleConfig;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Meaning of a symbol during interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurtleOp {
    /// Move forward drawing a segment
    Draw,
    /// Decrease the heading by the turn angle
    TurnLeft,
    /// Increase the heading by the turn angle
    TurnRight,
    /// Save the current state
    Push,
    /// Restore the last saved state and start a new subpath
    Pop,
    /// Symbol without drawing meaning
    Ignore,
}

impl From<char> for TurtleOp {
    fn from(symbol: char) -> Self {
        match symbol {
            'F' | 'G' => Self::Draw,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}

/// Production rules indexed by symbol
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    productions: HashMap<char, String>,
}

impl RuleSet {
    /// Build a rule set from configuration rules
    ///
    /// Keys that are not exactly one symbol are skipped.
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let productions = rules
            .into_iter()
            .filter_map(|(symbol, replacement)| {
                let mut chars = symbol.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, replacement.clone())),
                    _ => None,
                }
            })
            .collect();
        Self { productions }
    }

    /// Length of `symbols` after one rewriting pass
    pub fn rewritten_len(&self, symbols: &str) -> usize {
        symbols
            .chars()
            .map(|c| self.productions.get(&c).map_or(c.len_utf8(), String::len))
            .sum()
    }

    /// Apply one left-to-right substitution pass; unmapped symbols pass through
    pub fn apply(&self, symbols: &str) -> String {
        let mut next = String::with_capacity(self.rewritten_len(symbols));
        for c in symbols.chars() {
            match self.productions.get(&c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        next
    }
}

/// Rewrite `axiom` for `iterations` rounds
///
/// Stops early, keeping the last string, when a further round would exceed
/// [`MAX_REWRITE_LENGTH`] symbols.
pub fn rewrite(axiom: &str, rules: &RuleSet, iterations: u32) -> String {
    let mut current = axiom.to_string();
    for round in 0..iterations {
        let next_len = rules.rewritten_len(&current);
        if next_len > MAX_REWRITE_LENGTH {
            warn!(
                round,
                length = next_len,
                limit = MAX_REWRITE_LENGTH,
                "rewrite would exceed length cap, stopping early"
            );
            break;
        }
        current = rules.apply(&current);
    }
    current
}

/// Step length for a given round count so deep patterns stay on the canvas
pub fn step_length(base: f64, iterations: u32) -> f64 {
    base / TURTLE_STEP_DECAY.powi(iterations.min(MAX_TURTLE_ITERATIONS) as i32)
}

/// Position and heading of the turtle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    /// Current position
    pub position: Point,
    /// Current heading in degrees
    pub heading: f64,
}

/// Walk `symbols` from `start`, producing a path with one subpath per pen lift
pub fn interpret(symbols: &str, start: TurtleState, angle_degrees: f64, step: f64) -> PathData {
    let mut state = start;
    let mut stack: Vec<TurtleState> = Vec::new();
    let mut path = PathData::new();
    path.move_to(state.position);

    for symbol in symbols.chars() {
        match TurtleOp::from(symbol) {
            TurtleOp::Draw => {
                let (x, y) = angle::step(
                    (state.position.x, state.position.y),
                    state.heading,
                    step,
                );
                state.position = Point::new(x, y);
                path.line_to(state.position);
            }
            TurtleOp::TurnLeft => state.heading -= angle_degrees,
            TurtleOp::TurnRight => state.heading += angle_degrees,
            TurtleOp::Push => stack.push(state),
            TurtleOp::Pop => {
                if let Some(saved) = stack.pop() {
                    state = saved;
                    path.move_to(state.position);
                }
            }
            TurtleOp::Ignore => {}
        }
    }

    path
}

/// Rewrite the axiom and interpret the result as a turtle walk
///
/// Iteration counts above [`MAX_TURTLE_ITERATIONS`] are clamped.
pub fn generate(config: &TurtleConfig) -> PathData {
    let iterations = if config.iterations > MAX_TURTLE_ITERATIONS {
        warn!(
            requested = config.iterations,
            limit = MAX_TURTLE_ITERATIONS,
            "clamping rewrite iterations"
        );
        MAX_TURTLE_ITERATIONS
    } else {
        config.iterations
    };

    let rules = RuleSet::from_rules(&config.rules);
    let symbols = rewrite(&config.axiom, &rules, iterations);
    let step = step_length(config.line_length, iterations);
    let start = TurtleState {
        position: Point::new(config.start_x, config.start_y),
        heading: config.start_angle,
    };

    let path = interpret(&symbols, start, config.angle, step);
    debug!(
        symbols = symbols.len(),
        segments = path.segment_count(),
        subpaths = path.subpath_count(),
        "turtle walk complete"
    );
    path
}
