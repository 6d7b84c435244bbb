//! Sampling of closed-form curve families
//!
//! Every family returns exactly `num_points` samples over a full parameter
//! sweep. Trochoids sweep `round(frequency_a) + 1` turns so the rolling
//! circle comes close to closing the curve. Degenerate frequencies and radii
//! are guarded at the formula site instead of being rejected, and sample
//! counts above [`MAX_CURVE_POINTS`] are clamped.

use crate::geometry::Point;
use crate::io::configuration::MAX_CURVE_POINTS;
use crate::math::angle;
use crate::model::config::{EquationKind, ParametricConfig};
use tracing::warn;

/// Fraction of `amplitude_b` used as the trochoid tracing distance
pub const TRACING_DISTANCE_RATIO: f64 = 0.7;

/// Divisor of the fixed radius used when `frequency_a` is zero
pub const FALLBACK_RADIUS_DIVISOR: f64 = 5.0;

/// Rolling radius used when the fixed radius is zero
pub const FALLBACK_ROLLING_RADIUS: f64 = 1.0;

/// Sample the configured curve family
///
/// Returns `num_points` samples, or [`MAX_CURVE_POINTS`] when more are requested.
pub fn generate(config: &ParametricConfig) -> Vec<Point> {
    match config.equation_type {
        EquationKind::Rose => rose(config),
        EquationKind::Lissajous => lissajous(config),
        EquationKind::Epitrochoid => epitrochoid(config),
        EquationKind::Hypotrochoid => hypotrochoid(config),
    }
}

/// Petal ratio `k = frequency_a / frequency_b`, or `frequency_a` when the divisor is zero
pub fn rose_ratio(config: &ParametricConfig) -> f64 {
    if config.frequency_b == 0.0 {
        config.frequency_a
    } else {
        config.frequency_a / config.frequency_b
    }
}

/// Radius of the rolling circle, `R / frequency_a` or `R / 5` when the divisor is zero
///
/// Never zero: trochoid samples divide by it, so a zero fixed radius rolls
/// a circle of [`FALLBACK_ROLLING_RADIUS`].
pub fn rolling_radius(config: &ParametricConfig) -> f64 {
    let fixed = config.amplitude_a;
    let radius = if config.frequency_a == 0.0 {
        fixed / FALLBACK_RADIUS_DIVISOR
    } else {
        fixed / config.frequency_a
    };
    if radius == 0.0 || !radius.is_finite() {
        FALLBACK_ROLLING_RADIUS
    } else {
        radius
    }
}

/// Number of samples drawn, clamped to [`MAX_CURVE_POINTS`]
pub fn sample_count(config: &ParametricConfig) -> usize {
    if config.num_points > MAX_CURVE_POINTS {
        warn!(
            requested = config.num_points,
            limit = MAX_CURVE_POINTS,
            "clamping curve sample count"
        );
        MAX_CURVE_POINTS
    } else {
        config.num_points
    }
}

/// Number of full turns swept by trochoids
pub fn trochoid_turns(config: &ParametricConfig) -> f64 {
    config.frequency_a.round().max(0.0) + 1.0
}

/// Rose curve `r = a·cos(k·θ)` over one turn
pub fn rose(config: &ParametricConfig) -> Vec<Point> {
    let k = rose_ratio(config);
    let n = sample_count(config);
    (0..n)
        .map(|i| {
            let theta = angle::sweep_angle(i, n, 1.0);
            let r = config.amplitude_a * (k * theta).cos();
            Point::from(angle::polar_to_cartesian(r, theta))
        })
        .collect()
}

/// Lissajous figure `x = A·sin(a·t + δ), y = B·sin(b·t)` over one turn
pub fn lissajous(config: &ParametricConfig) -> Vec<Point> {
    let n = sample_count(config);
    (0..n)
        .map(|i| {
            let t = angle::sweep_angle(i, n, 1.0);
            Point::new(
                config.amplitude_a * config.frequency_a.mul_add(t, config.phase_shift).sin(),
                config.amplitude_b * (config.frequency_b * t).sin(),
            )
        })
        .collect()
}

/// Epitrochoid traced by a circle rolling outside the fixed circle
pub fn epitrochoid(config: &ParametricConfig) -> Vec<Point> {
    let fixed = config.amplitude_a;
    let rolling = rolling_radius(config);
    let distance = config.amplitude_b * TRACING_DISTANCE_RATIO;
    let sum = fixed + rolling;
    trochoid(config, |t| {
        let inner = sum * t / rolling;
        Point::new(
            sum.mul_add(t.cos(), -(distance * inner.cos())),
            sum.mul_add(t.sin(), -(distance * inner.sin())),
        )
    })
}

/// Hypotrochoid traced by a circle rolling inside the fixed circle
pub fn hypotrochoid(config: &ParametricConfig) -> Vec<Point> {
    let fixed = config.amplitude_a;
    let rolling = rolling_radius(config);
    let distance = config.amplitude_b * TRACING_DISTANCE_RATIO;
    let difference = fixed - rolling;
    trochoid(config, |t| {
        let inner = difference * t / rolling;
        Point::new(
            difference.mul_add(t.cos(), distance * inner.cos()),
            difference.mul_add(t.sin(), -(distance * inner.sin())),
        )
    })
}

fn trochoid(config: &ParametricConfig, sample: impl Fn(f64) -> Point) -> Vec<Point> {
    let turns = trochoid_turns(config);
    let n = sample_count(config);
    (0..n)
        .map(|i| sample(angle::sweep_angle(i, n, turns)))
        .collect()
}
