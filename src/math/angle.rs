//! Angle conversion and polar stepping helpers
//!
//! Generic over [`Float`] so the same formulas serve single and double
//! precision callers. Engines in this crate work in `f64`.

use num_traits::{Float, FloatConst};

/// Convert degrees to radians
pub fn to_radians<T: Float>(degrees: T) -> T {
    Float::to_radians(degrees)
}

/// Cartesian coordinates of a point at `radius` along `theta` radians
pub fn polar_to_cartesian<T: Float>(radius: T, theta: T) -> (T, T) {
    let (sin, cos) = theta.sin_cos();
    (radius * cos, radius * sin)
}

/// Advance `(x, y)` by `length` along a heading given in degrees
///
/// Headings follow screen coordinates: 0° points along +x and 90° along +y
/// (downwards), so -90° is "up".
pub fn step<T: Float>(origin: (T, T), heading_degrees: T, length: T) -> (T, T) {
    let (dx, dy) = polar_to_cartesian(length, to_radians(heading_degrees));
    (origin.0 + dx, origin.1 + dy)
}

/// Angle of sample `index` out of `count` samples spread over `turns` full turns
///
/// Returns zero when `count` is zero rather than dividing by it.
pub fn sweep_angle<T: Float + FloatConst>(index: usize, count: usize, turns: T) -> T {
    if count == 0 {
        return T::zero();
    }
    let index = T::from(index).unwrap_or_else(T::zero);
    let count = T::from(count).unwrap_or_else(T::one);
    (T::PI() + T::PI()) * turns * index / count
}
