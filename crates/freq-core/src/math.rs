//! Small scalar helpers shared by the physical models.

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.  `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to `[0.0, 1.0]`.  NaN maps to `0.0`.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Fraction of the remaining distance closed in `dt` seconds by first-order
/// exponential smoothing at `rate` per second: `1 - e^(-rate·dt)`.
///
/// Always in `[0.0, 1.0]`, so `current + (target - current) * factor` can
/// never overshoot `target`.  A non-positive rate or `dt` yields `0.0`.
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if !(rate > 0.0) || !(dt > 0.0) {
        return 0.0;
    }
    clamp01(1.0 - (-rate * dt).exp())
}
