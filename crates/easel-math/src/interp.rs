//! Scalar helpers for per-pixel math.
//!
//! - Clamping ([`clamp`], [`saturate`])
//! - Linear interpolation ([`lerp`], [`inverse_lerp`])
//!
//! All functions are total: no input panics or returns an error. NaN inputs
//! propagate through the usual floating-point rules.
//!
//! # Usage
//!
//! ```rust
//! use easel_math::{clamp, lerp};
//!
//! assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
//! assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
//! ```

/// Clamps a value to the range [min, max].
///
/// Returns `min` for any `value <= min` and `max` for any `value >= max`.
/// A NaN `value` is returned unchanged.
///
/// # Example
///
/// ```rust
/// use easel_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    min.max(max.min(value))
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation between two values.
///
/// Returns `v0` when `t = 0.0`, and `v1` when `t = 1.0`. `t` is not range
/// checked, so values outside [0, 1] extrapolate.
///
/// # Formula
///
/// `(1 - t) * v0 + t * v1`
///
/// This form hits both endpoints exactly, unlike `v0 + (v1 - v0) * t`.
///
/// # Example
///
/// ```rust
/// use easel_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(v0: f32, v1: f32, t: f32) -> f32 {
    (1.0 - t) * v0 + t * v1
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// Returns 0 when the range is degenerate.
///
/// # Example
///
/// ```rust
/// use easel_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 255.0, 51.0), 0.2);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(-10.0, 0.0, 255.0), 0.0);
        assert_eq!(clamp(0.0, 0.0, 255.0), 0.0);
        assert_eq!(clamp(255.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(1000.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(42.5, 0.0, 255.0), 42.5);
    }

    #[test]
    fn test_clamp_stays_in_range() {
        let (lo, hi) = (-3.0, 7.5);
        let mut v = -20.0;
        while v <= 20.0 {
            let c = clamp(v, lo, hi);
            assert!(lo <= c && c <= hi, "clamp({v}) = {c}");
            v += 0.25;
        }
    }

    #[test]
    fn test_clamp_degenerate_range() {
        assert_eq!(clamp(5.0, 2.0, 2.0), 2.0);
        assert_eq!(clamp(-5.0, 2.0, 2.0), 2.0);
    }

    #[test]
    fn test_clamp_keeps_nan() {
        assert!(clamp(f32::NAN, 0.0, 255.0).is_nan());
        assert!(saturate(f32::NAN).is_nan());
        assert_eq!(clamp(f32::INFINITY, 0.0, 255.0), 255.0);
        assert_eq!(clamp(f32::NEG_INFINITY, 0.0, 255.0), 0.0);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.5), 0.5);
        assert_eq!(saturate(1.5), 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        for &(v0, v1) in &[(0.0, 1.0), (-3.5, 12.25), (255.0, 0.0), (1e6, -1e6)] {
            assert_eq!(lerp(v0, v1, 0.0), v0);
            assert_eq!(lerp(v0, v1, 1.0), v1);
        }
    }

    #[test]
    fn test_lerp_is_linear_in_t() {
        let (v0, v1) = (10.0, 30.0);
        let step = lerp(v0, v1, 0.25) - lerp(v0, v1, 0.0);
        for i in 0..8 {
            let t = i as f32 * 0.25;
            assert_relative_eq!(lerp(v0, v1, t), v0 + step * (i as f32), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_relative_eq!(lerp(0.0, 10.0, -0.5), -5.0);
        assert_relative_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
    }
}
