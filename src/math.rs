//! Scalar constants and tolerance helpers shared by the geometry types.

/// π rounded to `f32`.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f32 = 3.14159265;

/// Default tolerance for nearly-equal comparisons (`1 / 4096`).
pub const EPSILON: f32 = 1.0 / (1 << 12) as f32;

/// True when `|a| <= tolerance`.
#[inline]
pub fn nearly_zero(a: f32, tolerance: f32) -> bool {
    debug_assert!(tolerance >= 0.0, "tolerance must be non-negative");
    a.abs() <= tolerance
}

/// True when `|a - b| <= tolerance`.
#[inline]
pub fn nearly_equal(a: f32, b: f32, tolerance: f32) -> bool {
    nearly_zero(b - a, tolerance)
}

/// Division with IEEE-754 semantics for zero divisors: `x / 0.0` is `±inf` or
/// NaN, never a panic.
#[inline]
pub fn ieee_float_divide(dividend: f32, divisor: f32) -> f32 {
    dividend / divisor
}

/// Linear interpolation: `from + (to - from) * t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Converts degrees to radians using [`PI`].
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert_eq!(EPSILON, 0.000244140625);
    }

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0, 1.0 + EPSILON / 2.0, EPSILON));
        assert!(!nearly_equal(1.0, 1.01, EPSILON));
        assert!(!nearly_equal(1.0, f32::NAN, EPSILON));
        assert!(nearly_zero(-0.0, 0.0));
    }

    #[test]
    fn test_ieee_float_divide() {
        assert_eq!(ieee_float_divide(1.0, 0.0), f32::INFINITY);
        assert_eq!(ieee_float_divide(-1.0, 0.0), f32::NEG_INFINITY);
        assert!(ieee_float_divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(-1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!(nearly_equal(degrees_to_radians(180.0), PI, EPSILON));
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }
}
