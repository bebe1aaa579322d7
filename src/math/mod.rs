/// nalgebra 2D point type, accepted and produced by [`crate::Point`] conversions.
pub type Point2 = nalgebra::Point2<f64>;

/// nalgebra 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for tolerant comparisons such as [`crate::Point::is_equal`].
pub const TOLERANCE: f64 = 1e-10;

/// Minimum of two values, NaN if either is NaN.
///
/// Unlike `f64::min`, a NaN operand is never discarded.
#[must_use]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Maximum of two values, NaN if either is NaN.
#[must_use]
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_min_max_ordinary_values() {
        assert_eq!(nan_min(1.0, 2.0).to_bits(), 1.0_f64.to_bits());
        assert_eq!(nan_max(1.0, 2.0).to_bits(), 2.0_f64.to_bits());
        assert_eq!(nan_min(-3.0, f64::INFINITY).to_bits(), (-3.0_f64).to_bits());
        assert_eq!(nan_max(f64::NEG_INFINITY, -3.0).to_bits(), (-3.0_f64).to_bits());
    }

    #[test]
    fn nan_min_max_propagate_nan() {
        assert!(nan_min(f64::NAN, 1.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 1.0).is_nan());
        assert!(nan_max(1.0, f64::NAN).is_nan());
    }
}
