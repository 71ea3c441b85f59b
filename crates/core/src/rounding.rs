//! Rounding to arbitrary increments
//!
//! Grid conversions snap values to half-spacing increments so that
//! cell-edge coordinates (index + 0.5) land exactly between grid points.

/// Round to the nearest multiple of `base`.
///
/// NaN propagates, so sentinel values survive a pass through grid
/// conversion.
pub fn round_to_nearest(value: f64, base: f64) -> f64 {
    (value / base).round() * base
}

/// Round down to the nearest multiple of `base`.
pub fn floor_to_nearest(value: f64, base: f64) -> f64 {
    (value / base).floor() * base
}

/// Round up to the nearest multiple of `base`.
pub fn ceiling_to_nearest(value: f64, base: f64) -> f64 {
    (value / base).ceil() * base
}

/// Round to the nearest half-integer.
pub fn round_to_half_integer(value: f64) -> f64 {
    round_to_nearest(value, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_nearest() {
        assert_relative_eq!(round_to_nearest(53.996, 0.005), 53.995);
        assert_relative_eq!(round_to_nearest(-1.3, 0.5), -1.5);
        assert_relative_eq!(round_to_nearest(7.0, 2.0), 8.0);
    }

    #[test]
    fn test_floor_and_ceiling() {
        assert_relative_eq!(floor_to_nearest(7.9, 2.0), 6.0);
        assert_relative_eq!(ceiling_to_nearest(6.1, 2.0), 8.0);
        assert_relative_eq!(floor_to_nearest(-0.1, 0.5), -0.5);
    }

    #[test]
    fn test_round_to_half_integer() {
        assert_relative_eq!(round_to_half_integer(100.4), 100.5);
        assert_relative_eq!(round_to_half_integer(100.1), 100.0);
        assert_relative_eq!(round_to_half_integer(-0.4), -0.5);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(round_to_nearest(f64::NAN, 0.5).is_nan());
        assert!(round_to_half_integer(f64::NAN).is_nan());
    }
}
