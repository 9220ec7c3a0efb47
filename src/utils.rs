//! Numeric conversion helpers between OpenCV float results and pixel coordinates.

/// Round an `f64` to the nearest `i32`, clamping to the `i32` range.
///
/// Non-finite input maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i32_round(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Truncate an `f64` to an `i32`, clamping to the `i32` range.
///
/// Non-finite input maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f64_to_i32_trunc(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_f64_to_i32_round() {
        assert_eq!(f64_to_i32_round(42.4), 42);
        assert_eq!(f64_to_i32_round(42.5), 43);
        assert_eq!(f64_to_i32_round(-42.5), -43);
        assert_eq!(f64_to_i32_round(0.0), 0);

        assert_eq!(f64_to_i32_round(f64::NAN), 0);
        assert_eq!(f64_to_i32_round(f64::INFINITY), 0);
        assert_eq!(f64_to_i32_round(1e300), i32::MAX);
        assert_eq!(f64_to_i32_round(-1e300), i32::MIN);
    }

    #[test]
    fn test_f64_to_i32_trunc() {
        assert_eq!(f64_to_i32_trunc(230.4), 230);
        assert_eq!(f64_to_i32_trunc(-167.9), -167);
        assert_eq!(f64_to_i32_trunc(f64::NEG_INFINITY), 0);
    }

    proptest! {
        #[test]
        fn round_stays_within_one_of_input(value in -1e9f64..1e9f64) {
            let result = f64_to_i32_round(value);
            prop_assert!((f64::from(result) - value).abs() <= 0.5);
        }

        #[test]
        fn trunc_never_grows_magnitude(value in -1e9f64..1e9f64) {
            let result = f64_to_i32_trunc(value);
            prop_assert!(f64::from(result).abs() <= value.abs());
        }
    }
}
