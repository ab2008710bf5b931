//! Common validation and numeric utilities
//!
//! Pure functions shared by the parameter validators and the capture
//! mechanisms. No allocation, no panics: every edge case returns a defined
//! value or an error.

use crate::errors::{EvaluationError, EvaluationResult};

/// Inclusive physical envelope for one named field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Field name as spelled in the Rust struct
    pub field: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl FieldBounds {
    /// Bounds for a named field
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check a value against these bounds
    pub fn check(&self, value: f64) -> EvaluationResult<()> {
        check_range(self.field, value, self.min, self.max)
    }
}

/// Check that a value is finite and within `[min, max]`.
///
/// NaN fails both comparisons, so it is rejected without a separate test.
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> EvaluationResult<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(EvaluationError::InvalidParameter { field, value, min, max })
    }
}

/// Check every `(value, bounds)` pair in order, reporting the first failure
pub fn check_all(values: &[f64], bounds: &[FieldBounds]) -> EvaluationResult<()> {
    values
        .iter()
        .zip(bounds.iter())
        .try_for_each(|(value, bounds)| bounds.check(*value))
}

/// Clamp to `[0, 1]`, mapping NaN to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// `numerator / denominator` clamped to `[0, 1]`.
///
/// A zero denominator saturates to 1 when the numerator is positive and to 0
/// otherwise, instead of producing ∞ or NaN.
pub fn saturating_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        clamp_unit(numerator / denominator)
    } else if numerator > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range("x", 5.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 0.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 10.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", -1.0, 0.0, 10.0).is_err());
        assert!(check_range("x", 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(check_range("x", f64::NAN, 0.0, 10.0).is_err());
        assert!(check_range("x", f64::INFINITY, 0.0, f64::MAX).is_err());
        assert!(check_range("x", f64::NEG_INFINITY, f64::MIN, 0.0).is_err());
    }

    #[test]
    fn first_failure_reported() {
        let bounds = [
            FieldBounds::new("a", 0.0, 1.0),
            FieldBounds::new("b", 0.0, 1.0),
            FieldBounds::new("c", 0.0, 1.0),
        ];
        let err = check_all(&[0.5, 2.0, -1.0], &bounds).unwrap_err();
        assert_eq!(err.field(), "b");
    }

    #[test]
    fn unit_clamp() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn ratio_saturation() {
        assert_eq!(saturating_ratio(1.0, 4.0), 0.25);
        assert_eq!(saturating_ratio(8.0, 4.0), 1.0);
        assert_eq!(saturating_ratio(1.0, 0.0), 1.0);
        assert_eq!(saturating_ratio(0.0, 0.0), 0.0);
    }
}
