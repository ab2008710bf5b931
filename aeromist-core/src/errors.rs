//! Error Types for Physics Evaluation
//!
//! ## Design
//!
//! The evaluator has exactly one way to fail: an input (or an assumed
//! constant in [`EvaluatorConfig`](crate::EvaluatorConfig)) lies outside the
//! physical envelope the formulas are defined on. Everything downstream of
//! validation is closed-form and cannot diverge, so there is nothing else to
//! report.
//!
//! The error is kept `Copy` with only `&'static str` data, so it can be
//! returned from `no_std` builds and stored without allocation.
//!
//! ## Envelope, not just sign
//!
//! Every field is checked against an inclusive `[min, max]` interval:
//!
//! - Non-negative quantities use `min = 0.0`.
//! - Divisors (viscosity, characteristic length) use a small physical floor
//!   instead of `0.0`, which is what "strictly positive" means in practice.
//! - Upper bounds are physical ceilings (speed of sound, 10 mm droplets, ...)
//!   that keep every derived quantity finite.
//!
//! NaN and ±∞ fail every interval check, so a single variant covers the
//! finiteness requirement too.
//!
//! ## Handling
//!
//! ```rust
//! use aeromist_core::{EvaluationError, InputParameters, PhysicsEvaluator};
//!
//! let evaluator = PhysicsEvaluator::default();
//! let params = InputParameters {
//!     characteristic_length_mm: 0.0,
//!     ..InputParameters::default()
//! };
//!
//! match evaluator.evaluate(&params) {
//!     Ok(quantities) => println!("{}", quantities.absorption_rate_ml_per_min),
//!     Err(EvaluationError::InvalidParameter { field, value, .. }) => {
//!         // Caller corrects the input and re-invokes
//!         assert_eq!(field, "characteristic_length_mm");
//!         assert_eq!(value, 0.0);
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Evaluation errors - kept small and `Copy` for `no_std` use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// Parameter is not finite or lies outside its physical envelope
    #[error("Invalid parameter `{field}`: {value} outside [{min}, {max}]")]
    InvalidParameter {
        /// Name of the offending field, as spelled in the Rust struct
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Smallest accepted value (inclusive)
        min: f64,
        /// Largest accepted value (inclusive)
        max: f64,
    },
}

impl EvaluationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvaluationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter { field, value, min, max } =>
                defmt::write!(fmt, "Invalid {}: {} outside [{}, {}]", field, value, min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessor() {
        let err = EvaluationError::InvalidParameter {
            field: "mist_velocity_m_per_s",
            value: -1.0,
            min: 0.0,
            max: 343.2,
        };
        assert_eq!(err.field(), "mist_velocity_m_per_s");
    }

    #[cfg(feature = "std")]
    #[test]
    fn message_names_field_and_value() {
        let err = EvaluationError::InvalidParameter {
            field: "droplet_diameter_um",
            value: -5.0,
            min: 0.0,
            max: 10_000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("droplet_diameter_um"));
        assert!(msg.contains("-5"));
    }
}
