//! Physical-Envelope Validation
//!
//! ## Overview
//!
//! The formula chain is only defined on physically meaningful inputs. A
//! zero characteristic length divides by zero; a negative droplet diameter
//! squares into a positive relaxation time and silently produces nonsense.
//! This module rejects such inputs before any formula runs.
//!
//! ## Validation Layers
//!
//! ### 1. Finiteness
//! NaN and ±∞ are rejected for every field. This falls out of the range
//! check: NaN compares false against every bound.
//!
//! ### 2. Sign and Divisors
//! Quantities that are physically non-negative (diameter, concentration,
//! velocity, density, time) accept `0.0`. Divisors (viscosity,
//! characteristic length) have a strictly positive physical floor.
//!
//! ### 3. Physical Ceilings
//! Each field has an upper bound no real aeroponic system approaches
//! (speed of sound, 10 mm droplets). The ceilings guarantee that every
//! derived quantity stays finite.
//!
//! ## Assumed Constants
//!
//! [`EvaluatorConfig`](crate::EvaluatorConfig) is validated the same way, so a
//! bad config loaded from a profile fails with the same error shape as a bad
//! input.
//!
//! ## Usage Example
//!
//! ```rust
//! use aeromist_core::InputParameters;
//!
//! let params = InputParameters {
//!     droplet_diameter_um: -5.0,
//!     ..InputParameters::default()
//! };
//!
//! let err = params.validate().unwrap_err();
//! assert_eq!(err.field(), "droplet_diameter_um");
//! ```

mod parameters;
pub(crate) mod utils;

pub use parameters::{validate_config, validate_inputs, CONFIG_BOUNDS, INPUT_BOUNDS};
pub use utils::FieldBounds;
