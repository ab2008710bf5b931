//! Core physics engine for AeroMist
//!
//! Estimates how much nutrient mist an aeroponic root zone captures, from a
//! handful of closed-form relations: Reynolds number of the carrier flow,
//! Stokes number of the droplets, an empirical impaction-efficiency curve and
//! the resulting volumetric and nutrient mass absorption rates.
//!
//! Key properties:
//! - Pure and deterministic: same inputs, bit-identical outputs
//! - Single failure mode: out-of-envelope input parameters
//! - `no_std` capable, no heap allocation (sweeps use fixed capacity)
//!
//! ```no_run
//! use aeromist_core::{InputParameters, PhysicsEvaluator, Summary};
//!
//! let evaluator = PhysicsEvaluator::default();
//! let params = InputParameters {
//!     droplet_diameter_um: 35.0,
//!     ..InputParameters::default()
//! };
//!
//! match evaluator.evaluate(&params) {
//!     Ok(quantities) => println!("{}", Summary::new(&params, &quantities)),
//!     Err(e) => eprintln!("{}", e), // Correct the input and re-run
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled away without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod mechanisms;
pub mod params;
pub mod quantities;
pub mod report;
pub mod sweep;
pub mod traits;
pub mod validators;

// Public API
pub use errors::{EvaluationError, EvaluationResult};
pub use evaluator::{EvaluatorConfig, PhysicsEvaluator};
pub use mechanisms::ImpactionCurve;
pub use params::InputParameters;
pub use quantities::{CaptureBreakdown, DerivedQuantities};
pub use report::Summary;
pub use sweep::{Sweep, SweepAxis, SweepPoint, SweepRange};
pub use traits::{CaptureContext, CaptureMechanism};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
