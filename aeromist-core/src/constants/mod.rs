//! Constants for AeroMist Core
//!
//! Centralized, documented constants used throughout the evaluator. Every
//! numeric value used by a formula or a validation bound lives here, with its
//! unit in the name and its source in the doc comment.
//!
//! ## Organization
//!
//! - **Physics**: fluid and droplet properties, gravity, drag law
//! - **Aeroponics**: root-zone geometry, mist loading, capture-model thresholds
//! - **Limits**: physical envelopes each input and assumed constant must lie in
//! - **Units**: conversion factors between display and SI units
//! - **Buffers**: fixed capacities for `no_std` collections

/// Fluid, droplet and drag-law constants.
pub mod physics;

/// Root-zone geometry, mist loading and capture-model thresholds.
pub mod aeroponics;

/// Physical envelopes for inputs and assumed constants.
pub mod limits;

/// Unit conversion factors.
pub mod units;

/// Fixed capacities for sweep storage.
pub mod buffers;

pub use physics::{
    WATER_DENSITY_20C_KG_PER_M3, AIR_VISCOSITY_20C_PA_S,
    STANDARD_GRAVITY_M_PER_S2, STOKES_DRAG_FACTOR,
};

pub use aeroponics::{
    MIST_DROPLET_NUMBER_DENSITY_PER_M3, ROOT_SEGMENT_LENGTH_M, ROOT_SEGMENT_COUNT,
    EXPOSED_ROOT_LENGTH_M, CALIBRATED_DROPLET_MIN_UM, CALIBRATED_DROPLET_MAX_UM,
};

pub use buffers::{SWEEP_MAX_POINTS, DEFAULT_SWEEP_POINTS};
