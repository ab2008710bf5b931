//! Physical Envelopes
//!
//! Inclusive `[MIN, MAX]` bounds for every input and assumed constant. The
//! bounds are wide enough for any real aeroponic system and tight enough that
//! no formula can overflow to infinity.

use super::physics::SPEED_OF_SOUND_AIR_20C_M_PER_S;

// ===== INPUT PARAMETERS =====

/// Droplets above 10 mm are rain, not mist (µm).
pub const DROPLET_DIAMETER_MAX_UM: f64 = 10_000.0;

/// Pure solute: 1 kg per litre (mg/L).
pub const NUTRIENT_CONCENTRATION_MAX_MG_PER_L: f64 = 1_000_000.0;

/// Mist cannot be faster than sound in its carrier (m/s).
pub const MIST_VELOCITY_MAX_M_PER_S: f64 = SPEED_OF_SOUND_AIR_20C_M_PER_S;

/// Carrier media range from near-vacuum up to brine (kg/m³).
pub const FLUID_DENSITY_MAX_KG_PER_M3: f64 = 2_000.0;

/// Lowest gas viscosity worth modelling (Pa·s).
///
/// Hydrogen at 0°C is 8.4e-6 Pa·s; 1e-7 leaves two orders of margin.
pub const FLUID_VISCOSITY_MIN_PA_S: f64 = 1e-7;

/// Glycerol is ~1.4 Pa·s; 10 Pa·s is far beyond any carrier (Pa·s).
pub const FLUID_VISCOSITY_MAX_PA_S: f64 = 10.0;

/// Finest root hair is ~5 µm; 1 µm is the floor (mm).
pub const CHARACTERISTIC_LENGTH_MIN_MM: f64 = 1e-3;

/// One metre is a trunk, not a root (mm).
pub const CHARACTERISTIC_LENGTH_MAX_MM: f64 = 1_000.0;

/// One day (s).
pub const EXPOSURE_TIME_MAX_S: f64 = 86_400.0;

// ===== ASSUMED CONSTANTS =====

/// Osmium is 22 590 kg/m³ (kg/m³).
pub const DROPLET_DENSITY_MAX_KG_PER_M3: f64 = 25_000.0;

/// One droplet per cubic millimetre (droplets/m³).
pub const DROPLET_NUMBER_DENSITY_MAX_PER_M3: f64 = 1e15;

/// Ten kilometres of exposed root (m).
pub const EXPOSED_ROOT_LENGTH_MAX_M: f64 = 1e4;

/// Largest impaction curve coefficient.
pub const IMPACTION_COEFFICIENT_MAX: f64 = 1e3;

/// Largest impaction curve exponent.
pub const IMPACTION_EXPONENT_MAX: f64 = 8.0;

/// Smallest strictly positive value accepted for an assumed constant.
pub const STRICTLY_POSITIVE_MIN: f64 = f64::MIN_POSITIVE;
