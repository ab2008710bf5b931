//! Physical Constants for AeroMist
//!
//! Fluid properties, gravity and the drag law used to turn a droplet diameter
//! into a relaxation time. Values are for the carrier air and the nutrient
//! solution droplets found in a typical aeroponic chamber.

// ===== FUNDAMENTAL CONSTANTS =====

/// Standard gravitational acceleration (m/s²).
///
/// Drives droplet settling (sedimentation capture).
///
/// Source: CGPM 1901, conventional value
pub const STANDARD_GRAVITY_M_PER_S2: f64 = 9.81;

/// Stokes drag denominator factor (dimensionless).
///
/// Particle relaxation time in creeping flow: τ = ρ_p · d² / (18 · μ).
///
/// Source: Stokes' law for a rigid sphere, Re_p << 1
pub const STOKES_DRAG_FACTOR: f64 = 18.0;

/// Speed of sound in air at 20°C (m/s).
///
/// Mist velocities beyond this are not mist. Used as the velocity ceiling.
///
/// Source: ISO 9613-1:1993
pub const SPEED_OF_SOUND_AIR_20C_M_PER_S: f64 = 343.2;

// ===== DROPLET MATERIAL =====

/// Density of liquid water at 20°C (kg/m³).
///
/// Assumed droplet material density. Dilute nutrient solutions
/// (< 2 g/L dissolved salts) differ from pure water by under 0.2%.
///
/// Source: NIST Chemistry WebBook
pub const WATER_DENSITY_20C_KG_PER_M3: f64 = 998.0;

// ===== CARRIER AIR =====

/// Dynamic viscosity of air at 20°C (Pa·s).
///
/// Source: CRC Handbook of Chemistry and Physics (1.81e-5, rounded)
pub const AIR_VISCOSITY_20C_PA_S: f64 = 1.8e-5;

/// Linear temperature coefficient of air viscosity around 20°C (1/°C).
///
/// μ(T) ≈ μ₂₀ · (1 + k · (T − 20)). Within 1% of Sutherland's law from
/// 0°C to 40°C, which covers any growth chamber.
///
/// Source: linearisation of Sutherland's law at 293 K
pub const AIR_VISCOSITY_TEMP_COEFF_PER_C: f64 = 0.00284;

/// Reference temperature of the viscosity linearisation (°C).
pub const AIR_VISCOSITY_REFERENCE_TEMP_C: f64 = 20.0;
