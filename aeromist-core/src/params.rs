//! Input parameters for one evaluation
//!
//! Units are carried in the field names. The evaluator converts to SI
//! internally; callers work in the units growers actually quote (µm droplets,
//! mg/L nutrient solutions, mm roots).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::physics::{
        AIR_VISCOSITY_20C_PA_S, AIR_VISCOSITY_REFERENCE_TEMP_C, AIR_VISCOSITY_TEMP_COEFF_PER_C,
    },
    errors::EvaluationResult,
    validators,
};

/// Physical inputs of one evaluation.
///
/// Immutable and `Copy`: build one, hand it to
/// [`PhysicsEvaluator::evaluate`](crate::PhysicsEvaluator::evaluate), change a
/// field with struct update syntax for the next run.
///
/// `Default` is the reference scenario: 50 µm droplets of a 500 mg/L solution
/// carried at 2 m/s through air onto 0.2 mm root hairs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputParameters {
    /// Droplet diameter (µm)
    pub droplet_diameter_um: f64,

    /// Nutrient concentration of the misted solution (mg/L, ≈ ppm)
    pub nutrient_concentration_mg_per_l: f64,

    /// Mist stream velocity approaching the roots (m/s)
    pub mist_velocity_m_per_s: f64,

    /// Density of the carrier medium (kg/m³)
    pub fluid_density_kg_per_m3: f64,

    /// Dynamic viscosity of the carrier medium (Pa·s)
    pub fluid_viscosity_pa_s: f64,

    /// Characteristic collector length: root hair diameter (mm)
    pub characteristic_length_mm: f64,

    /// Time the roots have been exposed to the current misting cycle (s)
    pub exposure_time_s: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            droplet_diameter_um: 50.0,
            nutrient_concentration_mg_per_l: 500.0,
            mist_velocity_m_per_s: 2.0,
            fluid_density_kg_per_m3: 1.2,
            fluid_viscosity_pa_s: AIR_VISCOSITY_20C_PA_S,
            characteristic_length_mm: 0.2,
            exposure_time_s: 60.0,
        }
    }
}

impl InputParameters {
    /// Field values in declaration order, paired with
    /// [`validators::INPUT_BOUNDS`]
    pub fn values(&self) -> [f64; 7] {
        [
            self.droplet_diameter_um,
            self.nutrient_concentration_mg_per_l,
            self.mist_velocity_m_per_s,
            self.fluid_density_kg_per_m3,
            self.fluid_viscosity_pa_s,
            self.characteristic_length_mm,
            self.exposure_time_s,
        ]
    }

    /// Check every field against its physical envelope
    pub fn validate(&self) -> EvaluationResult<()> {
        validators::validate_inputs(self)
    }

    /// Same parameters with the carrier viscosity of air at `celsius`.
    ///
    /// Uses the linear correction μ(T) = μ₂₀ · (1 + 0.00284 · (T − 20)).
    /// The result is not validated here; an absurd temperature surfaces as
    /// an invalid `fluid_viscosity_pa_s` at evaluation time.
    pub fn with_air_temperature(self, celsius: f64) -> Self {
        Self {
            fluid_viscosity_pa_s: air_viscosity_at(celsius),
            ..self
        }
    }
}

/// Dynamic viscosity of air at `celsius` (Pa·s)
pub fn air_viscosity_at(celsius: f64) -> f64 {
    AIR_VISCOSITY_20C_PA_S
        * (1.0 + AIR_VISCOSITY_TEMP_COEFF_PER_C * (celsius - AIR_VISCOSITY_REFERENCE_TEMP_C))
}
