//! Physics Evaluator
//!
//! ## Formula Chain
//!
//! One evaluation runs a fixed chain of closed-form equations, each step
//! depending only on the inputs and the steps before it:
//!
//! ```text
//! 1. Re  = ρ_f · v · L / μ                      carrier flow regime
//! 2. τ   = ρ_p · d² / (18 μ)                    Stokes-drag relaxation time
//!    Stk = τ · v / L                            droplet inertia vs. flow turning
//! 3. η   = clamp(1 / (1 + a / Stkⁿ), 0, 1)      impaction efficiency
//! 4. A   = L · ℓ_root                           reference flux area
//!    φ   = N · π d³ / 6                         mist liquid loading
//!    Q   = η · v · A · φ                        absorption rate (→ ml/min)
//! 5. ṁ   = Q · c / 1000                         nutrients absorbed (mg/min)
//! ```
//!
//! `ρ_p`, `N`, `ℓ_root`, `a` and `n` are the assumed constants of
//! [`EvaluatorConfig`]. Everything else comes from [`InputParameters`].
//!
//! No iteration, no solver, no branching beyond the clamp. The only failure
//! mode is input validation, which runs before step 1.
//!
//! ## Reference Scenario
//!
//! 50 µm droplets, 500 mg/L, 2 m/s, air (1.2 kg/m³, 1.8e-5 Pa·s), 0.2 mm root
//! hairs, default constants:
//!
//! ```text
//! Re  = 26.667     Stk = 77.006     η = 0.99996
//! Q   = 7.854 ml/min                ṁ = 3.927 mg/min
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use aeromist_core::{InputParameters, PhysicsEvaluator};
//!
//! let evaluator = PhysicsEvaluator::default();
//! let quantities = evaluator.evaluate(&InputParameters::default())?;
//!
//! assert!(quantities.impaction_efficiency > 0.99);
//! # Ok::<(), aeromist_core::EvaluationError>(())
//! ```

use core::f64::consts::FRAC_PI_6;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        aeroponics::{
            CALIBRATED_DROPLET_MAX_UM, CALIBRATED_DROPLET_MIN_UM, EXPOSED_ROOT_LENGTH_M,
            MIST_DROPLET_NUMBER_DENSITY_PER_M3,
        },
        physics::{STANDARD_GRAVITY_M_PER_S2, STOKES_DRAG_FACTOR, WATER_DENSITY_20C_KG_PER_M3},
        units::{M3_PER_S_TO_ML_PER_MIN, ML_PER_L, M_PER_MM, M_PER_UM},
    },
    errors::EvaluationResult,
    mechanisms::{self, ImpactionCurve},
    params::InputParameters,
    quantities::DerivedQuantities,
    traits::CaptureContext,
    validators,
};

/// Assumed constants of the model.
///
/// These cannot be derived from the inputs; they describe the droplet
/// material, the mist chamber and the empirical impaction curve. Defaults
/// are water droplets at 500 per cm³ onto 10 m of exposed root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Droplet material density (kg/m³)
    pub droplet_density_kg_per_m3: f64,

    /// Droplets per cubic metre of mist (1/m³)
    pub droplet_number_density_per_m3: f64,

    /// Total exposed root length presenting frontal area to the mist (m)
    pub exposed_root_length_m: f64,

    /// Empirical impaction-efficiency curve
    pub impaction: ImpactionCurve,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            droplet_density_kg_per_m3: WATER_DENSITY_20C_KG_PER_M3,
            droplet_number_density_per_m3: MIST_DROPLET_NUMBER_DENSITY_PER_M3,
            exposed_root_length_m: EXPOSED_ROOT_LENGTH_M,
            impaction: ImpactionCurve::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Constants in declaration order, paired with
    /// [`validators::CONFIG_BOUNDS`]
    pub fn values(&self) -> [f64; 5] {
        [
            self.droplet_density_kg_per_m3,
            self.droplet_number_density_per_m3,
            self.exposed_root_length_m,
            self.impaction.coefficient,
            self.impaction.exponent,
        ]
    }

    /// Check every constant against its physical envelope
    pub fn validate(&self) -> EvaluationResult<()> {
        validators::validate_config(self)
    }

    /// Frontal area the root zone presents to the mist stream (m²)
    pub fn reference_flux_area_m2(&self, characteristic_length_m: f64) -> f64 {
        characteristic_length_m * self.exposed_root_length_m
    }

    /// Liquid volume per unit volume of mist (dimensionless)
    pub fn liquid_volume_fraction(&self, droplet_diameter_m: f64) -> f64 {
        let d = droplet_diameter_m;
        self.droplet_number_density_per_m3 * FRAC_PI_6 * d * d * d
    }

    /// Droplet relaxation time under Stokes drag (s)
    pub fn relaxation_time_s(&self, droplet_diameter_m: f64, fluid_viscosity_pa_s: f64) -> f64 {
        let d = droplet_diameter_m;
        self.droplet_density_kg_per_m3 * d * d / (STOKES_DRAG_FACTOR * fluid_viscosity_pa_s)
    }
}

/// Stateless evaluator of the droplet capture and absorption chain.
///
/// Holds only its validated [`EvaluatorConfig`]; `evaluate` takes `&self`,
/// never mutates, and may be called from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsEvaluator {
    config: EvaluatorConfig,
}

impl PhysicsEvaluator {
    /// Create an evaluator with custom assumed constants
    pub fn new(config: EvaluatorConfig) -> EvaluationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The assumed constants in use
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate the formula chain for one set of inputs
    pub fn evaluate(&self, params: &InputParameters) -> EvaluationResult<DerivedQuantities> {
        params.validate()?;

        if params.droplet_diameter_um < CALIBRATED_DROPLET_MIN_UM
            || params.droplet_diameter_um > CALIBRATED_DROPLET_MAX_UM
        {
            log_warn!(
                "Droplet diameter {} µm outside calibrated band [{}, {}] µm",
                params.droplet_diameter_um,
                CALIBRATED_DROPLET_MIN_UM,
                CALIBRATED_DROPLET_MAX_UM
            );
        }

        let d = params.droplet_diameter_um * M_PER_UM;
        let l = params.characteristic_length_mm * M_PER_MM;
        let v = params.mist_velocity_m_per_s;
        let mu = params.fluid_viscosity_pa_s;

        // 1. Carrier flow regime
        let reynolds_number = params.fluid_density_kg_per_m3 * v * l / mu;

        // 2. Droplet inertia
        let relaxation_time_s = self.config.relaxation_time_s(d, mu);
        let stokes_number = relaxation_time_s * v / l;
        let settling_velocity_m_per_s = relaxation_time_s * STANDARD_GRAVITY_M_PER_S2;

        // 3. Capture
        let context = CaptureContext {
            stokes_number,
            interception_ratio: d / l,
            settling_velocity_m_per_s,
            mist_velocity_m_per_s: v,
        };
        let capture = mechanisms::capture_breakdown(
            &self.config.impaction,
            &context,
            params.droplet_diameter_um,
            params.nutrient_concentration_mg_per_l,
            params.exposure_time_s,
        );
        let impaction_efficiency = capture.impaction;

        // 4. Captured liquid volume
        let flow_m3_per_s = impaction_efficiency
            * v
            * self.config.reference_flux_area_m2(l)
            * self.config.liquid_volume_fraction(d);
        let absorption_rate_ml_per_min = flow_m3_per_s * M3_PER_S_TO_ML_PER_MIN;

        // 5. Captured nutrient mass
        let nutrients_absorbed_rate_mg_per_min =
            absorption_rate_ml_per_min * params.nutrient_concentration_mg_per_l / ML_PER_L;

        log_debug!(
            "Re={} Stk={} eta={} Q={} ml/min m={} mg/min",
            reynolds_number,
            stokes_number,
            impaction_efficiency,
            absorption_rate_ml_per_min,
            nutrients_absorbed_rate_mg_per_min
        );

        Ok(DerivedQuantities {
            reynolds_number,
            stokes_number,
            impaction_efficiency,
            absorption_rate_ml_per_min,
            nutrients_absorbed_rate_mg_per_min,
            relaxation_time_s,
            settling_velocity_m_per_s,
            capture,
        })
    }
}
