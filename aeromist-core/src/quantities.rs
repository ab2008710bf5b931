//! Derived quantities produced by one evaluation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one evaluation. A pure function of the inputs and the
/// evaluator's assumed constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedQuantities {
    /// Reynolds number of the carrier flow around the root (dimensionless)
    pub reynolds_number: f64,

    /// Droplet Stokes number based on the characteristic length (dimensionless)
    pub stokes_number: f64,

    /// Fraction of droplets striking the root, in `[0, 1]`
    pub impaction_efficiency: f64,

    /// Volumetric rate of mist liquid captured by the root zone (ml/min)
    pub absorption_rate_ml_per_min: f64,

    /// Mass rate of nutrients captured by the root zone (mg/min)
    pub nutrients_absorbed_rate_mg_per_min: f64,

    /// Droplet relaxation time under Stokes drag (s)
    pub relaxation_time_s: f64,

    /// Droplet terminal settling velocity (m/s)
    pub settling_velocity_m_per_s: f64,

    /// Per-mechanism capture efficiencies and retention factors
    pub capture: CaptureBreakdown,
}

/// Capture efficiency split by mechanism, plus retention losses
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureBreakdown {
    /// Direct interception efficiency
    pub interception: f64,

    /// Inertial impaction efficiency (same value as
    /// [`DerivedQuantities::impaction_efficiency`])
    pub impaction: f64,

    /// Gravitational settling efficiency
    pub sedimentation: f64,

    /// Fraction retained after small-droplet bounce
    pub bounce_factor: f64,

    /// Uptake multiplier for concentrated solutions
    pub concentration_factor: f64,

    /// Uptake multiplier after surface film formation
    pub film_factor: f64,

    /// Combined efficiency after all retention losses, in `[0, 1]`
    pub retained_efficiency: f64,
}

impl CaptureBreakdown {
    /// `(label, efficiency)` pairs for an efficiency-components chart
    pub fn components(&self) -> [(&'static str, f64); 3] {
        [
            ("Interception", self.interception),
            ("Impaction", self.impaction),
            ("Sedimentation", self.sedimentation),
        ]
    }

    /// Product of the retention factors
    pub fn retention(&self) -> f64 {
        self.bounce_factor * self.concentration_factor * self.film_factor
    }
}
