//! Capture Mechanisms and Retention Factors
//!
//! ## Single-Collector Capture
//!
//! A root hair in a mist stream is a cylinder in cross flow. Droplets reach it
//! by three independent routes:
//!
//! ```text
//!             mist stream ──►
//!   ·  ·  ·  ·  ·  ·  ·  ·  ·  ·
//!   ·  ·  ·  ·──╮  ·  ·  ·  ·  ·      impaction:    inertia carries the droplet
//!   ·  ·  ·  ·  ● ◄─ root   ·  ·                    across the bending streamlines
//!   ·  ·  ·  ·──╯  ·  ·  ·  ·  ·      interception: the streamline passes within
//!   ·  ·  ·  ·  ·  ·  ·  ·  ·  ·                    one droplet radius of the root
//!                                     sedimentation: gravity pulls the droplet down
//! ```
//!
//! | Mechanism     | Driving group                  | Model                      |
//! |---------------|--------------------------------|----------------------------|
//! | Impaction     | Stk = τ·v / L                  | η = 1 / (1 + a / Stkⁿ)     |
//! | Interception  | R = d / L                      | η = 0.6·R² / (1 + R)       |
//! | Sedimentation | v_s / v, v_s = τ·g             | η = min(v_s / v, 1)        |
//!
//! Impaction dominates for mist droplets on root hairs: a 50 µm droplet at
//! 2 m/s on a 0.2 mm hair has Stk ≈ 77 and is captured almost surely.
//!
//! ## Retention
//!
//! Reaching the root is not the same as staying on it:
//!
//! - **Bounce**: droplets below 30 µm rebound or re-entrain, losing 1% per µm.
//! - **Film formation**: droplets above 40 µm coalesce into a film that sheds
//!   once saturated; uptake drops by up to 30% over long exposures.
//! - **Concentration**: solutions above 1 000 mg/L are viscous enough to cut
//!   uptake by 10%.
//!
//! These factors only feed the retained efficiency of
//! [`CaptureBreakdown`]; the absorption-rate chain uses the impaction
//! efficiency alone.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::aeroponics::*,
    quantities::CaptureBreakdown,
    traits::{CaptureContext, CaptureMechanism},
    validators::utils::{clamp_unit, saturating_ratio},
};

/// Saturating inertial-impaction curve η = 1 / (1 + a / Stkⁿ).
///
/// Monotonically increasing in Stk for any `a, n > 0`, with η(0) = 0 and
/// η → 1 as Stk → ∞. The default (a = 0.25, n = 2) is
/// η = Stk² / (Stk² + 0.25).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpactionCurve {
    /// Coefficient `a`: Stk at which η = ½ is `a^(1/n)`
    pub coefficient: f64,
    /// Exponent `n`: steepness of the transition
    pub exponent: f64,
}

impl Default for ImpactionCurve {
    fn default() -> Self {
        Self {
            coefficient: IMPACTION_CURVE_COEFFICIENT,
            exponent: IMPACTION_CURVE_EXPONENT,
        }
    }
}

impl ImpactionCurve {
    /// Impaction efficiency at a given Stokes number, clamped to `[0, 1]`.
    ///
    /// Stk = 0 gives a / 0 = ∞ and therefore η = 0 without a special case.
    pub fn efficiency_at(&self, stokes_number: f64) -> f64 {
        clamp_unit(1.0 / (1.0 + self.coefficient / libm::pow(stokes_number, self.exponent)))
    }

    /// Stokes number at which half the droplets impact
    pub fn half_efficiency_stokes(&self) -> f64 {
        libm::pow(self.coefficient, 1.0 / self.exponent)
    }
}

impl CaptureMechanism for ImpactionCurve {
    fn label(&self) -> &'static str {
        "Impaction"
    }

    fn efficiency(&self, context: &CaptureContext) -> f64 {
        self.efficiency_at(context.stokes_number)
    }
}

/// Direct interception: the droplet touches the root while following its
/// streamline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interception {
    /// Prefactor of the R² / (1 + R) law
    pub coefficient: f64,
}

impl Default for Interception {
    fn default() -> Self {
        Self { coefficient: INTERCEPTION_COEFFICIENT }
    }
}

impl CaptureMechanism for Interception {
    fn label(&self) -> &'static str {
        "Interception"
    }

    fn efficiency(&self, context: &CaptureContext) -> f64 {
        let r = context.interception_ratio;
        clamp_unit(self.coefficient * r * r / (1.0 + r))
    }
}

/// Gravitational settling onto the root
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sedimentation;

impl CaptureMechanism for Sedimentation {
    fn label(&self) -> &'static str {
        "Sedimentation"
    }

    fn efficiency(&self, context: &CaptureContext) -> f64 {
        saturating_ratio(context.settling_velocity_m_per_s, context.mist_velocity_m_per_s)
    }
}

/// Fraction of small droplets retained rather than bouncing off
pub fn bounce_factor(droplet_diameter_um: f64) -> f64 {
    if droplet_diameter_um < BOUNCE_THRESHOLD_UM {
        clamp_unit(1.0 - BOUNCE_LOSS_PER_UM * (BOUNCE_THRESHOLD_UM - droplet_diameter_um))
    } else {
        1.0
    }
}

/// Uptake multiplier for concentrated (viscous) solutions
pub fn concentration_factor(nutrient_concentration_mg_per_l: f64) -> f64 {
    if nutrient_concentration_mg_per_l > HIGH_CONCENTRATION_THRESHOLD_MG_PER_L {
        HIGH_CONCENTRATION_FACTOR
    } else {
        1.0
    }
}

/// Uptake multiplier once large droplets have coalesced into a surface film.
///
/// Film forms only for droplets above 40 µm after 30 s of exposure. The
/// saturation time shortens by a second per micrometre above 50 µm, and the
/// loss grows with the fraction of the exposure spent past saturation.
pub fn film_formation_factor(droplet_diameter_um: f64, exposure_time_s: f64) -> f64 {
    if droplet_diameter_um <= FILM_DROPLET_THRESHOLD_UM
        || exposure_time_s <= FILM_BASE_SATURATION_TIME_S
    {
        return 1.0;
    }

    let saturation_time =
        FILM_BASE_SATURATION_TIME_S + (FILM_REFERENCE_DIAMETER_UM - droplet_diameter_um);
    if exposure_time_s <= saturation_time {
        return 1.0;
    }

    let excess_fraction = (exposure_time_s - saturation_time) / exposure_time_s;
    clamp_unit(1.0 - FILM_MAX_LOSS * excess_fraction)
}

/// Evaluate all mechanisms and retention factors for one droplet population
pub fn capture_breakdown(
    impaction: &ImpactionCurve,
    context: &CaptureContext,
    droplet_diameter_um: f64,
    nutrient_concentration_mg_per_l: f64,
    exposure_time_s: f64,
) -> CaptureBreakdown {
    let interception = Interception::default().efficiency(context);
    let impaction = impaction.efficiency(context);
    let sedimentation = Sedimentation.efficiency(context);

    let bounce = bounce_factor(droplet_diameter_um);
    let concentration = concentration_factor(nutrient_concentration_mg_per_l);
    let film = film_formation_factor(droplet_diameter_um, exposure_time_s);

    let breakdown = CaptureBreakdown {
        interception,
        impaction,
        sedimentation,
        bounce_factor: bounce,
        concentration_factor: concentration,
        film_factor: film,
        retained_efficiency: 0.0,
    };

    CaptureBreakdown {
        retained_efficiency: clamp_unit(
            (interception + impaction + sedimentation) * breakdown.retention(),
        ),
        ..breakdown
    }
}
