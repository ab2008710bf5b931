//! Parameter Sweeps
//!
//! A sweep varies one input across a linear range while holding the rest of
//! a base [`InputParameters`] fixed, evaluating the full chain at every point.
//! The resulting series are what the droplet-size and concentration charts
//! plot.
//!
//! Storage is a fixed-capacity `heapless::Vec`, so sweeps work without an
//! allocator. A sweep either succeeds for every point or fails with the first
//! point's validation error.
//!
//! ```rust
//! use aeromist_core::{InputParameters, PhysicsEvaluator, SweepAxis, SweepRange};
//!
//! let evaluator = PhysicsEvaluator::default();
//! let sweep = evaluator.sweep(
//!     &InputParameters::default(),
//!     SweepAxis::DropletDiameter,
//!     SweepRange::calibrated_droplets(),
//! )?;
//!
//! for (diameter, efficiency) in sweep.series(|q| q.impaction_efficiency) {
//!     assert!((20.0..=50.0).contains(&diameter));
//!     assert!((0.0..=1.0).contains(&efficiency));
//! }
//! # Ok::<(), aeromist_core::EvaluationError>(())
//! ```

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        aeroponics::{
            CALIBRATED_DROPLET_MAX_UM, CALIBRATED_DROPLET_MIN_UM,
            SWEEP_CONCENTRATION_MAX_MG_PER_L, SWEEP_CONCENTRATION_MIN_MG_PER_L,
        },
        buffers::{DEFAULT_SWEEP_POINTS, SWEEP_MAX_POINTS, SWEEP_MIN_POINTS},
    },
    errors::{EvaluationError, EvaluationResult},
    evaluator::PhysicsEvaluator,
    params::InputParameters,
    quantities::DerivedQuantities,
    validators::utils,
};

/// Input varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SweepAxis {
    /// Droplet diameter (µm)
    DropletDiameter,
    /// Nutrient concentration (mg/L)
    NutrientConcentration,
    /// Mist velocity (m/s)
    MistVelocity,
}

impl SweepAxis {
    /// Base parameters with this axis set to `value`
    pub fn apply(self, base: &InputParameters, value: f64) -> InputParameters {
        match self {
            Self::DropletDiameter => InputParameters { droplet_diameter_um: value, ..*base },
            Self::NutrientConcentration => {
                InputParameters { nutrient_concentration_mg_per_l: value, ..*base }
            }
            Self::MistVelocity => InputParameters { mist_velocity_m_per_s: value, ..*base },
        }
    }

    /// Current value of this axis in `params`
    pub fn value_of(self, params: &InputParameters) -> f64 {
        match self {
            Self::DropletDiameter => params.droplet_diameter_um,
            Self::NutrientConcentration => params.nutrient_concentration_mg_per_l,
            Self::MistVelocity => params.mist_velocity_m_per_s,
        }
    }

    /// Axis label for charts
    pub fn label(self) -> &'static str {
        match self {
            Self::DropletDiameter => "Droplet Size",
            Self::NutrientConcentration => "Nutrient Concentration",
            Self::MistVelocity => "Mist Velocity",
        }
    }

    /// Display unit of the axis
    pub fn unit(self) -> &'static str {
        match self {
            Self::DropletDiameter => "µm",
            Self::NutrientConcentration => "mg/L",
            Self::MistVelocity => "m/s",
        }
    }
}

/// Inclusive, linearly spaced range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepRange {
    /// First value
    pub start: f64,
    /// Last value
    pub end: f64,
    /// Number of points including both endpoints
    pub points: usize,
}

impl SweepRange {
    /// `start..=end` with the default point count
    pub fn linear(start: f64, end: f64) -> Self {
        Self { start, end, points: DEFAULT_SWEEP_POINTS }
    }

    /// Same range with a different point count
    pub fn with_points(self, points: usize) -> Self {
        Self { points, ..self }
    }

    /// Droplet diameters the capture model was calibrated on (20–50 µm)
    pub fn calibrated_droplets() -> Self {
        Self::linear(CALIBRATED_DROPLET_MIN_UM, CALIBRATED_DROPLET_MAX_UM)
    }

    /// Typical hydroponic nutrient strengths (100–2 000 mg/L)
    pub fn notebook_concentrations() -> Self {
        Self::linear(SWEEP_CONCENTRATION_MIN_MG_PER_L, SWEEP_CONCENTRATION_MAX_MG_PER_L)
    }

    /// Check the point count against sweep capacity
    pub fn validate(&self) -> EvaluationResult<()> {
        utils::check_range(
            "points",
            self.points as f64,
            SWEEP_MIN_POINTS as f64,
            SWEEP_MAX_POINTS as f64,
        )
    }

    /// Value of the `index`-th point. The last point is exactly `end`.
    pub fn value_at(&self, index: usize) -> f64 {
        let last = self.points.saturating_sub(1);
        if index >= last {
            return self.end;
        }
        self.start + (self.end - self.start) * index as f64 / last as f64
    }
}

/// One evaluated point of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Value of the swept input
    pub value: f64,
    /// Quantities evaluated at that value
    pub quantities: DerivedQuantities,
}

/// Evaluated sweep along one axis
#[derive(Debug, Clone)]
pub struct Sweep {
    axis: SweepAxis,
    points: Vec<SweepPoint, SWEEP_MAX_POINTS>,
}

impl Sweep {
    /// Axis that was varied
    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    /// Evaluated points in ascending index order
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the sweep holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(input, output)` pairs for one derived quantity
    pub fn series<'a, F>(&'a self, select: F) -> impl Iterator<Item = (f64, f64)> + 'a
    where
        F: Fn(&DerivedQuantities) -> f64 + 'a,
    {
        self.points.iter().map(move |p| (p.value, select(&p.quantities)))
    }

    /// Point whose output is largest for the selected quantity
    pub fn peak_by<F>(&self, select: F) -> Option<&SweepPoint>
    where
        F: Fn(&DerivedQuantities) -> f64,
    {
        self.points.iter().fold(None, |best: Option<&SweepPoint>, p| match best {
            Some(b) if select(&b.quantities) >= select(&p.quantities) => Some(b),
            _ => Some(p),
        })
    }
}

impl PhysicsEvaluator {
    /// Evaluate `base` at every point of `range` along `axis`
    pub fn sweep(
        &self,
        base: &InputParameters,
        axis: SweepAxis,
        range: SweepRange,
    ) -> EvaluationResult<Sweep> {
        range.validate()?;

        let mut points = Vec::new();
        for index in 0..range.points {
            let value = range.value_at(index);
            let quantities = self.evaluate(&axis.apply(base, value))?;
            points
                .push(SweepPoint { value, quantities })
                .map_err(|_| EvaluationError::InvalidParameter {
                    field: "points",
                    value: range.points as f64,
                    min: SWEEP_MIN_POINTS as f64,
                    max: SWEEP_MAX_POINTS as f64,
                })?;
        }

        log_debug!(
            "Swept {} over {} points [{}, {}]",
            axis.label(),
            range.points,
            range.start,
            range.end
        );

        Ok(Sweep { axis, points })
    }
}
