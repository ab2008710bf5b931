//! Property tests for the evaluation chain
//!
//! Checks the contract of `PhysicsEvaluator::evaluate` over randomly drawn
//! inputs from realistic aeroponic ranges and beyond.

use aeromist_core::{
    EvaluationError, InputParameters, PhysicsEvaluator, SweepAxis, SweepRange,
};
use proptest::prelude::*;

fn relative_eq(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

prop_compose! {
    fn valid_params()(
        droplet in 0.0f64..500.0,
        concentration in 0.0f64..5_000.0,
        velocity in 0.0f64..50.0,
        density in 0.0f64..1_500.0,
        viscosity in 1e-6f64..1e-2,
        length in 0.01f64..10.0,
        exposure in 0.0f64..3_600.0,
    ) -> InputParameters {
        InputParameters {
            droplet_diameter_um: droplet,
            nutrient_concentration_mg_per_l: concentration,
            mist_velocity_m_per_s: velocity,
            fluid_density_kg_per_m3: density,
            fluid_viscosity_pa_s: viscosity,
            characteristic_length_mm: length,
            exposure_time_s: exposure,
        }
    }
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(params in valid_params()) {
        let evaluator = PhysicsEvaluator::default();
        let first = evaluator.evaluate(&params).unwrap();
        let second = evaluator.evaluate(&params).unwrap();

        prop_assert_eq!(first.reynolds_number.to_bits(), second.reynolds_number.to_bits());
        prop_assert_eq!(first.stokes_number.to_bits(), second.stokes_number.to_bits());
        prop_assert_eq!(first.impaction_efficiency.to_bits(), second.impaction_efficiency.to_bits());
        prop_assert_eq!(
            first.absorption_rate_ml_per_min.to_bits(),
            second.absorption_rate_ml_per_min.to_bits()
        );
        prop_assert_eq!(
            first.nutrients_absorbed_rate_mg_per_min.to_bits(),
            second.nutrients_absorbed_rate_mg_per_min.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn efficiency_within_unit_interval(params in valid_params()) {
        let q = PhysicsEvaluator::default().evaluate(&params).unwrap();
        prop_assert!((0.0..=1.0).contains(&q.impaction_efficiency));
        prop_assert!((0.0..=1.0).contains(&q.capture.retained_efficiency));
        for (_, efficiency) in q.capture.components() {
            prop_assert!((0.0..=1.0).contains(&efficiency));
        }
    }

    #[test]
    fn outputs_always_finite(params in valid_params()) {
        let q = PhysicsEvaluator::default().evaluate(&params).unwrap();
        for value in [
            q.reynolds_number,
            q.stokes_number,
            q.impaction_efficiency,
            q.absorption_rate_ml_per_min,
            q.nutrients_absorbed_rate_mg_per_min,
            q.relaxation_time_s,
            q.settling_velocity_m_per_s,
        ] {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn dimensionless_groups_linear_in_velocity(
        params in valid_params(),
        factor in 0.1f64..5.0,
    ) {
        let evaluator = PhysicsEvaluator::default();
        let base = evaluator.evaluate(&params).unwrap();
        let scaled_params = InputParameters {
            mist_velocity_m_per_s: params.mist_velocity_m_per_s * factor,
            ..params
        };
        let scaled = evaluator.evaluate(&scaled_params).unwrap();

        prop_assert!(relative_eq(scaled.reynolds_number, base.reynolds_number * factor, 1e-12));
        prop_assert!(relative_eq(scaled.stokes_number, base.stokes_number * factor, 1e-12));
    }

    #[test]
    fn efficiency_monotone_in_stokes(
        params in valid_params(),
        factor in 1.0f64..5.0,
    ) {
        let evaluator = PhysicsEvaluator::default();
        let slower = evaluator.evaluate(&params).unwrap();
        let faster = evaluator.evaluate(&InputParameters {
            mist_velocity_m_per_s: params.mist_velocity_m_per_s * factor,
            ..params
        }).unwrap();
        prop_assert!(faster.impaction_efficiency >= slower.impaction_efficiency);
    }

    #[test]
    fn no_flow_no_absorption(params in valid_params()) {
        let still = InputParameters { mist_velocity_m_per_s: 0.0, ..params };
        let q = PhysicsEvaluator::default().evaluate(&still).unwrap();
        prop_assert_eq!(q.absorption_rate_ml_per_min, 0.0);
        prop_assert_eq!(q.nutrients_absorbed_rate_mg_per_min, 0.0);
    }

    #[test]
    fn negative_diameter_rejected(params in valid_params(), diameter in -1e6f64..-1e-9) {
        let bad = InputParameters { droplet_diameter_um: diameter, ..params };
        let err = PhysicsEvaluator::default().evaluate(&bad).unwrap_err();
        prop_assert_eq!(err.field(), "droplet_diameter_um");
    }

    #[test]
    fn non_positive_length_rejected(params in valid_params(), length in -10.0f64..=0.0) {
        let bad = InputParameters { characteristic_length_mm: length, ..params };
        let err = PhysicsEvaluator::default().evaluate(&bad).unwrap_err();
        let rejected = matches!(
            err,
            EvaluationError::InvalidParameter { field: "characteristic_length_mm", .. }
        );
        prop_assert!(rejected, "unexpected error {:?}", err);
    }

    #[test]
    fn input_not_mutated(params in valid_params()) {
        let copy = params;
        let _ = PhysicsEvaluator::default().evaluate(&params);
        prop_assert_eq!(copy, params);
    }
}

#[test]
fn efficiency_saturates_at_extreme_stokes() {
    let evaluator = PhysicsEvaluator::default();

    // Tiny droplet, slow stream, thick root: Stk → 0
    let low = evaluator
        .evaluate(&InputParameters {
            droplet_diameter_um: 0.01,
            mist_velocity_m_per_s: 1e-3,
            characteristic_length_mm: 1_000.0,
            ..InputParameters::default()
        })
        .unwrap();
    assert!(low.stokes_number < 1e-9);
    assert!(low.impaction_efficiency >= 0.0);
    assert!(low.impaction_efficiency < 1e-12);

    // Rain-sized droplet, fast stream, finest root: Stk huge
    let high = evaluator
        .evaluate(&InputParameters {
            droplet_diameter_um: 10_000.0,
            mist_velocity_m_per_s: 343.2,
            fluid_viscosity_pa_s: 1e-7,
            characteristic_length_mm: 1e-3,
            ..InputParameters::default()
        })
        .unwrap();
    assert!(high.stokes_number > 1e12);
    assert!(high.impaction_efficiency <= 1.0);
    assert!(high.impaction_efficiency > 0.999_999);
    assert!(high.absorption_rate_ml_per_min.is_finite());
}

#[test]
fn non_finite_inputs_rejected() {
    let evaluator = PhysicsEvaluator::default();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let params = InputParameters { mist_velocity_m_per_s: value, ..InputParameters::default() };
        let err = evaluator.evaluate(&params).unwrap_err();
        assert_eq!(err.field(), "mist_velocity_m_per_s");
    }
}

#[test]
fn efficiency_rises_across_calibrated_droplets() {
    let sweep = PhysicsEvaluator::default()
        .sweep(
            &InputParameters { mist_velocity_m_per_s: 0.1, characteristic_length_mm: 0.5, ..InputParameters::default() },
            SweepAxis::DropletDiameter,
            SweepRange::calibrated_droplets(),
        )
        .unwrap();

    let efficiencies: Vec<f64> = sweep.series(|q| q.impaction_efficiency).map(|(_, e)| e).collect();
    assert_eq!(efficiencies.len(), 100);
    assert!(efficiencies.windows(2).all(|w| w[1] >= w[0]));
}
