//! Integration tests for documented scenarios
//!
//! Pins the figures the crate publishes for its reference inputs so that a
//! change of constant or formula shows up as a failing test, not a silent
//! shift in every downstream chart.

use aeromist_core::{
    constants::{aeroponics::EXPOSED_ROOT_LENGTH_M, physics::WATER_DENSITY_20C_KG_PER_M3},
    EvaluatorConfig, ImpactionCurve, InputParameters, PhysicsEvaluator, Summary,
};

fn assert_close(actual: f64, expected: f64, rel: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= rel * expected.abs(),
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn reference_scenario_figures() {
    // 50 µm, 500 mg/L, 2 m/s, 1.2 kg/m³, 1.8e-5 Pa·s, 0.2 mm
    let params = InputParameters::default();
    let q = PhysicsEvaluator::default().evaluate(&params).unwrap();

    assert_close(q.reynolds_number, 26.6667, 1e-4, "Reynolds number");
    assert_close(q.stokes_number, 77.0062, 1e-4, "Stokes number");
    assert_close(q.impaction_efficiency, 0.99996, 1e-4, "impaction efficiency");
    assert_close(q.absorption_rate_ml_per_min, 7.8537, 1e-4, "absorption rate");
    assert_close(q.nutrients_absorbed_rate_mg_per_min, 3.9268, 1e-4, "nutrients absorbed");
}

#[test]
fn nutrient_rate_is_volume_rate_times_concentration() {
    // ml/min × mg/L = µg/min; the mass rate is reported in mg/min
    for concentration in [100.0, 500.0, 1_500.0] {
        let params = InputParameters {
            nutrient_concentration_mg_per_l: concentration,
            ..InputParameters::default()
        };
        let q = PhysicsEvaluator::default().evaluate(&params).unwrap();
        assert_close(
            q.nutrients_absorbed_rate_mg_per_min * 1_000.0,
            q.absorption_rate_ml_per_min * concentration,
            1e-12,
            "µg/min",
        );
    }
}

#[test]
fn documented_default_constants() {
    let config = EvaluatorConfig::default();
    assert_eq!(config.droplet_density_kg_per_m3, WATER_DENSITY_20C_KG_PER_M3);
    assert_eq!(config.droplet_number_density_per_m3, 5e8);
    assert_eq!(config.exposed_root_length_m, EXPOSED_ROOT_LENGTH_M);
    assert_eq!(config.impaction, ImpactionCurve { coefficient: 0.25, exponent: 2.0 });
}

#[test]
fn steeper_curve_changes_only_capture() {
    let steep = PhysicsEvaluator::new(EvaluatorConfig {
        impaction: ImpactionCurve { coefficient: 0.25, exponent: 4.0 },
        ..EvaluatorConfig::default()
    })
    .unwrap();

    let params = InputParameters {
        droplet_diameter_um: 25.0,
        mist_velocity_m_per_s: 0.1,
        characteristic_length_mm: 0.5,
        ..InputParameters::default()
    };
    let default_q = PhysicsEvaluator::default().evaluate(&params).unwrap();
    let steep_q = steep.evaluate(&params).unwrap();

    assert_eq!(default_q.stokes_number, steep_q.stokes_number);
    assert_eq!(default_q.reynolds_number, steep_q.reynolds_number);
    // Stk ≈ 0.39 < 0.5: a steeper curve captures less below the midpoint
    assert!(steep_q.impaction_efficiency < default_q.impaction_efficiency);
}

#[test]
fn summary_renders_reference_scenario() {
    let params = InputParameters::default();
    let q = PhysicsEvaluator::default().evaluate(&params).unwrap();
    let text = Summary::new(&params, &q).to_string();

    assert_eq!(text.lines().count(), 11);
    assert!(text.contains("Absorption Rate: 7.8537 ml/min"));
}
