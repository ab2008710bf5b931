//! Error Handling Example
//!
//! Shows how out-of-envelope inputs are reported: which field, which value,
//! and the interval it had to lie in. The caller fixes the input and
//! re-invokes; there is nothing to retry.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_error_handling
//! ```

use aeromist_core::{EvaluationError, InputParameters, PhysicsEvaluator};

fn main() {
    println!("AeroMist Error Handling Example");
    println!("===============================\n");

    let evaluator = PhysicsEvaluator::default();
    let base = InputParameters::default();

    let cases = [
        ("Zero root diameter", InputParameters { characteristic_length_mm: 0.0, ..base }),
        ("Negative droplet", InputParameters { droplet_diameter_um: -5.0, ..base }),
        ("Inviscid carrier", InputParameters { fluid_viscosity_pa_s: 0.0, ..base }),
        ("Supersonic mist", InputParameters { mist_velocity_m_per_s: 400.0, ..base }),
        ("NaN concentration", InputParameters { nutrient_concentration_mg_per_l: f64::NAN, ..base }),
        ("Valid input", base),
    ];

    for (description, params) in &cases {
        print!("{:.<40} ", description);

        match evaluator.evaluate(params) {
            Ok(q) => println!("✓ {:.4} ml/min", q.absorption_rate_ml_per_min),
            Err(e) => {
                println!("✗ {}", e.field());
                println!("    Reason: {}", format_error(&e));
            }
        }
    }
}

fn format_error(error: &EvaluationError) -> String {
    match error {
        EvaluationError::InvalidParameter { value, min, max, .. } if value.is_nan() => {
            format!("not a number (allowed [{}, {}])", min, max)
        }
        EvaluationError::InvalidParameter { value, min, max, .. } => {
            format!("{} not in [{}, {}]", value, min, max)
        }
    }
}
