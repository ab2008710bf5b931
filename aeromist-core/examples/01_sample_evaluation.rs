//! Sample Evaluation Example
//!
//! The simplest use of AeroMist: evaluate the reference scenario and print
//! the summary panel plus the per-mechanism capture breakdown.
//!
//! ## What You'll Learn
//!
//! - Building `InputParameters` from the defaults
//! - Evaluating the formula chain
//! - Reading the capture breakdown behind the headline efficiency
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_sample_evaluation
//! ```

use aeromist_core::{InputParameters, PhysicsEvaluator, Summary};

fn main() -> Result<(), aeromist_core::EvaluationError> {
    println!("AeroMist Sample Evaluation");
    println!("==========================\n");

    let evaluator = PhysicsEvaluator::default();
    let config = evaluator.config();

    println!("Assumed constants:");
    println!("  Droplet density:     {} kg/m³", config.droplet_density_kg_per_m3);
    println!("  Droplet number:      {:e} /m³", config.droplet_number_density_per_m3);
    println!("  Exposed root length: {} m", config.exposed_root_length_m);
    println!(
        "  Impaction curve:     η = 1 / (1 + {} / Stk^{})",
        config.impaction.coefficient, config.impaction.exponent
    );
    println!();

    // Reference scenario, then the notebook's 35 µm run in 25°C air
    let scenarios = [
        ("Reference scenario", InputParameters::default()),
        (
            "Notebook defaults",
            InputParameters {
                droplet_diameter_um: 35.0,
                mist_velocity_m_per_s: 0.1,
                fluid_density_kg_per_m3: 1.184,
                characteristic_length_mm: 0.5,
                ..InputParameters::default()
            }
            .with_air_temperature(25.0),
        ),
    ];

    for (name, params) in &scenarios {
        let quantities = evaluator.evaluate(params)?;

        println!("--- {} ---\n", name);
        println!("{}\n", Summary::new(params, &quantities));

        println!("Efficiency components:");
        for (label, efficiency) in quantities.capture.components() {
            println!("  {:<14} {:>8.4} {}", label, efficiency, bar(efficiency));
        }
        println!(
            "  Retention:     bounce {:.2} × concentration {:.2} × film {:.2} = {:.4}",
            quantities.capture.bounce_factor,
            quantities.capture.concentration_factor,
            quantities.capture.film_factor,
            quantities.capture.retention()
        );
        println!("  Retained efficiency: {:.4}\n", quantities.capture.retained_efficiency);
    }

    Ok(())
}

fn bar(value: f64) -> String {
    "#".repeat((value.clamp(0.0, 1.0) * 40.0).round() as usize)
}
