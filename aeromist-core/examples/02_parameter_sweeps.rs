//! Parameter Sweep Example
//!
//! Produces the two chart series of the notebook: droplet size against
//! absorption efficiency, and nutrient concentration against absorption
//! rate. Output is CSV on stdout so it can be piped straight into a plotting
//! tool.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_parameter_sweeps > sweeps.csv
//! ```

use aeromist_core::{InputParameters, PhysicsEvaluator, SweepAxis, SweepRange};

fn main() -> Result<(), aeromist_core::EvaluationError> {
    let evaluator = PhysicsEvaluator::default();
    let base = InputParameters {
        droplet_diameter_um: 35.0,
        mist_velocity_m_per_s: 0.1,
        characteristic_length_mm: 0.5,
        ..InputParameters::default()
    };

    let droplets = evaluator.sweep(
        &base,
        SweepAxis::DropletDiameter,
        SweepRange::calibrated_droplets(),
    )?;
    println!("axis,value,impaction_efficiency,retained_efficiency");
    for point in droplets.points() {
        println!(
            "droplet_um,{:.3},{:.6},{:.6}",
            point.value,
            point.quantities.impaction_efficiency,
            point.quantities.capture.retained_efficiency
        );
    }

    let concentrations = evaluator.sweep(
        &base,
        SweepAxis::NutrientConcentration,
        SweepRange::notebook_concentrations(),
    )?;
    println!("axis,value,absorption_rate_ml_per_min,nutrients_mg_per_min");
    for point in concentrations.points() {
        println!(
            "concentration_mg_per_l,{:.1},{:.6},{:.6}",
            point.value,
            point.quantities.absorption_rate_ml_per_min,
            point.quantities.nutrients_absorbed_rate_mg_per_min
        );
    }

    if let Some(best) = droplets.peak_by(|q| q.capture.retained_efficiency) {
        eprintln!(
            "Best retained efficiency {:.4} at {:.1} {}",
            best.quantities.capture.retained_efficiency,
            best.value,
            droplets.axis().unit()
        );
    }

    Ok(())
}
