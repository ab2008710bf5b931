//! Human-readable summary of one evaluation
//!
//! Renders the summary panel that accompanies the charts: the two headline
//! inputs, the three headline outputs and the dimensionless groups, each to
//! four decimals. Implemented on `core::fmt::Display` so it works in
//! `no_std` builds through any `fmt::Write` sink.

use core::fmt;

use crate::{params::InputParameters, quantities::DerivedQuantities};

/// Inputs and outputs of one evaluation, ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<'a> {
    /// Parameters the evaluation ran with
    pub parameters: &'a InputParameters,
    /// Quantities it produced
    pub quantities: &'a DerivedQuantities,
}

impl<'a> Summary<'a> {
    /// Pair an evaluation's inputs with its outputs
    pub fn new(parameters: &'a InputParameters, quantities: &'a DerivedQuantities) -> Self {
        Self { parameters, quantities }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.parameters;
        let q = self.quantities;

        writeln!(f, "Absorption Summary:")?;
        writeln!(f)?;
        writeln!(f, "Droplet Size: {} µm", p.droplet_diameter_um)?;
        writeln!(f, "Nutrient Concentration: {} mg/L", p.nutrient_concentration_mg_per_l)?;
        writeln!(f)?;
        writeln!(f, "Absorption Rate: {:.4} ml/min", q.absorption_rate_ml_per_min)?;
        writeln!(f, "Efficiency: {:.4}", q.impaction_efficiency)?;
        writeln!(f, "Nutrients Absorbed: {:.4} mg/min", q.nutrients_absorbed_rate_mg_per_min)?;
        writeln!(f)?;
        writeln!(f, "Stokes Number: {:.4}", q.stokes_number)?;
        write!(f, "Reynolds Number: {:.4}", q.reynolds_number)
    }
}
