//! Envelope validation for inputs and assumed constants

use crate::{
    constants::limits::*,
    errors::EvaluationResult,
    evaluator::EvaluatorConfig,
    params::InputParameters,
};

use super::utils::{self, FieldBounds};

/// Envelope of each [`InputParameters`] field, in declaration order
pub const INPUT_BOUNDS: [FieldBounds; 7] = [
    FieldBounds::new("droplet_diameter_um", 0.0, DROPLET_DIAMETER_MAX_UM),
    FieldBounds::new("nutrient_concentration_mg_per_l", 0.0, NUTRIENT_CONCENTRATION_MAX_MG_PER_L),
    FieldBounds::new("mist_velocity_m_per_s", 0.0, MIST_VELOCITY_MAX_M_PER_S),
    FieldBounds::new("fluid_density_kg_per_m3", 0.0, FLUID_DENSITY_MAX_KG_PER_M3),
    FieldBounds::new("fluid_viscosity_pa_s", FLUID_VISCOSITY_MIN_PA_S, FLUID_VISCOSITY_MAX_PA_S),
    FieldBounds::new(
        "characteristic_length_mm",
        CHARACTERISTIC_LENGTH_MIN_MM,
        CHARACTERISTIC_LENGTH_MAX_MM,
    ),
    FieldBounds::new("exposure_time_s", 0.0, EXPOSURE_TIME_MAX_S),
];

/// Envelope of each [`EvaluatorConfig`] constant, in declaration order
pub const CONFIG_BOUNDS: [FieldBounds; 5] = [
    FieldBounds::new("droplet_density_kg_per_m3", STRICTLY_POSITIVE_MIN, DROPLET_DENSITY_MAX_KG_PER_M3),
    FieldBounds::new(
        "droplet_number_density_per_m3",
        STRICTLY_POSITIVE_MIN,
        DROPLET_NUMBER_DENSITY_MAX_PER_M3,
    ),
    FieldBounds::new("exposed_root_length_m", STRICTLY_POSITIVE_MIN, EXPOSED_ROOT_LENGTH_MAX_M),
    FieldBounds::new("impaction.coefficient", STRICTLY_POSITIVE_MIN, IMPACTION_COEFFICIENT_MAX),
    FieldBounds::new("impaction.exponent", STRICTLY_POSITIVE_MIN, IMPACTION_EXPONENT_MAX),
];

/// Validate every input field, reporting the first offender
pub fn validate_inputs(params: &InputParameters) -> EvaluationResult<()> {
    utils::check_all(&params.values(), &INPUT_BOUNDS)
}

/// Validate every assumed constant, reporting the first offender
pub fn validate_config(config: &EvaluatorConfig) -> EvaluationResult<()> {
    utils::check_all(&config.values(), &CONFIG_BOUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluationError;

    #[test]
    fn zero_characteristic_length_rejected() {
        let params = InputParameters {
            characteristic_length_mm: 0.0,
            ..InputParameters::default()
        };
        let err = validate_inputs(&params).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvalidParameter {
                field: "characteristic_length_mm",
                value: 0.0,
                min: CHARACTERISTIC_LENGTH_MIN_MM,
                max: CHARACTERISTIC_LENGTH_MAX_MM,
            }
        );
    }

    #[test]
    fn zero_viscosity_rejected() {
        let params = InputParameters {
            fluid_viscosity_pa_s: 0.0,
            ..InputParameters::default()
        };
        assert_eq!(validate_inputs(&params).unwrap_err().field(), "fluid_viscosity_pa_s");
    }

    #[test]
    fn zero_velocity_accepted() {
        let params = InputParameters {
            mist_velocity_m_per_s: 0.0,
            ..InputParameters::default()
        };
        assert!(validate_inputs(&params).is_ok());
    }

    #[test]
    fn infinite_concentration_rejected() {
        let params = InputParameters {
            nutrient_concentration_mg_per_l: f64::INFINITY,
            ..InputParameters::default()
        };
        assert_eq!(
            validate_inputs(&params).unwrap_err().field(),
            "nutrient_concentration_mg_per_l"
        );
    }

    #[test]
    fn declaration_order_decides_reported_field() {
        let params = InputParameters {
            droplet_diameter_um: -1.0,
            exposure_time_s: -1.0,
            ..InputParameters::default()
        };
        assert_eq!(validate_inputs(&params).unwrap_err().field(), "droplet_diameter_um");
    }

    #[test]
    fn default_config_valid() {
        assert!(validate_config(&EvaluatorConfig::default()).is_ok());
    }

    #[test]
    fn zero_droplet_density_rejected() {
        let config = EvaluatorConfig {
            droplet_density_kg_per_m3: 0.0,
            ..EvaluatorConfig::default()
        };
        assert_eq!(validate_config(&config).unwrap_err().field(), "droplet_density_kg_per_m3");
    }
}
