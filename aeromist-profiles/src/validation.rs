//! Profile Validation
//!
//! Two tiers. Errors are the hard envelope that evaluation itself enforces;
//! a profile with errors cannot be evaluated. Warnings flag inputs that
//! evaluate fine but sit outside the conditions the impaction curve was
//! fitted for, so the numbers deserve less trust.

use aeromist_core::{
    constants::aeroponics::{
        CALIBRATED_DROPLET_MAX_UM, CALIBRATED_DROPLET_MIN_UM, IMPACTION_STOKES_THRESHOLD,
        LAMINAR_REYNOLDS_LIMIT,
    },
    EvaluationError, PhysicsEvaluator,
};

use crate::Profile;

/// Advisory checks applied on top of the hard envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileValidator {
    /// Droplet band the curve was calibrated on (µm, inclusive)
    pub calibrated_droplet_um: (f64, f64),

    /// Reynolds number above which the flow is no longer laminar-ish
    pub reynolds_limit: f64,

    /// Stokes number below which impaction is practically absent
    pub stokes_threshold: f64,
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self {
            calibrated_droplet_um: (CALIBRATED_DROPLET_MIN_UM, CALIBRATED_DROPLET_MAX_UM),
            reynolds_limit: LAMINAR_REYNOLDS_LIMIT,
            stokes_threshold: IMPACTION_STOKES_THRESHOLD,
        }
    }
}

impl ProfileValidator {
    /// Check a profile and collect every issue found
    pub fn validate(&self, profile: &Profile) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Err(e) = profile.config.validate() {
            report.add_error(from_evaluation_error(&e));
        }
        if let Err(e) = profile.parameters.validate() {
            report.add_error(from_evaluation_error(&e));
        }
        if !report.is_valid() {
            return report;
        }

        let d = profile.parameters.droplet_diameter_um;
        let (min_um, max_um) = self.calibrated_droplet_um;
        if d < min_um || d > max_um {
            report.add_warning(ValidationIssue {
                kind: IssueKind::Uncalibrated,
                field: Some("droplet_diameter_um".to_string()),
                message: format!(
                    "Droplet diameter {} µm outside calibrated band [{}, {}] µm",
                    d, min_um, max_um
                ),
                severity: Severity::Warning,
            });
        }

        let evaluated = PhysicsEvaluator::new(profile.config)
            .and_then(|evaluator| evaluator.evaluate(&profile.parameters));
        let quantities = match evaluated {
            Ok(q) => q,
            Err(e) => {
                report.add_error(from_evaluation_error(&e));
                return report;
            }
        };

        if quantities.reynolds_number > self.reynolds_limit {
            report.add_warning(ValidationIssue {
                kind: IssueKind::Turbulent,
                field: None,
                message: format!(
                    "Reynolds number {:.1} above {}; capture correlations assume laminar flow",
                    quantities.reynolds_number, self.reynolds_limit
                ),
                severity: Severity::Warning,
            });
        }

        if quantities.stokes_number < self.stokes_threshold {
            report.add_warning(ValidationIssue {
                kind: IssueKind::WeakImpaction,
                field: None,
                message: format!(
                    "Stokes number {:.4} below {}; droplets mostly follow the flow around roots",
                    quantities.stokes_number, self.stokes_threshold
                ),
                severity: Severity::Warning,
            });
        }

        report
    }
}

/// Validation report containing all issues found
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Issues that prevent evaluation
    pub errors: Vec<ValidationIssue>,

    /// Issues that weaken trust in the result
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// No errors (warnings allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Worst severity present, if any
    pub fn max_severity(&self) -> Option<Severity> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .map(|issue| issue.severity)
            .max()
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Type of issue
    pub kind: IssueKind,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Value outside its physical envelope
    OutOfEnvelope,

    /// Droplet size outside the calibrated band
    Uncalibrated,

    /// Carrier flow beyond the laminar regime
    Turbulent,

    /// Droplets too light to impact
    WeakImpaction,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

/// Convert an evaluation error to a validation issue
pub fn from_evaluation_error(error: &EvaluationError) -> ValidationIssue {
    ValidationIssue {
        kind: IssueKind::OutOfEnvelope,
        field: Some(error.field().to_string()),
        message: error.to_string(),
        severity: Severity::Error,
    }
}
