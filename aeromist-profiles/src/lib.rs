//! Parameter Profiles for AeroMist
//!
//! ## Overview
//!
//! A profile is a named, described set of evaluation inputs stored as JSON:
//! the seven [`InputParameters`] plus, optionally, the [`EvaluatorConfig`]
//! constants the scenario assumes. Profiles let a grower keep "my fogger at
//! 25 °C" next to "the reference scenario" without recompiling anything.
//!
//! ```json
//! {
//!   "name": "reference_sample",
//!   "description": "50 µm droplets at 500 mg/L",
//!   "parameters": {
//!     "droplet_diameter_um": 50.0,
//!     "mist_velocity_m_per_s": 2.0
//!   }
//! }
//! ```
//!
//! Missing parameter fields fall back to the reference scenario; a missing
//! `config` block falls back to the documented default constants.
//!
//! ## Embedded Defaults
//!
//! Three profiles ship inside the binary and are loaded into
//! [`GLOBAL_REGISTRY`] on first use:
//!
//! | Name                | Scenario                                        |
//! |---------------------|-------------------------------------------------|
//! | `reference_sample`  | 50 µm, 500 mg/L, 2 m/s, 0.2 mm roots            |
//! | `notebook_defaults` | 35 µm, 0.1 m/s, 0.5 mm roots in 25 °C air       |
//! | `fine_fog`          | 10 µm ultrasonic fog, below the calibrated band |
//!
//! ## Validation
//!
//! Loading a profile enforces the same hard envelope as evaluation. The
//! softer questions ("is this inside the range the curve was fitted on?")
//! are answered by [`ProfileValidator`], which returns a
//! [`ValidationReport`] of errors and warnings instead of failing.
//!
//! ## Usage Example
//!
//! ```rust
//! use aeromist_profiles::{GLOBAL_REGISTRY, ProfileValidator};
//!
//! let profile = GLOBAL_REGISTRY.get("fine_fog")?;
//! let quantities = profile.evaluate()?;
//! assert!(quantities.impaction_efficiency < 0.1);
//!
//! let report = ProfileValidator::default().validate(&profile);
//! assert!(report.is_valid());
//! assert!(!report.warnings.is_empty());
//! # Ok::<(), aeromist_profiles::ProfileError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::{fs, path::Path};

use aeromist_core::{
    DerivedQuantities, EvaluationError, EvaluatorConfig, InputParameters, PhysicsEvaluator,
};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

pub mod registry;
pub mod validation;

pub use registry::{ProfileRegistry, GLOBAL_REGISTRY};
pub use validation::{IssueKind, ProfileValidator, Severity, ValidationIssue, ValidationReport};

static DEFAULT_PROFILES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/profiles");

/// Named evaluation scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Registry key, e.g. `"reference_sample"`
    pub name: String,

    /// Free-text description of the scenario
    #[serde(default)]
    pub description: String,

    /// Inputs to evaluate
    pub parameters: InputParameters,

    /// Assumed constants; defaults when omitted
    #[serde(default)]
    pub config: EvaluatorConfig,
}

impl Profile {
    /// Create a profile with the default constants
    pub fn new(name: impl Into<String>, parameters: InputParameters) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters,
            config: EvaluatorConfig::default(),
        }
    }

    /// Parse and validate a profile from JSON text
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Profile =
            serde_json::from_str(json).map_err(|e| ProfileError::Parse(e.to_string()))?;
        profile.check()?;
        Ok(profile)
    }

    /// Read, parse and validate a profile file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProfileError> {
        serde_json::to_string_pretty(self).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Hard envelope check of both parameters and constants
    pub fn check(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Parse("profile name is empty".to_string()));
        }
        self.config.validate()?;
        self.parameters.validate()?;
        Ok(())
    }

    /// Run the evaluator this profile describes
    pub fn evaluate(&self) -> Result<DerivedQuantities, ProfileError> {
        let evaluator = PhysicsEvaluator::new(self.config)?;
        Ok(evaluator.evaluate(&self.parameters)?)
    }
}

/// Parse every profile embedded at build time, sorted by name
pub fn default_profiles() -> Result<Vec<Profile>, ProfileError> {
    let mut profiles = DEFAULT_PROFILES
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "json"))
        .map(|file| {
            let text = file.contents_utf8().ok_or_else(|| {
                ProfileError::Parse(format!("{} is not UTF-8", file.path().display()))
            })?;
            Profile::from_json(text)
        })
        .collect::<Result<Vec<_>, _>>()?;

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

/// Profile-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum ProfileError {
    /// Malformed JSON or missing required field
    #[error("Failed to parse profile: {0}")]
    Parse(String),

    /// No profile registered under this name
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// A profile with this name is already registered
    #[error("Profile already registered: {0}")]
    Duplicate(String),

    /// Profile file could not be read
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// Parameters or constants outside their envelope
    #[error("Invalid profile: {0}")]
    Invalid(#[from] EvaluationError),
}
