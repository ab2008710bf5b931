//! Aeroponic Root-Zone Constants
//!
//! Geometry of the root zone, mist loading of the chamber and the empirical
//! thresholds of the capture model. These are the "assumed constants" of the
//! evaluator; all of them can be overridden through
//! [`EvaluatorConfig`](crate::EvaluatorConfig).

// ===== MIST LOADING =====

/// Droplet number density in the mist chamber (droplets/m³).
///
/// 5e8 m⁻³ = 500 droplets/cm³, typical of ultrasonic and high-pressure
/// foggers running at a few percent duty cycle.
///
/// Source: original aeroponic notebook model
pub const MIST_DROPLET_NUMBER_DENSITY_PER_M3: f64 = 5e8;

// ===== ROOT ZONE =====

/// Length of one exposed root segment (m).
pub const ROOT_SEGMENT_LENGTH_M: f64 = 0.01;

/// Number of exposed root segments in the chamber.
pub const ROOT_SEGMENT_COUNT: f64 = 1000.0;

/// Total exposed root length (m).
///
/// Reference flux area = characteristic length × this length, i.e. the
/// frontal area the root mass presents to the mist stream.
pub const EXPOSED_ROOT_LENGTH_M: f64 = ROOT_SEGMENT_LENGTH_M * ROOT_SEGMENT_COUNT;

// ===== IMPACTION CURVE =====

/// Coefficient `a` of the saturating impaction curve η = 1 / (1 + a / Stkⁿ).
///
/// With n = 2 this is η = Stk² / (Stk² + 0.25): half the droplets impact at
/// Stk = 0.5, matching the classical inertial-impaction transition on
/// cylinders.
///
/// Source: original aeroponic notebook model
pub const IMPACTION_CURVE_COEFFICIENT: f64 = 0.25;

/// Exponent `n` of the saturating impaction curve.
pub const IMPACTION_CURVE_EXPONENT: f64 = 2.0;

/// Stokes number below which the notebook treated impaction as absent.
///
/// Used for advisories only; the curve itself is continuous.
pub const IMPACTION_STOKES_THRESHOLD: f64 = 0.1;

// ===== INTERCEPTION =====

/// Interception coefficient: η_R = 0.6 · R² / (1 + R), R = d / L.
///
/// Source: original aeroponic notebook model
pub const INTERCEPTION_COEFFICIENT: f64 = 0.6;

// ===== RETENTION FACTORS =====

/// Droplets smaller than this bounce off or re-entrain (µm).
pub const BOUNCE_THRESHOLD_UM: f64 = 30.0;

/// Retention loss per micrometre below the bounce threshold (1/µm).
pub const BOUNCE_LOSS_PER_UM: f64 = 0.01;

/// Above this concentration the solution viscosity reduces uptake (mg/L).
pub const HIGH_CONCENTRATION_THRESHOLD_MG_PER_L: f64 = 1000.0;

/// Uptake multiplier applied above the high-concentration threshold.
pub const HIGH_CONCENTRATION_FACTOR: f64 = 0.9;

/// Droplets larger than this coalesce into a surface film (µm).
pub const FILM_DROPLET_THRESHOLD_UM: f64 = 40.0;

/// Film saturation time for a 50 µm droplet (s).
///
/// Saturation time grows by one second per micrometre below 50 µm.
pub const FILM_BASE_SATURATION_TIME_S: f64 = 30.0;

/// Reference droplet diameter of the film saturation time (µm).
pub const FILM_REFERENCE_DIAMETER_UM: f64 = 50.0;

/// Maximum uptake loss once a film has fully formed.
pub const FILM_MAX_LOSS: f64 = 0.3;

// ===== CALIBRATION BAND =====

/// Smallest droplet diameter the capture model was calibrated on (µm).
pub const CALIBRATED_DROPLET_MIN_UM: f64 = 20.0;

/// Largest droplet diameter the capture model was calibrated on (µm).
pub const CALIBRATED_DROPLET_MAX_UM: f64 = 50.0;

/// Reynolds number above which the root-zone flow stops being laminar-ish.
///
/// Capture correlations for cylinders are fitted below this.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 1000.0;

// ===== SWEEP PRESETS =====

/// Lower end of the notebook's concentration sweep (mg/L).
pub const SWEEP_CONCENTRATION_MIN_MG_PER_L: f64 = 100.0;

/// Upper end of the notebook's concentration sweep (mg/L).
pub const SWEEP_CONCENTRATION_MAX_MG_PER_L: f64 = 2000.0;
