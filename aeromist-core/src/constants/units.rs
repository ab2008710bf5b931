//! Unit conversions between display units and SI.

/// Micrometres to metres.
pub const M_PER_UM: f64 = 1e-6;

/// Millimetres to metres.
pub const M_PER_MM: f64 = 1e-3;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Millilitres per cubic metre.
pub const ML_PER_M3: f64 = 1e6;

/// Cubic metres per second to millilitres per minute.
pub const M3_PER_S_TO_ML_PER_MIN: f64 = ML_PER_M3 * SECONDS_PER_MINUTE;

/// Millilitres per litre.
///
/// ml/min × mg/L ÷ this = mg/min.
pub const ML_PER_L: f64 = 1000.0;
