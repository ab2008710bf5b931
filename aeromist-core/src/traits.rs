//! Core traits for capture mechanisms
//!
//! Every way a droplet can end up on a root (inertial impaction, direct
//! interception, gravitational settling) implements [`CaptureMechanism`].
//! Keep them simple - each one is a closed-form function of a few
//! dimensionless groups.

/// Dimensionless groups a capture mechanism may need
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureContext {
    /// Droplet Stokes number based on the characteristic length
    pub stokes_number: f64,

    /// Interception ratio R = droplet diameter / characteristic length
    pub interception_ratio: f64,

    /// Terminal settling velocity of the droplet (m/s)
    pub settling_velocity_m_per_s: f64,

    /// Mist stream velocity (m/s)
    pub mist_velocity_m_per_s: f64,
}

/// Single-collector capture mechanism
pub trait CaptureMechanism {
    /// Short label for reports and charts
    fn label(&self) -> &'static str;

    /// Fraction of droplets in the swept volume captured by this mechanism.
    ///
    /// Must be finite, non-negative and monotone in the mechanism's driving
    /// group. Implementations clamp to `[0, 1]`.
    fn efficiency(&self, context: &CaptureContext) -> f64;
}
