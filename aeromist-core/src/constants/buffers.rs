//! Buffer Sizes
//!
//! Sweeps are stored in `heapless::Vec` so the core never allocates. Each
//! point holds one full set of derived quantities (~120 bytes), so the
//! maximum sweep costs about 15 KB of stack or static memory.

/// Maximum number of points in one parameter sweep.
///
/// Memory: 128 × size_of::<SweepPoint>() ≈ 15 KB
pub const SWEEP_MAX_POINTS: usize = 128;

/// Default number of points per sweep.
///
/// Enough for a smooth line chart at typical figure widths.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Fewest points a sweep can have (both endpoints).
pub const SWEEP_MIN_POINTS: usize = 2;
