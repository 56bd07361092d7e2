//! Shared primitive types used across the entire simulation.

/// A simulation quarter. Quarter 0 is the seeded initial state;
/// quarters 1..=TOTAL_QUARTERS are produced by decision transitions.
pub type Quarter = u32;

/// The canonical run identifier.
pub type RunId = String;

/// A full run is exactly this many post-initial quarters.
pub const TOTAL_QUARTERS: Quarter = 8;
