/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Over-fetch multiplier for vector candidates: the retrieval engine asks the
/// index for `max(limit * CANDIDATE_MULTIPLIER, CANDIDATE_FLOOR)` candidates
/// so the fusion step has enough material. Fixed design constant, not
/// user-tunable, to bound tail latency.
pub const CANDIDATE_MULTIPLIER: usize = 4;

/// Minimum number of vector candidates fetched regardless of `limit`.
pub const CANDIDATE_FLOOR: usize = 40;

/// Maximum snapshots retained in the snapshot log (ring buffer behavior).
pub const MAX_SNAPSHOT_LOG: usize = 50_000;

/// Floor for the MAD scale so a constant baseline still produces finite
/// anomaly scores.
pub const MIN_MAD_SCALE: f64 = 1e-9;

/// Consistency constant relating MAD to the standard deviation of a normal
/// distribution.
pub const MAD_CONSISTENCY: f64 = 1.4826;
