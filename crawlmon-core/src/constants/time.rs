//! Time-Related Constants
//!
//! Bucket granularity is the single tunable trading memory for resolution.
//! Every window is expressed as a count of these buckets, so one ring
//! mechanism serves all window sizes and no counter needs its own decay
//! logic.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

// ===== BUCKET GRANULARITY =====

/// Width of one aggregation bucket (milliseconds).
///
/// One minute: fine enough for the per-minute flow statistic, coarse enough
/// that a full day of buckets fits in a few kilobytes.
pub const BUCKET_WIDTH_MS: u64 = MS_PER_MINUTE;

// ===== FLOW WINDOWS =====

/// Per-minute flow total: one bucket.
pub const MINUTE_WINDOW_BUCKETS: usize = 1;

/// Per-hour flow total: 60 one-minute buckets.
pub const HOUR_WINDOW_BUCKETS: usize = 60;

/// Per-day flow total: 1440 one-minute buckets.
pub const DAY_WINDOW_BUCKETS: usize = 1440;

// ===== LUMINANCE WINDOWS =====

/// Rolling one-minute luminance extrema.
pub const LUX_ONE_MIN_BUCKETS: usize = 1;

/// Rolling five-minute luminance extrema.
pub const LUX_FIVE_MIN_BUCKETS: usize = 5;

/// Rolling fifteen-minute luminance extrema.
pub const LUX_FIFTEEN_MIN_BUCKETS: usize = 15;
