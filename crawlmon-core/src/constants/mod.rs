//! Constants for the crawlmon telemetry core
//!
//! All tunables live here rather than as magic numbers at the use site.
//! Grouped by domain:
//! - **Time**: bucket width and window sizes
//! - **Buffers**: ring and table capacities (these bound crate memory)
//! - **Sensors**: hardware calibration values
//! - **Fields**: the placeholder vocabulary and fixed document literals

/// Bucket width and window lengths for the rolling aggregators.
pub mod time;

/// Ring, string, and table capacities.
pub mod buffers;

/// Hardware calibration values.
pub mod sensors;

/// Placeholder names and fixed rendering literals.
pub mod fields;

// Re-export commonly used constants for convenience
pub use time::{
    BUCKET_WIDTH_MS, MINUTE_WINDOW_BUCKETS, HOUR_WINDOW_BUCKETS, DAY_WINDOW_BUCKETS,
    LUX_ONE_MIN_BUCKETS, LUX_FIVE_MIN_BUCKETS, LUX_FIFTEEN_MIN_BUCKETS,
};

pub use buffers::{
    FLOW_RING_BUCKETS, LUX_RING_BUCKETS, MAX_SNAPSHOT_FIELDS,
    MAX_VALUE_LEN, MAX_TEMPLATE_SEGMENTS, MAX_ROUTES,
};

pub use fields::UNAVAILABLE;
