//! Buffer and Table Capacities
//!
//! These constants bound the crate's memory use. Everything is sized at
//! compile time; there is no heap anywhere in the core.

use super::time::{DAY_WINDOW_BUCKETS, LUX_FIFTEEN_MIN_BUCKETS};

// ===== AGGREGATION RINGS =====

/// Flow ring length: must cover the largest flow window (one day).
pub const FLOW_RING_BUCKETS: usize = DAY_WINDOW_BUCKETS;

/// Luminance ring length: next power of two above the 15-minute window,
/// so the ring's modulo compiles to a bit mask.
pub const LUX_RING_BUCKETS: usize = LUX_FIFTEEN_MIN_BUCKETS.next_power_of_two();

// ===== SNAPSHOT =====

/// Snapshot field table capacity (power of two, required by `FnvIndexMap`).
///
/// The built-in vocabulary has 19 fields; 32 leaves room for new names
/// without touching the renderer.
pub const MAX_SNAPSHOT_FIELDS: usize = 32;

/// Longest rendered field value, in bytes.
///
/// Must hold a full `u64` in base 10 (20 digits) and a MAC address
/// (17 characters).
pub const MAX_VALUE_LEN: usize = 24;

/// Longest stored device identity.
///
/// A colon-separated MAC address is 17 characters; the identity is also
/// rendered as a snapshot value, so this must not exceed [`MAX_VALUE_LEN`].
pub const MAX_IDENTITY_LEN: usize = 24;

// ===== TEMPLATES =====

/// Segment table capacity per parsed template.
///
/// The built-in documents parse to under 20 segments each.
pub const MAX_TEMPLATE_SEGMENTS: usize = 64;

/// Named templates per static registry.
pub const MAX_TEMPLATES: usize = 4;

// ===== ROUTING =====

/// Identity route table capacity.
///
/// Operators enumerate exact unit identities; a handful is plenty.
pub const MAX_ROUTES: usize = 8;
