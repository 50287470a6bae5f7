//! Placeholder Vocabulary and Document Literals
//!
//! Field names are case-sensitive and must match the serving documents
//! exactly. The renderer is vocabulary-agnostic: adding a field means adding
//! one projection line in the node glue, nothing else.

// ===== FIELD NAMES =====

/// Door state.
pub const DOOR: &str = "DOOR";

/// Latest luminance sample (lux).
pub const LUMINANCE: &str = "LUMINANCE";

/// Cumulative water volume since boot (litres).
pub const WATERFLOW: &str = "WATERFLOW";

/// Raw cumulative flow pulse count since boot.
pub const FLOWPULSES: &str = "FLOWPULSES";

/// Flow pulses in the current minute bucket.
pub const FLOWMINUTE: &str = "FLOWMINUTE";

/// Flow pulses over the last hour.
pub const FLOWHOUR: &str = "FLOWHOUR";

/// Flow pulses over the last day.
pub const FLOWDAY: &str = "FLOWDAY";

/// Latest temperature reading.
pub const TEMPERATURE: &str = "TEMPERATURE";

/// Latest relative humidity reading.
pub const HUMIDITY: &str = "HUMIDITY";

/// Motion detector state.
pub const MOTION: &str = "MOTION";

/// Seconds since boot.
pub const UPTIME: &str = "UPTIME";

/// Milliseconds since boot.
pub const MILLIS: &str = "MILLIS";

/// Device hardware identity.
pub const MACADDR: &str = "MACADDR";

/// Luminance maximum over the last minute.
pub const LUXHIGHONEMIN: &str = "LUXHIGHONEMIN";

/// Luminance maximum over the last five minutes.
pub const LUXHIGHFIVEMIN: &str = "LUXHIGHFIVEMIN";

/// Luminance maximum over the last fifteen minutes.
pub const LUXHIGHFIFTEENMIN: &str = "LUXHIGHFIFTEENMIN";

/// Luminance minimum over the last minute.
pub const LUXLOWONEMIN: &str = "LUXLOWONEMIN";

/// Luminance minimum over the last five minutes.
pub const LUXLOWFIVEMIN: &str = "LUXLOWFIVEMIN";

/// Luminance minimum over the last fifteen minutes.
pub const LUXLOWFIFTEENMIN: &str = "LUXLOWFIFTEENMIN";

// ===== FIXED LITERALS =====

/// Rendered in place of a threshold reading that has never been observed.
///
/// A literal, not a numeric sentinel: callers must not mistake "no data yet"
/// for a real zero-lux reading. The serving web page uses the same dash as
/// its own fetch-failure fallback.
pub const UNAVAILABLE: &str = "-";

/// Door open literal.
pub const DOOR_OPEN: &str = "open";

/// Door closed literal.
pub const DOOR_CLOSED: &str = "closed";

/// Motion detected literal.
pub const MOTION_DETECTED: &str = "detected";

/// No-motion literal.
pub const MOTION_CLEAR: &str = "clear";
