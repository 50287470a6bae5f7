//! Error Types for the Telemetry Core
//!
//! Errors here follow the rules of the device this crate runs on:
//!
//! 1. **Small and Copy**: every variant is a few machine words so errors can
//!    be returned from hot sampling paths and stored without allocation.
//!
//! 2. **No Heap**: no `String`, no boxing. Context is inline numeric data.
//!
//! 3. **Propagation only**: the core never retries and never logs on an error
//!    path. It hands the caller a named failure and the transport layer
//!    decides whether to re-sample, skip a publish, or serve a stale value.
//!
//! Nothing in this crate is fatal. The worst outcome of any error is a stale
//! or unavailable-marked value in a rendered document.

use thiserror_no_std::Error;

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Telemetry errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryError {
    /// Sample timestamp precedes the aggregator's last-seen time.
    ///
    /// Out-of-order samples are rejected, not reordered; counter state is
    /// left untouched.
    #[error("sample at {now}ms precedes last seen {last}ms")]
    NonMonotonicTime {
        /// Last timestamp the aggregator accepted
        last: u64,
        /// The rejected timestamp
        now: u64,
    },

    /// Reading is not a finite number (NaN or infinity)
    #[error("reading is not a finite number")]
    InvalidValue,

    /// Single-field lookup of a name absent from the snapshot
    #[error("field not present in snapshot")]
    UnknownField,

    /// Snapshot capacity exceeded (field table full or value too long)
    #[error("snapshot capacity exceeded")]
    SnapshotFull,

    /// Template has more fragments than the segment table can hold
    #[error("template exceeds segment capacity")]
    TemplateOverflow,

    /// Identity route table is at capacity
    #[error("route table full")]
    RouteTableFull,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonMonotonicTime { last, now } =>
                defmt::write!(fmt, "sample at {}ms precedes {}ms", now, last),
            Self::InvalidValue =>
                defmt::write!(fmt, "non-finite reading"),
            Self::UnknownField =>
                defmt::write!(fmt, "unknown field"),
            Self::SnapshotFull =>
                defmt::write!(fmt, "snapshot full"),
            Self::TemplateOverflow =>
                defmt::write!(fmt, "template overflow"),
            Self::RouteTableFull =>
                defmt::write!(fmt, "route table full"),
        }
    }
}
