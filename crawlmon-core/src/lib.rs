//! Telemetry core for the crawlmon environmental monitoring node
//!
//! Turns raw sensor counters (water-flow pulses, luminance, temperature,
//! humidity, door and motion state) into time-windowed statistics, renders
//! them into small fixed-shape text documents, and decides which publish
//! target a unit's telemetry belongs to.
//!
//! Key constraints:
//! - No heap allocation anywhere; memory is bounded by ring sizes
//! - Sampling and rendering may run from independent contexts
//! - Transport, GPIO reads, and Wi-Fi live outside this crate
//!
//! ```
//! use crawlmon_core::{TelemetryNode, Template};
//!
//! let mut node = TelemetryNode::new();
//! node.record_flow(3, 0).unwrap();
//! node.set_door(true);
//!
//! let snapshot = node.snapshot(60_000).unwrap();
//! let template = Template::parse("door is %DOOR%").unwrap();
//!
//! let mut out = heapless::String::<64>::new();
//! template.render(&snapshot, &mut out).unwrap();
//! assert_eq!(out.as_str(), "door is open");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging - expands to nothing without the `log` feature.
// The core never logs on its error path; this is for rare anomalies only.
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

pub mod aggregate;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod node;
pub mod ring;
pub mod route;
pub mod snapshot;
pub mod template;
pub mod time;

// Public API
pub use errors::{TelemetryError, TelemetryResult};
pub use node::{TelemetryCell, TelemetryNode};
pub use ring::{Bucket, BucketRing, LevelBucket, PulseBucket};
pub use route::{PublishTarget, RouteTable, TopicTable};
pub use snapshot::Snapshot;
pub use template::{StaticTemplates, Template, TemplateSource};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
