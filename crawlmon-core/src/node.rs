//! Device State and Snapshot Projection
//!
//! [`TelemetryNode`] owns everything the node knows: the rolling flow and
//! luminance aggregators, the latest instantaneous readings, the boolean
//! door/motion states, and the hardware identity. Its writer operations are
//! the inbound edge of the core - the sampling loop pushes raw readings in,
//! and [`TelemetryNode::snapshot`] projects the whole state into the fixed
//! placeholder vocabulary for the renderer.
//!
//! ## Concurrency
//!
//! Sampling runs from a periodic timer, rendering from inbound requests.
//! Bucket mutation does not commute with eviction, so writers must be
//! serialized, and a renderer must never observe a half-updated state.
//! [`TelemetryCell`] wraps the node in a `critical-section` mutex: every
//! writer call and every snapshot build runs inside one short critical
//! section (bounded by the ring walk), which is exactly the single-writer /
//! coherent-reader discipline the device needs. On `std` builds the crate
//! enables `critical-section/std`, so host tests use the same type.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::String;

use crate::aggregate::{FlowWindow, LevelAggregator, LuxWindow, PulseAggregator};
use crate::constants::buffers::{FLOW_RING_BUCKETS, LUX_RING_BUCKETS, MAX_IDENTITY_LEN};
use crate::constants::fields;
use crate::constants::sensors::PULSES_PER_LITRE;
use crate::constants::time::{BUCKET_WIDTH_MS, MS_PER_SECOND};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::snapshot::Snapshot;
use crate::time::Timestamp;

/// All mutable state of the monitoring node
pub struct TelemetryNode {
    flow: PulseAggregator<FLOW_RING_BUCKETS>,
    lux: LevelAggregator<LUX_RING_BUCKETS>,
    temperature: Option<f32>,
    humidity: Option<f32>,
    luminance: Option<f32>,
    door_open: bool,
    motion: bool,
    identity: String<MAX_IDENTITY_LEN>,
}

impl TelemetryNode {
    /// Create a node with empty aggregators and no readings yet
    ///
    /// Const so the node can live in a `static` behind a [`TelemetryCell`].
    pub const fn new() -> Self {
        Self {
            flow: PulseAggregator::new(BUCKET_WIDTH_MS),
            lux: LevelAggregator::new(BUCKET_WIDTH_MS),
            temperature: None,
            humidity: None,
            luminance: None,
            door_open: false,
            motion: false,
            identity: String::new(),
        }
    }

    /// Roll both aggregator windows forward to `now`
    ///
    /// Implicit on every record and snapshot, so windows reflect wall-clock
    /// time even when a sensor goes silent. Both rings see the same sample
    /// stream, so they can never disagree on the last-seen timestamp.
    pub fn advance_to(&mut self, now: Timestamp) -> TelemetryResult<()> {
        self.flow.advance_to(now)?;
        self.lux.advance_to(now)
    }

    /// Add flow-meter pulses observed at `now`
    pub fn record_flow(&mut self, delta: u32, now: Timestamp) -> TelemetryResult<()> {
        self.advance_to(now)?;
        self.flow.record(delta, now)
    }

    /// Record a luminance sample at `now`
    pub fn record_luminance(&mut self, lux: f32, now: Timestamp) -> TelemetryResult<()> {
        if !lux.is_finite() {
            return Err(TelemetryError::InvalidValue);
        }
        self.advance_to(now)?;
        self.lux.record(lux, now)?;
        self.luminance = Some(lux);
        Ok(())
    }

    /// Record a temperature reading at `now`
    pub fn record_temperature(&mut self, celsius: f32, now: Timestamp) -> TelemetryResult<()> {
        if !celsius.is_finite() {
            return Err(TelemetryError::InvalidValue);
        }
        self.advance_to(now)?;
        self.temperature = Some(celsius);
        Ok(())
    }

    /// Record a relative-humidity reading at `now`
    pub fn record_humidity(&mut self, percent: f32, now: Timestamp) -> TelemetryResult<()> {
        if !percent.is_finite() {
            return Err(TelemetryError::InvalidValue);
        }
        self.advance_to(now)?;
        self.humidity = Some(percent);
        Ok(())
    }

    /// Update the door contact state
    pub fn set_door(&mut self, open: bool) {
        self.door_open = open;
    }

    /// Update the motion detector state
    pub fn set_motion(&mut self, active: bool) {
        self.motion = active;
    }

    /// Store the hardware identity reported at startup
    pub fn set_identity(&mut self, identity: &str) -> TelemetryResult<()> {
        self.identity.clear();
        self.identity
            .push_str(identity)
            .map_err(|_| TelemetryError::SnapshotFull)
    }

    /// Door contact state
    pub fn door_open(&self) -> bool {
        self.door_open
    }

    /// Motion detector state
    pub fn motion(&self) -> bool {
        self.motion
    }

    /// Stored hardware identity (empty until [`set_identity`](Self::set_identity))
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Flow pulse total over a named window
    pub fn flow_window_total(&self, window: FlowWindow) -> u64 {
        self.flow.window_total(window.buckets())
    }

    /// Every flow pulse accepted since boot
    pub fn flow_total_since_boot(&self) -> u64 {
        self.flow.total_since_boot()
    }

    /// Luminance extrema over a named window, if any sample landed in it
    pub fn lux_window_extrema(&self, window: LuxWindow) -> Option<(f32, f32)> {
        self.lux.window_extrema(window.buckets())
    }

    /// Project all state into the placeholder vocabulary
    ///
    /// Advances the windows to `now` first, then writes every field. The
    /// result is a complete, self-contained value: renderers hold it without
    /// any lock on the node.
    pub fn snapshot(&mut self, now: Timestamp) -> TelemetryResult<Snapshot> {
        self.advance_to(now)?;

        let mut snap = Snapshot::new();

        snap.set(
            fields::DOOR,
            if self.door_open { fields::DOOR_OPEN } else { fields::DOOR_CLOSED },
        )?;
        snap.set(
            fields::MOTION,
            if self.motion { fields::MOTION_DETECTED } else { fields::MOTION_CLEAR },
        )?;

        set_level(&mut snap, fields::TEMPERATURE, self.temperature, 1)?;
        set_level(&mut snap, fields::HUMIDITY, self.humidity, 1)?;
        set_level(&mut snap, fields::LUMINANCE, self.luminance, 0)?;

        snap.set_fmt(fields::FLOWPULSES, format_args!("{}", self.flow.total_since_boot()))?;
        snap.set_fmt(
            fields::WATERFLOW,
            format_args!("{}", self.flow.total_since_boot() / PULSES_PER_LITRE),
        )?;
        snap.set_fmt(
            fields::FLOWMINUTE,
            format_args!("{}", self.flow_window_total(FlowWindow::Minute)),
        )?;
        snap.set_fmt(
            fields::FLOWHOUR,
            format_args!("{}", self.flow_window_total(FlowWindow::Hour)),
        )?;
        snap.set_fmt(
            fields::FLOWDAY,
            format_args!("{}", self.flow_window_total(FlowWindow::Day)),
        )?;

        set_extrema(
            &mut snap,
            fields::LUXHIGHONEMIN,
            fields::LUXLOWONEMIN,
            self.lux_window_extrema(LuxWindow::OneMin),
        )?;
        set_extrema(
            &mut snap,
            fields::LUXHIGHFIVEMIN,
            fields::LUXLOWFIVEMIN,
            self.lux_window_extrema(LuxWindow::FiveMin),
        )?;
        set_extrema(
            &mut snap,
            fields::LUXHIGHFIFTEENMIN,
            fields::LUXLOWFIFTEENMIN,
            self.lux_window_extrema(LuxWindow::FifteenMin),
        )?;

        snap.set_fmt(fields::UPTIME, format_args!("{}", now / MS_PER_SECOND))?;
        snap.set_fmt(fields::MILLIS, format_args!("{}", now))?;

        if self.identity.is_empty() {
            snap.set(fields::MACADDR, fields::UNAVAILABLE)?;
        } else {
            snap.set(fields::MACADDR, self.identity.as_str())?;
        }

        Ok(snap)
    }
}

impl Default for TelemetryNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an optional instantaneous reading, or the unavailable literal
fn set_level(
    snap: &mut Snapshot,
    name: &'static str,
    value: Option<f32>,
    decimals: usize,
) -> TelemetryResult<()> {
    match value {
        Some(v) => snap.set_fmt(name, format_args!("{v:.decimals$}")),
        None => snap.set(name, fields::UNAVAILABLE),
    }
}

/// Write one windowed extrema pair, or the unavailable literal for both ends
fn set_extrema(
    snap: &mut Snapshot,
    high_name: &'static str,
    low_name: &'static str,
    extrema: Option<(f32, f32)>,
) -> TelemetryResult<()> {
    match extrema {
        Some((lo, hi)) => {
            snap.set_fmt(high_name, format_args!("{hi:.0}"))?;
            snap.set_fmt(low_name, format_args!("{lo:.0}"))
        }
        None => {
            snap.set(high_name, fields::UNAVAILABLE)?;
            snap.set(low_name, fields::UNAVAILABLE)
        }
    }
}

/// Shared cell serializing writers and snapshot builds
///
/// The critical section is short: one ring walk at most. Template documents
/// are read-only after load and never go through the cell.
pub struct TelemetryCell {
    inner: Mutex<RefCell<TelemetryNode>>,
}

impl TelemetryCell {
    /// Wrap a node for shared access
    ///
    /// ```
    /// use crawlmon_core::{TelemetryCell, TelemetryNode};
    ///
    /// static TELEMETRY: TelemetryCell = TelemetryCell::new(TelemetryNode::new());
    /// ```
    pub const fn new(node: TelemetryNode) -> Self {
        Self { inner: Mutex::new(RefCell::new(node)) }
    }

    /// Run `f` against the node inside a critical section
    pub fn with<R>(&self, f: impl FnOnce(&mut TelemetryNode) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Build a complete snapshot at `now` inside one critical section
    ///
    /// A concurrent renderer sees either the old or the new state of every
    /// field, never a mix.
    pub fn snapshot(&self, now: Timestamp) -> TelemetryResult<Snapshot> {
        self.with(|node| node.snapshot(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_renders_defaults() {
        let mut node = TelemetryNode::new();
        let snap = node.snapshot(0).unwrap();

        assert_eq!(snap.field(fields::DOOR).unwrap(), "closed");
        assert_eq!(snap.field(fields::MOTION).unwrap(), "clear");
        assert_eq!(snap.field(fields::TEMPERATURE).unwrap(), "-");
        assert_eq!(snap.field(fields::LUXHIGHFIFTEENMIN).unwrap(), "-");
        assert_eq!(snap.field(fields::FLOWDAY).unwrap(), "0");
        assert_eq!(snap.field(fields::MACADDR).unwrap(), "-");
    }

    #[test]
    fn snapshot_projects_all_recorded_state() {
        let mut node = TelemetryNode::new();
        node.set_identity("BC:DD:C2:11:22:33").unwrap();
        node.set_door(true);
        node.set_motion(true);
        node.record_temperature(18.25, 1_000).unwrap();
        node.record_humidity(61.0, 2_000).unwrap();
        node.record_luminance(123.4, 3_000).unwrap();
        node.record_flow(900, 4_000).unwrap();

        let snap = node.snapshot(5_000).unwrap();

        assert_eq!(snap.field(fields::DOOR).unwrap(), "open");
        assert_eq!(snap.field(fields::MOTION).unwrap(), "detected");
        assert_eq!(snap.field(fields::TEMPERATURE).unwrap(), "18.2");
        assert_eq!(snap.field(fields::HUMIDITY).unwrap(), "61.0");
        assert_eq!(snap.field(fields::LUMINANCE).unwrap(), "123");
        assert_eq!(snap.field(fields::FLOWPULSES).unwrap(), "900");
        assert_eq!(snap.field(fields::WATERFLOW).unwrap(), "2");
        assert_eq!(snap.field(fields::FLOWMINUTE).unwrap(), "900");
        assert_eq!(snap.field(fields::LUXHIGHONEMIN).unwrap(), "123");
        assert_eq!(snap.field(fields::LUXLOWONEMIN).unwrap(), "123");
        assert_eq!(snap.field(fields::UPTIME).unwrap(), "5");
        assert_eq!(snap.field(fields::MILLIS).unwrap(), "5000");
        assert_eq!(snap.field(fields::MACADDR).unwrap(), "BC:DD:C2:11:22:33");
    }

    #[test]
    fn windows_decay_without_samples() {
        let mut node = TelemetryNode::new();
        node.record_flow(42, 0).unwrap();
        node.record_luminance(500.0, 0).unwrap();

        // Two hours later with nothing recorded.
        let snap = node.snapshot(2 * 60 * 60 * 1000).unwrap();

        assert_eq!(snap.field(fields::FLOWMINUTE).unwrap(), "0");
        assert_eq!(snap.field(fields::FLOWHOUR).unwrap(), "0");
        assert_eq!(snap.field(fields::FLOWDAY).unwrap(), "42");
        assert_eq!(snap.field(fields::FLOWPULSES).unwrap(), "42");
        assert_eq!(snap.field(fields::LUXHIGHFIFTEENMIN).unwrap(), "-");
        // Latest instantaneous value is sticky; only the windows decay.
        assert_eq!(snap.field(fields::LUMINANCE).unwrap(), "500");
    }

    #[test]
    fn out_of_order_snapshot_rejected() {
        let mut node = TelemetryNode::new();
        node.record_flow(1, 10_000).unwrap();

        assert!(matches!(
            node.snapshot(9_000),
            Err(TelemetryError::NonMonotonicTime { last: 10_000, now: 9_000 })
        ));
    }

    #[test]
    fn cell_serializes_writer_and_snapshot() {
        let cell = TelemetryCell::new(TelemetryNode::new());
        cell.with(|node| {
            node.set_door(true);
            node.record_flow(10, 1_000)
        })
        .unwrap();

        let snap = cell.snapshot(2_000).unwrap();
        assert_eq!(snap.field(fields::DOOR).unwrap(), "open");
        assert_eq!(snap.field(fields::FLOWMINUTE).unwrap(), "10");
    }
}
