//! Named Windows over Bucket Rings
//!
//! Wraps [`BucketRing`](crate::ring::BucketRing) into the two aggregator
//! shapes the node actually runs: a pulse counter with minute/hour/day
//! totals plus a cumulative-since-boot count, and a threshold sampler with
//! rolling 1/5/15-minute extrema.
//!
//! Window names are nothing more than bucket counts over the shared
//! one-minute granularity; see [`crate::constants::time`].

use crate::constants::time::{
    DAY_WINDOW_BUCKETS, HOUR_WINDOW_BUCKETS, MINUTE_WINDOW_BUCKETS,
    LUX_FIFTEEN_MIN_BUCKETS, LUX_FIVE_MIN_BUCKETS, LUX_ONE_MIN_BUCKETS,
};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::ring::{BucketRing, LevelBucket, PulseBucket};
use crate::time::Timestamp;

/// Named windows for the pulse-counted flow sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowWindow {
    /// The current minute bucket
    Minute,
    /// The last 60 minute buckets
    Hour,
    /// The last 1440 minute buckets
    Day,
}

impl FlowWindow {
    /// Window length as a bucket count
    pub const fn buckets(self) -> usize {
        match self {
            FlowWindow::Minute => MINUTE_WINDOW_BUCKETS,
            FlowWindow::Hour => HOUR_WINDOW_BUCKETS,
            FlowWindow::Day => DAY_WINDOW_BUCKETS,
        }
    }
}

/// Named windows for the threshold-sampled luminance sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuxWindow {
    /// Rolling one-minute extrema
    OneMin,
    /// Rolling five-minute extrema
    FiveMin,
    /// Rolling fifteen-minute extrema
    FifteenMin,
}

impl LuxWindow {
    /// Window length as a bucket count
    pub const fn buckets(self) -> usize {
        match self {
            LuxWindow::OneMin => LUX_ONE_MIN_BUCKETS,
            LuxWindow::FiveMin => LUX_FIVE_MIN_BUCKETS,
            LuxWindow::FifteenMin => LUX_FIFTEEN_MIN_BUCKETS,
        }
    }
}

/// Pulse counter with windowed totals and a since-boot accumulator
///
/// `N` must cover the largest window read from this aggregator. Negative
/// deltas are unrepresentable by the sample type; the remaining invalid
/// sample class is time regression, rejected by the ring.
#[derive(Clone)]
pub struct PulseAggregator<const N: usize> {
    ring: BucketRing<PulseBucket, N>,
    total: u64,
}

impl<const N: usize> PulseAggregator<N> {
    /// Create an empty aggregator with the given bucket width
    pub const fn new(width_ms: u64) -> Self {
        Self {
            ring: BucketRing::new(width_ms),
            total: 0,
        }
    }

    /// Add `delta` pulses at time `now`
    ///
    /// The since-boot total only grows once the sample is accepted, so a
    /// rejected sample leaves every counter unchanged.
    pub fn record(&mut self, delta: u32, now: Timestamp) -> TelemetryResult<()> {
        self.ring.record(delta, now)?;
        self.total += delta as u64;
        Ok(())
    }

    /// Roll the window forward without recording anything
    pub fn advance_to(&mut self, now: Timestamp) -> TelemetryResult<()> {
        self.ring.advance_to(now)
    }

    /// Sum of pulses across the newest `buckets` buckets
    pub fn window_total(&self, buckets: usize) -> u64 {
        self.ring.recent(buckets).map(|b| b.sum as u64).sum()
    }

    /// Every pulse accepted since boot
    pub fn total_since_boot(&self) -> u64 {
        self.total
    }

    /// Latest accepted timestamp
    pub fn last_seen(&self) -> Timestamp {
        self.ring.last_seen()
    }
}

/// Threshold sampler with rolling windowed extrema
#[derive(Clone)]
pub struct LevelAggregator<const N: usize> {
    ring: BucketRing<LevelBucket, N>,
}

impl<const N: usize> LevelAggregator<N> {
    /// Create an empty aggregator with the given bucket width
    pub const fn new(width_ms: u64) -> Self {
        Self { ring: BucketRing::new(width_ms) }
    }

    /// Record an instantaneous reading at time `now`
    ///
    /// Non-finite values are rejected before any state change.
    pub fn record(&mut self, value: f32, now: Timestamp) -> TelemetryResult<()> {
        if !value.is_finite() {
            return Err(TelemetryError::InvalidValue);
        }
        self.ring.record(value, now)
    }

    /// Roll the window forward without recording anything
    pub fn advance_to(&mut self, now: Timestamp) -> TelemetryResult<()> {
        self.ring.advance_to(now)
    }

    /// (min, max) across the newest `buckets` buckets
    ///
    /// `None` when no sample was ever recorded in the span - distinct from a
    /// real zero reading, and rendered downstream as the unavailable literal.
    pub fn window_extrema(&self, buckets: usize) -> Option<(f32, f32)> {
        self.ring
            .recent(buckets)
            .filter_map(LevelBucket::extrema)
            .fold(None, |acc, (lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((alo, ahi)) => Some((alo.min(lo), ahi.max(hi))),
            })
    }

    /// Latest accepted timestamp
    pub fn last_seen(&self) -> Timestamp {
        self.ring.last_seen()
    }
}
