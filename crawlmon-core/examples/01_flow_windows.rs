//! Flow Window Aggregation Example
//!
//! This example demonstrates the rolling-window engine at the heart of the
//! crawlmon node: pulse deltas stream in, windows roll forward, and the
//! minute/hour totals stay bounded no matter how long the device runs.
//!
//! ## What You'll Learn
//!
//! - Recording pulse deltas against a monotonic timeline
//! - Reading minute/hour/day totals from one ring
//! - What happens to windows during silent spans
//! - How out-of-order samples are rejected
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_flow_windows
//! ```

use crawlmon_core::aggregate::{FlowWindow, PulseAggregator};
use crawlmon_core::constants::time::{BUCKET_WIDTH_MS, DAY_WINDOW_BUCKETS};

fn main() {
    println!("Crawlmon Flow Window Example");
    println!("============================\n");

    let mut flow: PulseAggregator<DAY_WINDOW_BUCKETS> = PulseAggregator::new(BUCKET_WIDTH_MS);

    // A tap runs for three minutes: a burst of pulses every 20 seconds.
    println!("Simulating three minutes of water draw:");
    let mut now = 0u64;
    for tick in 0..9 {
        now = tick * 20_000;
        flow.record(150, now).expect("monotonic samples");
        println!(
            "  t={:3}s  +150 pulses  minute total = {:4}",
            now / 1000,
            flow.window_total(FlowWindow::Minute.buckets())
        );
    }

    println!("\nWindow totals after the draw:");
    for (name, window) in [
        ("minute", FlowWindow::Minute),
        ("hour", FlowWindow::Hour),
        ("day", FlowWindow::Day),
    ] {
        println!("  {:6}: {:5} pulses", name, flow.window_total(window.buckets()));
    }
    println!("  since boot: {} pulses", flow.total_since_boot());

    // Two hours of silence: minute and hour windows decay to zero on their
    // own, the day window still remembers the draw.
    now += 2 * 60 * 60 * 1000;
    flow.advance_to(now).expect("time moves forward");

    println!("\nAfter two silent hours:");
    println!("  minute: {:5} pulses", flow.window_total(FlowWindow::Minute.buckets()));
    println!("  hour:   {:5} pulses", flow.window_total(FlowWindow::Hour.buckets()));
    println!("  day:    {:5} pulses", flow.window_total(FlowWindow::Day.buckets()));

    // A sample from the past is rejected, counters untouched.
    match flow.record(999, now - 1) {
        Ok(()) => unreachable!("stale sample must not be accepted"),
        Err(e) => println!("\nStale sample rejected: {e}"),
    }
    println!("  since boot still {} pulses", flow.total_since_boot());
}
