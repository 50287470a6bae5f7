//! Document Rendering Example
//!
//! Builds a snapshot from live node state and renders the built-in status
//! and index documents, including the leniency rules for unknown
//! placeholders and the unavailable literal for sensors with no data yet.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_render_status
//! ```

use crawlmon_core::template::{render_field, TemplateSource};
use crawlmon_core::time::{Clock, ManualClock};
use crawlmon_core::{assets, TelemetryNode};

fn main() {
    println!("Crawlmon Render Example");
    println!("=======================\n");

    let templates = assets::builtin().expect("built-in documents parse");

    // The sampling loop owns the clock; the core only ever sees timestamps.
    let mut clock = ManualClock::new(0);

    let mut node = TelemetryNode::new();
    node.set_identity("BC:DD:C2:11:22:33").expect("identity fits");
    node.set_door(false);

    clock.advance(5_000);
    node.record_flow(1350, clock.now()).expect("sample accepted");
    clock.advance(5_000);
    node.record_temperature(13.4, clock.now()).expect("sample accepted");
    node.record_humidity(68.2, clock.now()).expect("sample accepted");

    // Luminance never sampled: its fields render as the dash literal.
    clock.advance(20_000);
    let snapshot = node.snapshot(clock.now()).expect("snapshot builds");

    let mut body = heapless::String::<4096>::new();
    templates
        .get(assets::STATUS_DOC)
        .expect("status document registered")
        .render(&snapshot, &mut body)
        .expect("output sink large enough");

    println!("--- {} document ---", assets::STATUS_DOC);
    println!("{body}");

    // Single-field queries use the strict lookup.
    println!("--- single-field queries ---");
    for name in ["WATERFLOW", "LUMINANCE", "DOOR", "FLOWUNITS"] {
        match render_field(&snapshot, name) {
            Ok(value) => println!("  /stat?{name:12} -> {value}"),
            Err(e) => println!("  /stat?{name:12} -> error: {e}"),
        }
    }
}
