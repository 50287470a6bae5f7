//! End-to-end scenario: sampling through aggregation, rendering, and routing
//!
//! Walks the same path the device firmware takes: pulses arrive, windows
//! roll, a document is served, and the publisher resolves its topic.

use crawlmon_core::aggregate::PulseAggregator;
use crawlmon_core::template::TemplateSource;
use crawlmon_core::{
    assets, PublishTarget, RouteTable, TelemetryCell, TelemetryNode, TopicTable,
};

#[test]
fn two_bucket_window_walkthrough() {
    // Bucket width of one time unit, ring of two buckets.
    let mut flow: PulseAggregator<2> = PulseAggregator::new(1_000);

    flow.record(3, 0).unwrap();
    flow.record(2, 500).unwrap();

    // Roll into the next bucket: both pulses still inside the 2-bucket span.
    flow.advance_to(1_000).unwrap();
    assert_eq!(flow.window_total(2), 5);

    // One more silent bucket: the first bucket is evicted, the second empty.
    flow.advance_to(2_000).unwrap();
    assert_eq!(flow.window_total(2), 0);
    assert_eq!(flow.total_since_boot(), 5);
}

#[test]
fn registered_identity_routes_to_prod_case_insensitively() {
    let table = RouteTable::from_entries(&[("AA:BB", PublishTarget::Production)]).unwrap();
    assert_eq!(table.resolve("aa:bb"), PublishTarget::Production);
}

#[test]
fn sampling_to_served_document() {
    static TELEMETRY: TelemetryCell = TelemetryCell::new(TelemetryNode::new());

    // Startup: identity read from the radio, routes from persisted config.
    TELEMETRY
        .with(|node| node.set_identity("BC:DD:C2:11:22:33"))
        .unwrap();
    let routes = RouteTable::from_entries(&[
        ("BC:DD:C2:11:22:33", PublishTarget::Production),
        ("BC:DD:C2:44:55:66", PublishTarget::Development),
    ])
    .unwrap();
    let topics = TopicTable {
        production: "ha/door/crawlspace/door",
        development: "ha/door/crawlspace-dev/door",
        fallback: "ha/door/crawlspace-other/door",
    };
    let templates = assets::builtin().unwrap();

    // Sampling ticks.
    TELEMETRY
        .with(|node| {
            node.record_flow(900, 10_000)?;
            node.record_luminance(250.0, 20_000)?;
            node.record_temperature(16.0, 30_000)?;
            node.set_door(true);
            Ok::<_, crawlmon_core::TelemetryError>(())
        })
        .unwrap();

    // Inbound request: one coherent snapshot, then a streamed render.
    let snap = TELEMETRY.snapshot(60_000).unwrap();
    let mut body = heapless::String::<4096>::new();
    templates
        .get(assets::STATUS_DOC)
        .unwrap()
        .render(&snap, &mut body)
        .unwrap();

    assert!(body.contains(r#""door": "open""#));
    assert!(body.contains(r#""flowcount": "2""#));
    assert!(body.contains(r#""luminance": "250""#));

    // Publish cycle: the transport asks once where this unit belongs.
    let target = routes.resolve(TELEMETRY.with(|node| {
        let mut id = heapless::String::<24>::new();
        id.push_str(node.identity()).unwrap();
        id
    }).as_str());
    assert_eq!(target, PublishTarget::Production);
    assert_eq!(topics.select(target), "ha/door/crawlspace/door");
}
