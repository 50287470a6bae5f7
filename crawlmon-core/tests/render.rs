//! Integration tests for document rendering against live node state

use crawlmon_core::assets;
use crawlmon_core::template::{render_field, Template, TemplateSource};
use crawlmon_core::{Snapshot, TelemetryNode};

type Output = heapless::String<4096>;

fn render(template: &Template<'_>, snapshot: &Snapshot) -> Output {
    let mut out = Output::new();
    template.render(snapshot, &mut out).unwrap();
    out
}

fn populated_node() -> TelemetryNode {
    let mut node = TelemetryNode::new();
    node.set_identity("BC:DD:C2:11:22:33").unwrap();
    node.set_door(true);
    node.record_temperature(14.5, 1_000).unwrap();
    node.record_humidity(71.0, 1_000).unwrap();
    node.record_luminance(42.0, 1_000).unwrap();
    node.record_flow(450, 1_000).unwrap();
    node
}

#[test]
fn status_document_substitutes_every_known_field() {
    let templates = assets::builtin().unwrap();
    let snap = populated_node().snapshot(2_000).unwrap();

    let out = render(templates.get(assets::STATUS_DOC).unwrap(), &snap);

    assert!(out.contains(r#""door": "open""#));
    assert!(out.contains(r#""flowcount": "1""#));
    assert!(out.contains(r#""minute": "450""#));
    assert!(out.contains(r#""temperature": "14.5""#));
    assert!(out.contains(r#""humidity": "71.0""#));
    assert!(out.contains(r#""id": "BC:DD:C2:11:22:33""#));
    assert!(out.contains(r#""uptime": "2000""#));
    // Every placeholder in the status body is a known field.
    assert!(!out.contains('%'));
}

#[test]
fn index_page_keeps_future_fields_harmless() {
    let templates = assets::builtin().unwrap();
    let snap = populated_node().snapshot(2_000).unwrap();

    let out = render(templates.get(assets::INDEX_DOC).unwrap(), &snap);

    assert!(out.contains(r#"<span id="waterflow">1</span>"#));
    assert!(out.contains(r#"<span id="door">open</span>"#));
    assert!(out.contains(r#"<span id="uptime">2</span>"#));
    // The commented-out field has no snapshot entry and must survive
    // verbatim inside its comment.
    assert!(out.contains("%FLOWUNITS%"));
}

#[test]
fn unavailable_sensors_render_the_dash_literal() {
    let mut node = TelemetryNode::new();
    let snap = node.snapshot(0).unwrap();

    let template = Template::parse("t=%TEMPERATURE% luxhigh=%LUXHIGHFIVEMIN%").unwrap();
    assert_eq!(render(&template, &snap).as_str(), "t=- luxhigh=-");
}

#[test]
fn whole_document_lenient_single_field_strict() {
    let mut node = populated_node();
    let snap = node.snapshot(2_000).unwrap();

    // Same unknown name: verbatim in a document render...
    let template = Template::parse("[%NOTAFIELD%]").unwrap();
    assert_eq!(render(&template, &snap).as_str(), "[%NOTAFIELD%]");

    // ...but a named failure as a field query.
    assert!(render_field(&snap, "NOTAFIELD").is_err());
    assert_eq!(render_field(&snap, "DOOR").unwrap(), "open");
}
