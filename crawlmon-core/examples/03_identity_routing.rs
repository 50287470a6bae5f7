//! Identity Routing Example
//!
//! Shows how the publisher decides which topic a unit's telemetry belongs
//! to: an exact-match identity table keeps development boards out of the
//! production channels, and unregistered units land on an inert default.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_identity_routing
//! ```

use crawlmon_core::{PublishTarget, RouteTable, TopicTable};

fn main() {
    println!("Crawlmon Identity Routing Example");
    println!("=================================\n");

    // Loaded once from persisted configuration at startup.
    let routes = RouteTable::from_entries(&[
        ("BC:DD:C2:11:22:33", PublishTarget::Production),
        ("BC:DD:C2:44:55:66", PublishTarget::Development),
    ])
    .expect("table fits");

    let topics = TopicTable {
        production: "ha/door/crawlspace/door",
        development: "ha/door/crawlspace-dev/door",
        fallback: "ha/door/crawlspace-other/door",
    };

    let units = [
        "BC:DD:C2:11:22:33",  // the deployed unit
        "bc:dd:c2:44:55:66",  // the bench board, lowercase from the radio
        "BC:DD:C2",           // a prefix is not a match
        "00:11:22:33:44:55",  // somebody else's board
    ];

    for identity in units {
        let target = routes.resolve(identity);
        println!(
            "  {:20} -> {:8} {}",
            identity,
            target.tag(),
            topics.select(target)
        );
    }

    println!("\nMisconfigured units fall back to the inert default topic");
    println!("instead of accidentally publishing into production.");
}
