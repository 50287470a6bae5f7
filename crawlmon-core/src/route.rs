//! Identity-Based Publish Routing
//!
//! Decides which logical publish target a unit's telemetry belongs to, so a
//! development board on a bench never writes into the production channels.
//!
//! The table is data, not code: adding a unit means adding one `(identity,
//! target)` entry to the loaded configuration, never rebuilding a branch.
//! Matching is exact and case-insensitive - no prefixes, no wildcards. The
//! zero-surprise failure mode is deliberate: a misconfigured unit falls back
//! to the inert default target instead of accidentally matching production.
//!
//! Queried once per publish event by the external transport layer; the
//! render path never touches it.

use heapless::Vec;

use crate::constants::buffers::MAX_ROUTES;
use crate::errors::{TelemetryError, TelemetryResult};

/// Logical publish target for a unit's telemetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub enum PublishTarget {
    /// Live channels consumed by automation
    #[cfg_attr(feature = "serde", serde(rename = "prod"))]
    Production,
    /// Bench and development channels
    #[cfg_attr(feature = "serde", serde(rename = "dev"))]
    Development,
    /// Inert channel for unregistered units
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    Default,
}

impl PublishTarget {
    /// Wire name of the target
    pub const fn tag(self) -> &'static str {
        match self {
            PublishTarget::Production => "prod",
            PublishTarget::Development => "dev",
            PublishTarget::Default => "default",
        }
    }
}

/// Ordered table of exact identity-to-target routes
///
/// Loaded once from persisted configuration; first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable<'a> {
    entries: Vec<(&'a str, PublishTarget), MAX_ROUTES>,
}

impl<'a> RouteTable<'a> {
    /// Create an empty table (everything resolves to the default target)
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a table from configuration entries, preserving order
    pub fn from_entries(entries: &[(&'a str, PublishTarget)]) -> TelemetryResult<Self> {
        let mut table = Self::new();
        for &(identity, target) in entries {
            table.add(identity, target)?;
        }
        Ok(table)
    }

    /// Append one route
    pub fn add(&mut self, identity: &'a str, target: PublishTarget) -> TelemetryResult<()> {
        self.entries
            .push((identity, target))
            .map_err(|_| TelemetryError::RouteTableFull)
    }

    /// Target for `identity`
    ///
    /// Exact, ASCII-case-insensitive comparison against each entry in order;
    /// no match is not an error, it resolves to [`PublishTarget::Default`].
    pub fn resolve(&self, identity: &str) -> PublishTarget {
        self.entries
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(identity))
            .map(|&(_, target)| target)
            .unwrap_or(PublishTarget::Default)
    }

    /// Number of configured routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no route is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-target publish topics
///
/// The external publisher resolves a unit's target once per publish cycle and
/// picks the topic here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TopicTable<'a> {
    /// Topic for production units
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub production: &'a str,
    /// Topic for development units
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub development: &'a str,
    /// Topic for everything else
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub fallback: &'a str,
}

impl<'a> TopicTable<'a> {
    /// Topic configured for `target`
    pub const fn select(&self, target: PublishTarget) -> &'a str {
        match target {
            PublishTarget::Production => self.production,
            PublishTarget::Development => self.development,
            PublishTarget::Default => self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<'static> {
        RouteTable::from_entries(&[
            ("BC:DD:C2:11:22:33", PublishTarget::Production),
            ("BC:DD:C2:44:55:66", PublishTarget::Development),
        ])
        .unwrap()
    }

    #[test]
    fn unknown_identity_resolves_to_default() {
        assert_eq!(table().resolve("00:00:00:00:00:00"), PublishTarget::Default);
        assert_eq!(RouteTable::new().resolve("anything"), PublishTarget::Default);
    }

    #[test]
    fn match_is_case_insensitive() {
        let table = table();
        assert_eq!(table.resolve("bc:dd:c2:11:22:33"), PublishTarget::Production);
        assert_eq!(table.resolve("Bc:Dd:C2:44:55:66"), PublishTarget::Development);
    }

    #[test]
    fn no_prefix_matching() {
        let table = table();
        assert_eq!(table.resolve("BC:DD:C2"), PublishTarget::Default);
        assert_eq!(table.resolve("BC:DD:C2:11:22:33:77"), PublishTarget::Default);
    }

    #[test]
    fn first_match_wins() {
        let table = RouteTable::from_entries(&[
            ("BC:DD:C2:11:22:33", PublishTarget::Development),
            ("BC:DD:C2:11:22:33", PublishTarget::Production),
        ])
        .unwrap();
        assert_eq!(table.resolve("BC:DD:C2:11:22:33"), PublishTarget::Development);
    }

    #[test]
    fn table_capacity_is_enforced() {
        let mut table = RouteTable::new();
        for _ in 0..MAX_ROUTES {
            table.add("AA:BB", PublishTarget::Production).unwrap();
        }
        assert_eq!(
            table.add("CC:DD", PublishTarget::Development),
            Err(TelemetryError::RouteTableFull)
        );
    }

    #[test]
    fn topics_follow_target() {
        let topics = TopicTable {
            production: "ha/door/crawlspace/door",
            development: "ha/door/crawlspace-dev/door",
            fallback: "ha/door/crawlspace-other/door",
        };

        assert_eq!(topics.select(PublishTarget::Production), "ha/door/crawlspace/door");
        assert_eq!(topics.select(PublishTarget::Development), "ha/door/crawlspace-dev/door");
        assert_eq!(topics.select(PublishTarget::Default), "ha/door/crawlspace-other/door");
        assert_eq!(PublishTarget::Production.tag(), "prod");
    }
}
