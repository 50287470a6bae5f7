//! Coherent Field Table Read by the Renderer
//!
//! A [`Snapshot`] is the point-in-time projection of all device state into
//! stable string values keyed by placeholder name. It is owned and written by
//! the aggregation layer (see [`crate::node`]); renderers only read it.
//!
//! The table is vocabulary-agnostic. Field names are `&'static str` because
//! the vocabulary is fixed at build time, but nothing here knows which names
//! exist - adding a field is one projection line in the node glue.

use core::fmt;

use heapless::{FnvIndexMap, String};

use crate::constants::buffers::{MAX_SNAPSHOT_FIELDS, MAX_VALUE_LEN};
use crate::errors::{TelemetryError, TelemetryResult};

/// One rendered field value
pub type FieldValue = String<MAX_VALUE_LEN>;

/// Mapping from placeholder name to its current textual value
#[derive(Clone, Default)]
pub struct Snapshot {
    fields: FnvIndexMap<&'static str, FieldValue, MAX_SNAPSHOT_FIELDS>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self { fields: FnvIndexMap::new() }
    }

    /// Value of `name`, if present
    ///
    /// The lenient lookup used by whole-document rendering: absence is not an
    /// error there, the placeholder token passes through verbatim.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    /// Value of `name`, or [`TelemetryError::UnknownField`]
    ///
    /// The strict lookup used by single-field status queries.
    pub fn field(&self, name: &str) -> TelemetryResult<&str> {
        self.get(name).ok_or(TelemetryError::UnknownField)
    }

    /// Set `name` to a literal value
    pub fn set(&mut self, name: &'static str, value: &str) -> TelemetryResult<()> {
        let mut v = FieldValue::new();
        v.push_str(value).map_err(|_| TelemetryError::SnapshotFull)?;
        self.insert(name, v)
    }

    /// Set `name` to formatted output
    ///
    /// ```
    /// # use crawlmon_core::snapshot::Snapshot;
    /// let mut snap = Snapshot::new();
    /// snap.set_fmt("FLOWHOUR", format_args!("{}", 152u64)).unwrap();
    /// assert_eq!(snap.field("FLOWHOUR").unwrap(), "152");
    /// ```
    pub fn set_fmt(&mut self, name: &'static str, args: fmt::Arguments<'_>) -> TelemetryResult<()> {
        let mut v = FieldValue::new();
        fmt::write(&mut v, args).map_err(|_| TelemetryError::SnapshotFull)?;
        self.insert(name, v)
    }

    fn insert(&mut self, name: &'static str, value: FieldValue) -> TelemetryResult<()> {
        self.fields
            .insert(name, value)
            .map(|_| ())
            .map_err(|_| TelemetryError::SnapshotFull)
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_lookup() {
        let mut snap = Snapshot::new();
        snap.set("DOOR", "closed").unwrap();

        assert_eq!(snap.get("DOOR"), Some("closed"));
        assert_eq!(snap.field("DOOR").unwrap(), "closed");
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn missing_field_is_a_named_failure() {
        let snap = Snapshot::new();
        assert_eq!(snap.get("FOOBAR"), None);
        assert_eq!(snap.field("FOOBAR"), Err(TelemetryError::UnknownField));
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut snap = Snapshot::new();
        snap.set("MOTION", "clear").unwrap();
        snap.set("MOTION", "detected").unwrap();

        assert_eq!(snap.field("MOTION").unwrap(), "detected");
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn formatted_integers_have_no_leading_zeros() {
        let mut snap = Snapshot::new();
        snap.set_fmt("FLOWDAY", format_args!("{}", 52u64)).unwrap();
        snap.set_fmt("MILLIS", format_args!("{}", u64::MAX)).unwrap();

        assert_eq!(snap.field("FLOWDAY").unwrap(), "52");
        assert_eq!(snap.field("MILLIS").unwrap(), "18446744073709551615");
    }

    #[test]
    fn oversized_value_is_rejected_not_truncated() {
        let mut snap = Snapshot::new();
        let long = "x".repeat(MAX_VALUE_LEN + 1);
        assert_eq!(snap.set("DOOR", &long), Err(TelemetryError::SnapshotFull));
        assert!(snap.is_empty());
    }
}
