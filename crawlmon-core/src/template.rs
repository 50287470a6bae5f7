//! Placeholder-Substitution Document Renderer
//!
//! ## Overview
//!
//! A [`Template`] is an immutable parse of a source document into literal
//! fragments interleaved with `%NAME%` placeholders. Parsing happens once at
//! startup; rendering walks the fragment sequence and streams straight into
//! the caller's sink, so output cost is bounded by template size plus the
//! substituted value lengths - no intermediate buffers.
//!
//! ## Placeholder grammar
//!
//! A placeholder is `%` + one or more ASCII alphanumeric/underscore
//! characters + `%`. Anything else containing `%` is literal text: the served
//! documents legitimately contain lone percent signs (CSS, encoded URLs), so
//! an unterminated or empty token is not an error.
//!
//! ## Leniency contract
//!
//! A placeholder whose name is absent from the snapshot renders as the
//! original `%NAME%` token, untouched. Documents carry commented-out future
//! fields and those must stay syntactically harmless. Single-field queries
//! use the strict path ([`render_field`]) instead, where an unknown name is a
//! named failure.

use core::fmt;

use heapless::Vec;

use crate::constants::buffers::{MAX_TEMPLATES, MAX_TEMPLATE_SEGMENTS};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::snapshot::Snapshot;

/// One piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Verbatim document text
    Literal(&'a str),
    /// Placeholder name, without the delimiting `%`
    Placeholder(&'a str),
}

/// Immutable parsed document, borrowing its source text
#[derive(Debug, Clone)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>, MAX_TEMPLATE_SEGMENTS>,
}

impl<'a> Template<'a> {
    /// Parse a source document
    ///
    /// Fails with [`TelemetryError::TemplateOverflow`] when the document has
    /// more fragments than the segment table holds; a malformed `%` never
    /// fails, it stays literal.
    pub fn parse(src: &'a str) -> TelemetryResult<Self> {
        let mut segments = Vec::new();
        let bytes = src.as_bytes();
        let mut lit_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            match placeholder_end(bytes, i) {
                Some(end) => {
                    if lit_start < i {
                        push(&mut segments, Segment::Literal(&src[lit_start..i]))?;
                    }
                    push(&mut segments, Segment::Placeholder(&src[i + 1..end]))?;
                    i = end + 1;
                    lit_start = i;
                }
                // Lone or empty `%`: keep scanning, it stays in the literal run.
                None => i += 1,
            }
        }
        if lit_start < bytes.len() {
            push(&mut segments, Segment::Literal(&src[lit_start..]))?;
        }

        Ok(Self { segments })
    }

    /// Substitute placeholders from `snapshot`, streaming into `out`
    ///
    /// Literal fragments are copied verbatim; unknown placeholders pass
    /// through as their original `%NAME%` token.
    pub fn render<W: fmt::Write>(&self, snapshot: &Snapshot, out: &mut W) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Placeholder(name) => match snapshot.get(name) {
                    Some(value) => out.write_str(value)?,
                    None => {
                        out.write_char('%')?;
                        out.write_str(name)?;
                        out.write_char('%')?;
                    }
                },
            }
        }
        Ok(())
    }

    /// Number of parsed segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True when the template contains at least one placeholder
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }
}

/// Substituted value for a single named field
///
/// The strict variant used by single-field status queries (`/stat?NAME`
/// style): a name absent from the snapshot is
/// [`TelemetryError::UnknownField`], not passed through.
pub fn render_field<'s>(snapshot: &'s Snapshot, name: &str) -> TelemetryResult<&'s str> {
    snapshot.field(name)
}

/// End index of a placeholder starting at `start`, if one is there
///
/// `bytes[start]` is `%`; a valid placeholder needs a nonempty
/// alphanumeric/underscore name and a closing `%`.
fn placeholder_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut j = start + 1;
    while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
        j += 1;
    }
    (j > start + 1 && j < bytes.len() && bytes[j] == b'%').then_some(j)
}

fn push<'a>(
    segments: &mut Vec<Segment<'a>, MAX_TEMPLATE_SEGMENTS>,
    segment: Segment<'a>,
) -> TelemetryResult<()> {
    segments
        .push(segment)
        .map_err(|_| TelemetryError::TemplateOverflow)
}

/// Source of named templates
///
/// Decouples asset storage from the renderer: the substitution engine never
/// knows whether documents are compiled in, loaded from flash, or handed over
/// by a host. Templates are read-only after load, so implementations need no
/// locking.
pub trait TemplateSource {
    /// Template registered under `name`, if any (exact match)
    fn get(&self, name: &str) -> Option<&Template<'_>>;
}

/// Fixed table of named templates
pub struct StaticTemplates<'a> {
    entries: Vec<(&'a str, Template<'a>), MAX_TEMPLATES>,
}

impl<'a> StaticTemplates<'a> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register `template` under `name`
    pub fn register(&mut self, name: &'a str, template: Template<'a>) -> TelemetryResult<()> {
        self.entries
            .push((name, template))
            .map_err(|_| TelemetryError::TemplateOverflow)
    }
}

impl Default for StaticTemplates<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for StaticTemplates<'_> {
    fn get(&self, name: &str) -> Option<&Template<'_>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| t)
    }
}
