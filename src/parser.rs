// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone file parser
//!
//! Runs the full parse path: sanitize the text, extract generic records,
//! apply the per-type rdata parsers and group the results by type.
//!
//! # Examples
//!
//! ```rust
//! use zonetext::parser::{parse, ParseOptions};
//!
//! let zone = "$ORIGIN example.com.\nwww 300 IN A 192.0.2.1\n";
//! let records = parse(zone, &ParseOptions::default());
//! let a = &records.grouped().unwrap().get("A").unwrap()[0];
//! assert_eq!(a.name(), "www.example.com.");
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;
use utoipa::ToSchema;

use crate::extractor::extract_records;
use crate::rdata_parser::parse_record;
use crate::record_types::TypedRecord;
use crate::sanitizer::sanitize;

/// Options controlling the parse output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Return a flat list instead of a map keyed by type (default: false)
    #[serde(default)]
    pub flatten: bool,

    /// Join multi-string TXT records with a space (default: true)
    #[serde(default = "default_true")]
    pub preserve_spacing: bool,

    /// Keep the trailing dot on qualified names (default: true)
    #[serde(default = "default_true")]
    pub keep_trailing_dot: bool,
}

pub(crate) fn default_true() -> bool {
    true
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            flatten: false,
            preserve_spacing: true,
            keep_trailing_dot: true,
        }
    }
}

/// Records grouped by upper-cased type, in order of first appearance
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsByType<T> {
    groups: Vec<(String, Vec<T>)>,
}

impl<T> RecordsByType<T> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a record to its type's group, creating the group if needed
    pub fn push(&mut self, record_type: &str, record: T) {
        match self.groups.iter_mut().find(|(t, _)| t == record_type) {
            Some((_, records)) => records.push(record),
            None => self.groups.push((record_type.to_string(), vec![record])),
        }
    }

    pub fn get(&self, record_type: &str) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(record_type))
            .map(|(_, records)| records.as_slice())
    }

    /// Type names in first-seen order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups
            .iter()
            .map(|(t, records)| (t.as_str(), records.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Concatenate the groups in order
    pub fn into_flat(self) -> Vec<T> {
        self.groups
            .into_iter()
            .flat_map(|(_, records)| records)
            .collect()
    }
}

impl<T> Default for RecordsByType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for RecordsByType<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (record_type, records) in &self.groups {
            map.serialize_entry(record_type, records)?;
        }
        map.end()
    }
}

/// Result of [`parse`]: grouped by type or flattened
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParseOutput {
    Grouped(RecordsByType<TypedRecord>),
    Flat(Vec<TypedRecord>),
}

impl ParseOutput {
    pub fn grouped(&self) -> Option<&RecordsByType<TypedRecord>> {
        match self {
            ParseOutput::Grouped(groups) => Some(groups),
            ParseOutput::Flat(_) => None,
        }
    }

    /// All records, in group order
    pub fn into_records(self) -> Vec<TypedRecord> {
        match self {
            ParseOutput::Grouped(groups) => groups.into_flat(),
            ParseOutput::Flat(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ParseOutput::Grouped(groups) => groups.len(),
            ParseOutput::Flat(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group typed records by type, first-seen order
pub fn group_records(records: impl IntoIterator<Item = TypedRecord>) -> RecordsByType<TypedRecord> {
    let mut grouped = RecordsByType::new();
    for record in records {
        let record_type = record.record_type().to_uppercase();
        grouped.push(&record_type, record);
    }
    grouped
}

/// Parse BIND-style zone text into typed records
pub fn parse(input: &str, options: &ParseOptions) -> ParseOutput {
    let lines = sanitize(input);
    let (records, state) = extract_records(&lines, options);

    debug!(
        "extracted {} records from {} lines (origin: {:?})",
        records.len(),
        lines.len(),
        state.zone_origin
    );

    let grouped = group_records(records.into_iter().map(parse_record));

    if options.flatten {
        ParseOutput::Flat(grouped.into_flat())
    } else {
        ParseOutput::Grouped(grouped)
    }
}
