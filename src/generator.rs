// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone file generator
//!
//! Builds BIND-style zone text from loosely structured input records. Each
//! input record carries `name`, `type`, optional `ttl` and `class`, plus the
//! type's rdata fields under their canonical names (or under other names,
//! remapped with [`GenerateOptions::field_map`]).
//!
//! # Examples
//!
//! ```rust
//! use zonetext::generator::{generate, GenerateOptions, InputRecord};
//!
//! let records: Vec<InputRecord> = serde_json::from_str(r#"[
//!     { "name": "example.com.", "type": "A", "ttl": 300, "address": "192.0.2.1" },
//!     { "name": "example.com.", "type": "MX", "priority": 10, "exchange": "mail.example.com." }
//! ]"#).unwrap();
//!
//! let options = GenerateOptions { keep_headers: false, ..Default::default() };
//! let zone = generate(&records, &options);
//! assert!(zone.contains("$ORIGIN example.com."));
//! assert!(zone.contains("example.com.\t300\tIN\tA\t192.0.2.1"));
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;
use utoipa::ToSchema;

use crate::parser::{default_true, RecordsByType};
use crate::rdata_builder::build_rdata;
use crate::record_types::{DnsClass, GenericRecord, TypedRecord, DEFAULT_TTL};
use crate::ttl::normalize_ttl_value;

/// Source of the export timestamp written into the header banner
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A record to be written to a zone file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InputRecord {
    /// Owner name, written as given
    #[serde(default)]
    pub name: String,

    /// Record type (e.g., "A", "MX")
    #[serde(rename = "type")]
    pub record_type: String,

    /// TTL as seconds or a TTL string such as "1h"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<Value>,

    /// Class mnemonic (default: IN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Rdata fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl InputRecord {
    /// Convert a parsed record into generator input
    pub fn from_typed(record: &TypedRecord) -> Result<Self, serde_json::Error> {
        serde_json::to_value(record).and_then(serde_json::from_value)
    }
}

/// Options controlling zone file generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// `$ORIGIN` value (default: the first record's name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// `$TTL` value and TTL for records without one (default: the first
    /// record's TTL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Per type, canonical field path to input field name
    /// (e.g., `{"MX": {"priority": "preference"}}`)
    #[serde(default)]
    pub field_map: HashMap<String, HashMap<String, String>>,

    /// Emit a `;; <TYPE> records` comment before each type block (default: true)
    #[serde(default = "default_true")]
    pub keep_comments: bool,

    /// Emit the informational header banner (default: true)
    #[serde(default = "default_true")]
    pub keep_headers: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            origin: None,
            ttl: None,
            field_map: HashMap::new(),
            keep_comments: true,
            keep_headers: true,
        }
    }
}

impl GenerateOptions {
    fn field_map_for(&self, record_type: &str) -> Option<&HashMap<String, String>> {
        self.field_map
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(record_type))
            .map(|(_, map)| map)
    }
}

/// Reduce an input record to a generic record with built rdata
pub fn prepare_record(record: &InputRecord, options: &GenerateOptions) -> GenericRecord {
    let record_type = record.record_type.to_uppercase();

    let ttl = match record.ttl.as_ref().filter(|v| !v.is_null()) {
        Some(ttl) => normalize_ttl_value(ttl),
        None => options.ttl.unwrap_or(DEFAULT_TTL),
    };

    let class = match record.class.as_deref() {
        Some(class) => DnsClass::parse(class).unwrap_or_else(|| {
            debug!("unknown class {} on {}, using IN", class, record.name);
            DnsClass::IN
        }),
        None => DnsClass::IN,
    };

    let rdata = build_rdata(
        &record_type,
        &record.fields,
        options.field_map_for(&record_type),
    );

    GenericRecord {
        name: record.name.clone(),
        record_type,
        ttl,
        class,
        rdata,
    }
}

/// Generate zone text from input records using the system clock
pub fn generate(records: &[InputRecord], options: &GenerateOptions) -> String {
    generate_with_clock(records, options, &SystemClock)
}

/// Generate zone text, taking the header timestamp from `clock`
pub fn generate_with_clock(
    records: &[InputRecord],
    options: &GenerateOptions,
    clock: &dyn Clock,
) -> String {
    let mut grouped = RecordsByType::new();
    for record in records {
        let prepared = prepare_record(record, options);
        let record_type = prepared.record_type.clone();
        grouped.push(&record_type, prepared);
    }

    debug!("generating zone file for {} records", grouped.len());

    to_zone_file(
        &grouped,
        options.origin.as_deref(),
        options.ttl,
        options.keep_comments,
        options.keep_headers,
        clock,
    )
}

fn header(origin: &str, exported: DateTime<Utc>) -> String {
    let mut header = String::new();
    header.push_str(";;\n");
    header.push_str(&format!(";; Domain:     {}\n", origin));
    header.push_str(&format!(
        ";; Exported:   {}\n",
        exported.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    header.push_str(";;\n");
    header.push_str(&format!(
        ";; Generated by: {} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    header.push_str(";;\n");
    header.push_str(";; ==================================================\n");
    header.push_str(";;\n");
    header.push_str(";; This file is an export for information and archival\n");
    header.push_str(";; purposes. Review it before loading it into a\n");
    header.push_str(";; production name server.\n");
    header.push_str(";;\n");
    header.push_str(";; Zone file syntax is described in RFC 1035 section 5:\n");
    header.push_str(";;   https://www.rfc-editor.org/rfc/rfc1035.txt\n");
    header.push_str(";; and in the BIND 9 documentation:\n");
    header.push_str(";;   https://www.isc.org/bind/\n");
    header.push_str(";;\n");
    header.push_str(";; ==================================================\n");
    header
}

/// Render grouped generic records as zone file text
///
/// `origin` defaults to the first record's name and always ends with a dot
/// when non-empty; `ttl` defaults to the first record's TTL.
pub fn to_zone_file(
    records: &RecordsByType<GenericRecord>,
    origin: Option<&str>,
    ttl: Option<u32>,
    keep_comments: bool,
    keep_headers: bool,
    clock: &dyn Clock,
) -> String {
    let first = records.iter().next().and_then(|(_, group)| group.first());

    let mut origin = origin
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .or_else(|| first.map(|r| r.name.clone()))
        .unwrap_or_default();
    if !origin.is_empty() && !origin.ends_with('.') {
        origin.push('.');
    }

    let ttl = ttl.or_else(|| first.map(|r| r.ttl)).unwrap_or(DEFAULT_TTL);

    let mut zone_file = String::new();

    if keep_headers {
        zone_file.push_str(&header(&origin, clock.now()));
    }

    if !origin.is_empty() {
        zone_file.push_str(&format!("\n$ORIGIN {}", origin));
    }
    if ttl != 0 {
        zone_file.push_str(&format!("\n$TTL {}\n", ttl));
    }

    for (record_type, group) in records.iter() {
        if keep_comments {
            zone_file.push_str(&format!("\n;; {} records\n", record_type));
        } else {
            zone_file.push('\n');
        }

        let lines: Vec<String> = group
            .iter()
            .map(|r| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.name, r.ttl, r.class, r.record_type, r.rdata
                )
            })
            .collect();
        zone_file.push_str(&lines.join("\n"));
        zone_file.push('\n');
    }

    zone_file
}
