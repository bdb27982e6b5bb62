// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! RDATA builder
//!
//! The inverse of the rdata parsers: pulls a record's fields out in
//! canonical order and formats them as rdata text.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use zonetext::rdata_builder::build_rdata;
//!
//! let fields = json!({ "priority": 10, "exchange": "mail.example.com." });
//! let rdata = build_rdata("MX", fields.as_object().unwrap(), None);
//! assert_eq!(rdata, "10 mail.example.com.");
//! ```

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::field_order::{canonical_fields, lookup, value_text};
use crate::record_types::RecordType;

fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

fn at(values: &[String], idx: usize) -> &str {
    values.get(idx).map_or("", String::as_str)
}

/// Join rdata values according to the quoting rules of the type
pub fn format_rdata_values(record_type: RecordType, values: &[String]) -> String {
    match record_type {
        RecordType::Txt | RecordType::Spf | RecordType::Hinfo => values
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| quote(v))
            .collect::<Vec<_>>()
            .join(" "),
        RecordType::Naptr => [
            at(values, 0).to_string(),
            at(values, 1).to_string(),
            quote(at(values, 2)),
            quote(at(values, 3)),
            quote(at(values, 4)),
            at(values, 5).to_string(),
        ]
        .join(" "),
        RecordType::Caa => [
            at(values, 0).to_string(),
            at(values, 1).to_string(),
            quote(at(values, 2)),
        ]
        .join(" "),
        _ => values
            .iter()
            .filter(|v| !v.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Build the rdata text for a record from its fields
///
/// `field_map` renames canonical field paths to the keys used by `fields`.
/// Unknown types produce empty rdata.
pub fn build_rdata(
    record_type: &str,
    fields: &Map<String, Value>,
    field_map: Option<&HashMap<String, String>>,
) -> String {
    let Some(record_type) = RecordType::parse(record_type) else {
        return String::new();
    };

    let values: Vec<String> = canonical_fields(record_type)
        .iter()
        .map(|canonical| {
            let key = field_map
                .and_then(|m| m.get(*canonical))
                .map_or(*canonical, String::as_str);
            value_text(lookup(fields, key))
        })
        .collect();

    format_rdata_values(record_type, &values)
}
