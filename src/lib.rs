// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! zonetext - BIND zone file text to structured records, and back
//!
//! A library that converts BIND-style zone file text into typed DNS
//! records and generates zone file text from structured records.
//!
//! # Features
//!
//! - Tolerant line sanitizer (comments, multi-line parenthesised records)
//! - Owner, TTL and class inheritance with `$ORIGIN` / `$TTL` directives
//! - Typed rdata for 28 record types, from A to RP
//! - Zone file generation with canonical field order and field renaming
//! - HTTP API with Prometheus metrics
//!
//! # Usage
//!
//! ## Parsing
//!
//! ```rust
//! use zonetext::{parse, ParseOptions, RecordData};
//!
//! let zone = r#"
//! $ORIGIN example.com.
//! $TTL 3600
//! @   IN  SOA ns1.example.com. admin.example.com. (
//!             2025010101 ; serial
//!             3600 600 604800 86400 )
//! @   IN  MX  10 mail
//! www 300 IN  A   192.0.2.1
//! "#;
//!
//! let records = parse(zone, &ParseOptions::default());
//! let groups = records.grouped().unwrap();
//!
//! let www = &groups.get("A").unwrap()[0];
//! assert_eq!(www.name(), "www.example.com.");
//! assert_eq!(www.record.ttl, 300);
//! assert_eq!(
//!     www.data,
//!     RecordData::Address { address: "192.0.2.1".to_string() }
//! );
//! ```
//!
//! ## Generating
//!
//! ```rust
//! use zonetext::{generate, GenerateOptions, InputRecord};
//!
//! let records: Vec<InputRecord> = serde_json::from_value(serde_json::json!([
//!     { "name": "example.com.", "type": "NS", "ttl": "1h", "host": "ns1.example.com." }
//! ]))
//! .unwrap();
//!
//! let zone = generate(&records, &GenerateOptions::default());
//! assert!(zone.contains("example.com.\t3600\tIN\tNS\tns1.example.com."));
//! ```
//!
//! ## As a Binary
//!
//! ```bash
//! cargo install zonetext
//! zonetext
//! ```

pub mod extractor;
pub mod field_order;
pub mod generator;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod parser;
pub mod rdata_builder;
pub mod rdata_parser;
pub mod record_types;
pub mod sanitizer;
pub mod ttl;
pub mod types;

// Parsing
pub use parser::{parse, ParseOptions, ParseOutput, RecordsByType};

// Generation
pub use generator::{
    generate, generate_with_clock, to_zone_file, Clock, FixedClock, GenerateOptions, InputRecord,
    SystemClock,
};

// Record model
pub use record_types::{
    DnsClass, Dms, GenericRecord, Hemisphere, RecordData, RecordType, TypedRecord, DEFAULT_TTL,
};

// Error types
pub use types::{ApiError, AppState, ErrorResponse};

// Test modules
#[cfg(test)]
mod extractor_test;
#[cfg(test)]
mod parser_test;
#[cfg(test)]
mod ttl_test;
