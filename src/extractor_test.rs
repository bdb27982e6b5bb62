// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for extractor module

use super::extractor::*;
use crate::parser::ParseOptions;
use crate::record_types::{DnsClass, GenericRecord, RecordType};

fn run(lines: &[&str]) -> (Vec<GenericRecord>, ZoneState) {
    run_with(lines, &ParseOptions::default())
}

fn run_with(lines: &[&str], options: &ParseOptions) -> (Vec<GenericRecord>, ZoneState) {
    let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    extract_records(&lines, options)
}

// ========== Type token ==========

#[test]
fn test_find_type_token_basic() {
    let token = find_type_token("www 300 IN A 192.0.2.1").unwrap();
    assert_eq!(token.record_type, RecordType::A);
    assert_eq!(token.start, 11);
    assert_eq!(token.end, 12);
}

#[test]
fn test_find_type_token_takes_last_keyword() {
    // owner name spelled like a type keyword
    let token = find_type_token("ns IN NS ns1.example.com.").unwrap();
    assert_eq!(token.record_type, RecordType::Ns);
    assert_eq!(token.start, 6);
}

#[test]
fn test_find_type_token_ignores_quoted_text() {
    let token = find_type_token(r#"txt IN TXT "an A record MX""#).unwrap();
    assert_eq!(token.record_type, RecordType::Txt);
    assert_eq!(token.start, 7);
    assert_eq!(token.end, 10);
}

#[test]
fn test_find_type_token_case_insensitive() {
    let token = find_type_token("www in cname example.com.").unwrap();
    assert_eq!(token.record_type, RecordType::Cname);
}

#[test]
fn test_find_type_token_none() {
    assert!(find_type_token("www 300 IN BOGUS data").is_none());
    assert!(find_type_token("").is_none());
}

// ========== Prefix resolution ==========

#[test]
fn test_resolve_prefix_no_tokens() {
    let prefix = resolve_prefix(&[], true);
    assert_eq!(prefix.name, None);
    assert_eq!(prefix.ttl, None);
    assert_eq!(prefix.class, None);
}

#[test]
fn test_resolve_prefix_one_token_inherited() {
    let class_only = resolve_prefix(&["CH"], true);
    assert_eq!(class_only.class, Some(DnsClass::CH));
    assert_eq!(class_only.name, None);
    assert_eq!(class_only.ttl, None);

    let ttl_only = resolve_prefix(&["300"], true);
    assert_eq!(ttl_only.ttl, Some("300"));
    assert_eq!(ttl_only.name, None);
    assert_eq!(ttl_only.class, None);
}

#[test]
fn test_resolve_prefix_one_token_named() {
    let prefix = resolve_prefix(&["www"], false);
    assert_eq!(prefix.name, Some("www"));
    assert_eq!(prefix.ttl, None);
    assert_eq!(prefix.class, None);
}

#[test]
fn test_resolve_prefix_two_tokens_inherited() {
    let class_first = resolve_prefix(&["IN", "300"], true);
    assert_eq!(class_first.class, Some(DnsClass::IN));
    assert_eq!(class_first.ttl, Some("300"));
    assert_eq!(class_first.name, None);

    let ttl_first = resolve_prefix(&["300", "HS"], true);
    assert_eq!(ttl_first.ttl, Some("300"));
    assert_eq!(ttl_first.class, Some(DnsClass::HS));
    assert_eq!(ttl_first.name, None);
}

#[test]
fn test_resolve_prefix_two_tokens_named() {
    let with_class = resolve_prefix(&["IN", "www"], false);
    assert_eq!(with_class.class, Some(DnsClass::IN));
    assert_eq!(with_class.name, Some("www"));
    assert_eq!(with_class.ttl, None);

    let with_ttl = resolve_prefix(&["300", "www"], false);
    assert_eq!(with_ttl.ttl, Some("300"));
    assert_eq!(with_ttl.name, Some("www"));
    assert_eq!(with_ttl.class, None);
}

#[test]
fn test_resolve_prefix_three_tokens_either_order() {
    // "www 300 IN A", nearest first
    let ttl_then_class = resolve_prefix(&["IN", "300", "www"], false);
    assert_eq!(ttl_then_class.class, Some(DnsClass::IN));
    assert_eq!(ttl_then_class.ttl, Some("300"));
    assert_eq!(ttl_then_class.name, Some("www"));

    // "www IN 300 A"
    let class_then_ttl = resolve_prefix(&["300", "CS", "www"], false);
    assert_eq!(class_then_ttl.ttl, Some("300"));
    assert_eq!(class_then_ttl.class, Some(DnsClass::CS));
    assert_eq!(class_then_ttl.name, Some("www"));
}

#[test]
fn test_resolve_prefix_invalid_class_is_in() {
    let prefix = resolve_prefix(&["300", "XX", "www"], false);
    assert_eq!(prefix.class, Some(DnsClass::IN));
}

// ========== Helpers ==========

#[test]
fn test_to_fqdn() {
    assert_eq!(to_fqdn("www", "example.com.", true), "www.example.com.");
    assert_eq!(
        to_fqdn("www.example.org.", "example.com.", true),
        "www.example.org."
    );
    assert_eq!(to_fqdn("www", "example.com.", false), "www.example.com");
    assert_eq!(to_fqdn("example.com.", "example.com.", false), "example.com");
}

#[test]
fn test_quoted_segments() {
    assert_eq!(quoted_segments(r#""a" "b c""#), vec!["a", "b c"]);
    assert_eq!(
        quoted_segments(r#""say \"hi\"""#),
        vec![r#"say \"hi\""#]
    );
    assert_eq!(quoted_segments(r#""a" "unterminated"#), vec!["a"]);
    assert!(quoted_segments("no quotes").is_empty());
}

// ========== Line processing ==========

#[test]
fn test_relative_name_is_qualified() {
    let (records, _) = run(&["$ORIGIN example.com.", "www 300 IN A 1.2.3.4"]);

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "www.example.com.");
    assert_eq!(record.ttl, 300);
    assert_eq!(record.class, DnsClass::IN);
    assert_eq!(record.record_type, "A");
    assert_eq!(record.rdata, "1.2.3.4");
}

#[test]
fn test_omitted_name_on_first_record() {
    let (records, _) = run(&["$ORIGIN example.com.", "3600 IN MX 10 mail.example.com."]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "example.com.");
    assert_eq!(records[0].ttl, 3600);
    assert_eq!(records[0].class, DnsClass::IN);
    assert_eq!(records[0].rdata, "10 mail.example.com.");
}

#[test]
fn test_numeric_owner_on_first_record() {
    let (records, _) = run(&[
        "$ORIGIN 2.0.192.in-addr.arpa.",
        "1 PTR host.example.com.",
        "2 PTR other.example.com.",
    ]);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "1.2.0.192.in-addr.arpa.");
    assert_eq!(records[0].ttl, 3600);
    assert_eq!(records[0].rdata, "host.example.com.");
    assert_eq!(records[1].name, "2.2.0.192.in-addr.arpa.");
}

#[test]
fn test_lone_token_on_first_record_is_name() {
    let (records, _) = run(&["$ORIGIN example.com.", "mail A 192.0.2.25"]);

    assert_eq!(records[0].name, "mail.example.com.");
    assert_eq!(records[0].ttl, 3600);
}

#[test]
fn test_numeric_owner_with_ttl_on_first_record() {
    let (records, _) = run(&["$ORIGIN 2.0.192.in-addr.arpa.", "1 300 PTR host.example.com."]);

    assert_eq!(records[0].name, "1.2.0.192.in-addr.arpa.");
    assert_eq!(records[0].ttl, 300);
}

#[test]
fn test_class_then_ttl_on_first_record() {
    let (records, _) = run(&["$ORIGIN example.com.", "IN 600 NS ns1.example.com."]);

    assert_eq!(records[0].name, "example.com.");
    assert_eq!(records[0].ttl, 600);
    assert_eq!(records[0].class, DnsClass::IN);
}

#[test]
fn test_at_sign_is_origin() {
    let (records, _) = run(&["$ORIGIN example.com.", "@ IN NS ns1.example.com."]);
    assert_eq!(records[0].name, "example.com.");
}

#[test]
fn test_owner_inherited_from_previous_record() {
    let (records, state) = run(&[
        "$ORIGIN example.com.",
        "www 300 IN A 192.0.2.1",
        "    IN AAAA 2001:db8::1",
        "    600 TXT \"hello\"",
    ]);

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].name, "www.example.com.");
    assert_eq!(records[1].ttl, 3600);
    assert_eq!(records[2].name, "www.example.com.");
    assert_eq!(records[2].ttl, 600);
    assert_eq!(records[2].rdata, "hello");
    assert_eq!(state.current_owner.as_deref(), Some("www"));
    assert_eq!(state.records_seen, 3);
}

#[test]
fn test_ttl_directive_sets_default() {
    let (records, state) = run(&["$TTL 2h", "$ORIGIN example.com.", "www IN A 192.0.2.1"]);

    assert_eq!(state.current_ttl.as_deref(), Some("2h"));
    assert_eq!(records[0].ttl, 7200);
}

#[test]
fn test_origin_directive_normalized() {
    let (_, state) = run(&["$ORIGIN Example.COM"]);
    assert_eq!(state.zone_origin.as_deref(), Some("example.com."));
}

#[test]
fn test_unsupported_directive_ignored() {
    let (records, state) = run(&["$INCLUDE other.zone", "$GENERATE 1-10 host$ A 10.0.0.$"]);
    assert!(records.is_empty());
    assert_eq!(state, ZoneState::default());
}

#[test]
fn test_soa_sets_origin() {
    let (records, state) = run(&[
        "example.com. IN SOA ns1.example.com. admin.example.com. 1 7200 3600 1209600 3600",
        "www IN A 192.0.2.1",
    ]);

    assert_eq!(state.zone_origin.as_deref(), Some("example.com."));
    assert_eq!(records[0].name, "example.com");
    assert_eq!(records[0].record_type, "SOA");
    assert_eq!(records[1].name, "www.example.com.");
}

#[test]
fn test_soa_does_not_override_origin() {
    let (records, state) = run(&[
        "$ORIGIN example.com.",
        "@ IN SOA ns1.example.com. admin.example.com. 1 7200 3600 1209600 3600",
    ]);

    assert_eq!(state.zone_origin.as_deref(), Some("example.com."));
    assert_eq!(records[0].name, "example.com.");
}

#[test]
fn test_cname_target_qualified() {
    let (records, _) = run(&[
        "$ORIGIN example.com.",
        "www IN CNAME @",
        "ftp IN CNAME files",
    ]);

    assert_eq!(records[0].rdata, "example.com.");
    assert_eq!(records[1].rdata, "files.example.com.");
}

#[test]
fn test_keep_trailing_dot_false() {
    let options = ParseOptions {
        keep_trailing_dot: false,
        ..Default::default()
    };
    let (records, _) = run_with(&["$ORIGIN example.com.", "www IN CNAME web"], &options);

    assert_eq!(records[0].name, "www.example.com");
    assert_eq!(records[0].rdata, "web.example.com");
}

#[test]
fn test_txt_segments_joined() {
    let line = r#"@ IN TXT "x" "y" "z""#;

    let (spaced, _) = run(&["$ORIGIN example.com.", line]);
    assert_eq!(spaced[0].rdata, "x y z");

    let options = ParseOptions {
        preserve_spacing: false,
        ..Default::default()
    };
    let (joined, _) = run_with(&["$ORIGIN example.com.", line], &options);
    assert_eq!(joined[0].rdata, "xyz");
}

#[test]
fn test_non_txt_whitespace_collapsed() {
    let (records, _) = run(&["$ORIGIN example.com.", "@ IN MX    10     mail"]);
    assert_eq!(records[0].rdata, "10 mail");
}

#[test]
fn test_name_lowercased() {
    let (records, _) = run(&["$ORIGIN example.com.", "WWW IN A 192.0.2.1"]);
    assert_eq!(records[0].name, "www.example.com.");
}

#[test]
fn test_unknown_type_line_dropped() {
    let (records, state) = run(&[
        "$ORIGIN example.com.",
        "www IN BOGUS something",
        "www IN A 192.0.2.1",
    ]);

    assert_eq!(records.len(), 1);
    assert_eq!(state.records_seen, 1);
}

#[test]
fn test_process_line_threads_state() {
    let options = ParseOptions::default();
    let (state, record) = process_line(ZoneState::default(), "$ORIGIN example.com.", &options);
    assert!(record.is_none());

    let (state, record) = process_line(state, "mail IN A 192.0.2.25", &options);
    assert_eq!(record.unwrap().name, "mail.example.com.");
    assert_eq!(state.current_owner.as_deref(), Some("mail"));
}
