// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for parser module

use super::parser::*;
use crate::rdata_parser::parse_record;
use crate::record_types::{DnsClass, GenericRecord, RecordData};

const ZONE: &str = r#"
$ORIGIN example.com.
$TTL 1h
@       IN  SOA ns1.example.com. hostmaster.example.com. (
                2025010101 ; serial
                7200       ; refresh
                3600       ; retry
                1209600    ; expire
                3600 )     ; minimum
        IN  NS  ns1.example.com.
        IN  NS  ns2.example.com.
        IN  MX  10 mail.example.com.
www  300 IN A   192.0.2.1
mail     IN A   192.0.2.25
ftp      IN CNAME www
@        IN TXT "v=spf1 mx -all"
"#;

fn generic(name: &str, record_type: &str) -> GenericRecord {
    GenericRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl: 3600,
        class: DnsClass::IN,
        rdata: String::new(),
    }
}

#[test]
fn test_parse_options_defaults() {
    let options = ParseOptions::default();
    assert!(!options.flatten);
    assert!(options.preserve_spacing);
    assert!(options.keep_trailing_dot);

    let from_json: ParseOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(from_json, options);

    let partial: ParseOptions = serde_json::from_str(r#"{"flatten": true}"#).unwrap();
    assert!(partial.flatten);
    assert!(partial.keep_trailing_dot);
}

#[test]
fn test_parse_full_zone_grouped() {
    let output = parse(ZONE, &ParseOptions::default());
    let groups = output.grouped().unwrap();

    assert_eq!(
        groups.types().collect::<Vec<_>>(),
        vec!["SOA", "NS", "MX", "A", "CNAME", "TXT"]
    );
    assert_eq!(groups.len(), 8);

    let soa = &groups.get("SOA").unwrap()[0];
    assert_eq!(soa.name(), "example.com.");
    assert_eq!(
        soa.data,
        RecordData::Soa {
            mname: "ns1.example.com.".to_string(),
            rname: "hostmaster.example.com.".to_string(),
            serial: 2025010101,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 3600,
        }
    );

    let ns = groups.get("NS").unwrap();
    assert_eq!(ns.len(), 2);
    assert!(ns.iter().all(|r| r.name() == "example.com."));
    assert!(ns.iter().all(|r| r.record.ttl == 3600));

    let a = groups.get("A").unwrap();
    assert_eq!(a[0].name(), "www.example.com.");
    assert_eq!(a[0].record.ttl, 300);
    assert_eq!(a[1].name(), "mail.example.com.");

    let cname = &groups.get("CNAME").unwrap()[0];
    assert_eq!(
        cname.data,
        RecordData::Target {
            target: "www.example.com.".to_string(),
        }
    );

    let txt = &groups.get("TXT").unwrap()[0];
    assert_eq!(
        txt.data,
        RecordData::Text {
            text: "v=spf1 mx -all".to_string(),
        }
    );
}

#[test]
fn test_parse_flatten_keeps_group_order() {
    let options = ParseOptions {
        flatten: true,
        ..Default::default()
    };
    let output = parse(ZONE, &options);

    assert!(output.grouped().is_none());
    let types: Vec<String> = output
        .into_records()
        .iter()
        .map(|r| r.record_type().to_string())
        .collect();
    assert_eq!(
        types,
        vec!["SOA", "NS", "NS", "MX", "A", "A", "CNAME", "TXT"]
    );
}

#[test]
fn test_parse_multiline_txt() {
    let zone = "$ORIGIN example.com.\na IN TXT ( \"x\"\n\"y\"\n\"z\" )\n";
    let output = parse(zone, &ParseOptions::default());

    let txt = &output.grouped().unwrap().get("TXT").unwrap()[0];
    assert_eq!(txt.name(), "a.example.com.");
    assert_eq!(
        txt.data,
        RecordData::Text {
            text: "x y z".to_string(),
        }
    );
}

#[test]
fn test_parse_empty_input() {
    let output = parse("", &ParseOptions::default());
    assert!(output.is_empty());
    assert_eq!(serde_json::to_string(&output).unwrap(), "{}");

    let flat = parse(
        "; only comments\n",
        &ParseOptions {
            flatten: true,
            ..Default::default()
        },
    );
    assert_eq!(serde_json::to_string(&flat).unwrap(), "[]");
}

#[test]
fn test_grouped_output_serializes_in_first_seen_order() {
    let zone = "$ORIGIN example.com.\n@ IN MX 10 mail\nwww IN A 192.0.2.1\n";
    let json = serde_json::to_string(&parse(zone, &ParseOptions::default())).unwrap();

    let mx = json.find("\"MX\":").unwrap();
    let a = json.find("\"A\":").unwrap();
    assert!(mx < a);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["A"][0]["address"], "192.0.2.1");
    assert_eq!(value["A"][0]["name"], "www.example.com.");
    assert_eq!(value["MX"][0]["priority"], 10);
}

#[test]
fn test_flat_output_serializes_as_array() {
    let zone = "$ORIGIN example.com.\nwww IN A 192.0.2.1\n";
    let options = ParseOptions {
        flatten: true,
        ..Default::default()
    };
    let value = serde_json::to_value(parse(zone, &options)).unwrap();

    assert!(value.is_array());
    assert_eq!(value[0]["type"], "A");
}

#[test]
fn test_records_by_type() {
    let mut grouped = RecordsByType::new();
    assert!(grouped.is_empty());

    grouped.push("A", generic("a.", "A"));
    grouped.push("MX", generic("m.", "MX"));
    grouped.push("A", generic("b.", "A"));

    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped.types().collect::<Vec<_>>(), vec!["A", "MX"]);
    assert_eq!(grouped.get("a").unwrap().len(), 2);
    assert!(grouped.get("TXT").is_none());

    let names: Vec<String> = grouped.into_flat().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["a.", "b.", "m."]);
}

#[test]
fn test_group_records_uppercases_type() {
    let records = vec![
        parse_record(generic("a.", "a")),
        parse_record(generic("b.", "bogus")),
    ];
    let grouped = group_records(records);

    assert_eq!(grouped.types().collect::<Vec<_>>(), vec!["A", "BOGUS"]);
}

#[test]
fn test_parse_drops_unknown_type_lines() {
    let zone = "$ORIGIN example.com.\nwww IN BOGUS data\nwww IN A 192.0.2.1\n";
    let output = parse(zone, &ParseOptions::default());

    assert_eq!(output.len(), 1);
}
