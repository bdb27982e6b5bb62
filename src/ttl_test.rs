// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for ttl module

use super::ttl::*;
use serde_json::json;

#[test]
fn test_normalize_ttl_plain_seconds() {
    assert_eq!(normalize_ttl(Some("300")), 300);
    assert_eq!(normalize_ttl(Some("0")), 0);
    assert_eq!(normalize_ttl(Some(" 86400 ")), 86400);
}

#[test]
fn test_normalize_ttl_units() {
    assert_eq!(normalize_ttl(Some("10s")), 10);
    assert_eq!(normalize_ttl(Some("5m")), 300);
    assert_eq!(normalize_ttl(Some("1h")), 3600);
    assert_eq!(normalize_ttl(Some("2d")), 172_800);
    assert_eq!(normalize_ttl(Some("1w")), 604_800);
}

#[test]
fn test_normalize_ttl_units_case_insensitive() {
    assert_eq!(normalize_ttl(Some("1H")), 3600);
    assert_eq!(normalize_ttl(Some("2D")), 172_800);
}

#[test]
fn test_normalize_ttl_fractional_amount() {
    assert_eq!(normalize_ttl(Some("1.5h")), 5400);
}

#[test]
fn test_normalize_ttl_falls_back_to_default() {
    assert_eq!(normalize_ttl(None), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("   ")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("abc")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("1h30m")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("10x")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("-5")), DEFAULT_TTL);
    assert_eq!(normalize_ttl(Some("99999999999")), DEFAULT_TTL);
}

#[test]
fn test_normalize_ttl_idempotent() {
    let inputs = [
        None,
        Some("300"),
        Some("1h"),
        Some("1.5d"),
        Some("2W"),
        Some("garbage"),
        Some("0"),
    ];

    for input in inputs {
        let once = normalize_ttl(input);
        let twice = normalize_ttl(Some(once.to_string().as_str()));
        assert_eq!(once, twice, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_normalize_ttl_value_number() {
    assert_eq!(normalize_ttl_value(&json!(300)), 300);
    assert_eq!(normalize_ttl_value(&json!(0)), 0);
    assert_eq!(normalize_ttl_value(&json!(1.9)), 1);
}

#[test]
fn test_normalize_ttl_value_string() {
    assert_eq!(normalize_ttl_value(&json!("2d")), 172_800);
    assert_eq!(normalize_ttl_value(&json!("600")), 600);
}

#[test]
fn test_normalize_ttl_value_invalid() {
    assert_eq!(normalize_ttl_value(&json!(null)), DEFAULT_TTL);
    assert_eq!(normalize_ttl_value(&json!(-1)), DEFAULT_TTL);
    assert_eq!(normalize_ttl_value(&json!(true)), DEFAULT_TTL);
    assert_eq!(normalize_ttl_value(&json!(5_000_000_000u64)), DEFAULT_TTL);
}
