// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! TTL normalization
//!
//! Zone files write TTLs either as plain seconds (`3600`) or as a number
//! followed by a single unit letter (`1h`, `2d`, `1.5w`). Normalization is
//! total: anything that does not fit one of those shapes becomes
//! [`DEFAULT_TTL`].
//!
//! # Examples
//!
//! ```rust
//! use zonetext::ttl::normalize_ttl;
//!
//! assert_eq!(normalize_ttl(Some("300")), 300);
//! assert_eq!(normalize_ttl(Some("1h")), 3600);
//! assert_eq!(normalize_ttl(Some("1h30m")), 3600);
//! assert_eq!(normalize_ttl(None), 3600);
//! ```

use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, map_res},
    number::complete::double,
    sequence::pair,
    IResult,
};
use serde_json::Value;

pub use crate::record_types::DEFAULT_TTL;

/// Plain seconds: 3600
fn seconds(input: &str) -> IResult<&str, u32> {
    all_consuming(map_res(digit1, str::parse::<u32>))(input)
}

/// Number plus unit letter: 1h, 1.5d
fn with_unit(input: &str) -> IResult<&str, (f64, char)> {
    all_consuming(pair(double, one_of("smhdw")))(input)
}

fn unit_multiplier(unit: char) -> f64 {
    match unit {
        's' => 1.0,
        'm' => 60.0,
        'h' => 3_600.0,
        'd' => 86_400.0,
        _ => 604_800.0,
    }
}

/// Normalize a TTL string to whole seconds
pub fn normalize_ttl(ttl: Option<&str>) -> u32 {
    let Some(ttl) = ttl.map(str::trim).filter(|t| !t.is_empty()) else {
        return DEFAULT_TTL;
    };

    if let Ok((_, secs)) = seconds(ttl) {
        return secs;
    }

    let lowered = ttl.to_ascii_lowercase();
    match with_unit(&lowered) {
        Ok((_, (amount, unit))) => seconds_from_f64(amount * unit_multiplier(unit)),
        Err(_) => DEFAULT_TTL,
    }
}

/// Normalize a TTL given as JSON, either a number of seconds or a TTL string
pub fn normalize_ttl_value(ttl: &Value) -> u32 {
    match ttl {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).unwrap_or(DEFAULT_TTL),
            None => n.as_f64().map_or(DEFAULT_TTL, seconds_from_f64),
        },
        Value::String(s) => normalize_ttl(Some(s.as_str())),
        _ => DEFAULT_TTL,
    }
}

fn seconds_from_f64(value: f64) -> u32 {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        value.floor() as u32
    } else {
        DEFAULT_TTL
    }
}
