// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! RDATA parsers
//!
//! One parser per supported record type. Each takes the rdata text of a
//! [`GenericRecord`] and returns the type's fields as [`RecordData`].
//!
//! Parsing is lenient: missing fields become empty strings, numeric fields
//! that do not parse become `0` (or the documented LOC default when absent).
//!
//! # Examples
//!
//! ```rust
//! use zonetext::rdata_parser::parse_rdata;
//! use zonetext::record_types::{RecordData, RecordType};
//!
//! let data = parse_rdata(RecordType::Mx, "10 mail.example.com.");
//! assert_eq!(
//!     data,
//!     RecordData::Mx { priority: 10, exchange: "mail.example.com.".to_string() }
//! );
//! ```

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::recognize,
    multi::many1,
    sequence::tuple,
    IResult,
};
use std::str::FromStr;

use crate::record_types::{Dms, GenericRecord, Hemisphere, RecordData, RecordType, TypedRecord};

// ========== Tokenizing ==========

/// A quoted run: "..."
fn quoted(input: &str) -> IResult<&str, &str> {
    recognize(tuple((char('"'), take_while(|c| c != '"'), char('"'))))(input)
}

/// An unquoted run of non-space characters
fn bare(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"')(input)
}

/// One token: bare and quoted runs glued together
fn quoted_token(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((bare, quoted))))(input)
}

/// Split rdata into tokens, keeping quoted strings (spaces included) whole
///
/// A stray unterminated quote is skipped.
pub fn quoted_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        match quoted_token(rest) {
            Ok((remaining, token)) => {
                tokens.push(token);
                rest = remaining;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }

    tokens
}

fn fields(rdata: &str) -> Vec<&str> {
    rdata.split_whitespace().collect()
}

// ========== Field coercion ==========

fn num<T: FromStr + Default>(token: Option<&&str>) -> T {
    token.and_then(|t| t.parse().ok()).unwrap_or_default()
}

fn float(token: &str) -> f64 {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn text(token: Option<&&str>) -> String {
    token.map(|t| t.to_string()).unwrap_or_default()
}

fn rest(parts: &[&str], from: usize, sep: &str) -> String {
    parts.get(from..).map(|p| p.join(sep)).unwrap_or_default()
}

/// Drop one leading and one trailing double quote, if present
fn strip_outer_quotes(value: &str) -> String {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value).to_string()
}

fn remove_quotes(value: &str) -> String {
    value.replace('"', "")
}

// ========== Per-type parsers ==========

pub fn parse_soa(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Soa {
        mname: text(parts.first()),
        rname: text(parts.get(1)),
        serial: num(parts.get(2)),
        refresh: num(parts.get(3)),
        retry: num(parts.get(4)),
        expire: num(parts.get(5)),
        minimum: num(parts.get(6)),
    }
}

pub fn parse_a(rdata: &str) -> RecordData {
    RecordData::Address {
        address: rdata.trim().to_string(),
    }
}

pub fn parse_aaaa(rdata: &str) -> RecordData {
    parse_a(rdata)
}

pub fn parse_ns(rdata: &str) -> RecordData {
    RecordData::Host {
        host: rdata.trim().to_string(),
    }
}

pub fn parse_cname(rdata: &str) -> RecordData {
    RecordData::Target {
        target: rdata.trim().to_string(),
    }
}

pub fn parse_alias(rdata: &str) -> RecordData {
    parse_cname(rdata)
}

pub fn parse_dname(rdata: &str) -> RecordData {
    RecordData::Target {
        target: strip_outer_quotes(rdata.trim()),
    }
}

pub fn parse_ptr(rdata: &str) -> RecordData {
    RecordData::Ptr {
        ptrdname: rdata.trim().to_string(),
    }
}

pub fn parse_txt(rdata: &str) -> RecordData {
    RecordData::Text {
        text: rdata.trim().to_string(),
    }
}

pub fn parse_spf(rdata: &str) -> RecordData {
    RecordData::Text {
        text: strip_outer_quotes(rdata.trim()),
    }
}

pub fn parse_mx(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Mx {
        priority: num(parts.first()),
        exchange: text(parts.get(1)),
    }
}

pub fn parse_srv(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Srv {
        priority: num(parts.first()),
        weight: num(parts.get(1)),
        port: num(parts.get(2)),
        target: text(parts.get(3)),
    }
}

pub fn parse_caa(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Caa {
        flag: num(parts.first()),
        tag: text(parts.get(1)),
        value: strip_outer_quotes(&rest(&parts, 2, " ")),
    }
}

/// One LOC coordinate: degrees [minutes [seconds]] hemisphere
fn loc_coordinate<'a, I>(parts: &mut std::iter::Peekable<I>, latitude: bool) -> Dms
where
    I: Iterator<Item = &'a str>,
{
    let is_hemisphere =
        |t: &str| Hemisphere::parse(t).is_some_and(|h| h.is_latitude() == latitude);

    let degrees = parts.next().map_or(0.0, float);

    let mut minutes = 0.0;
    if parts.peek().is_some_and(|t| !is_hemisphere(*t)) {
        minutes = parts.next().map_or(0.0, float);
    }

    let mut seconds = 0.0;
    if parts.peek().is_some_and(|t| !is_hemisphere(*t)) {
        seconds = parts.next().map_or(0.0, float);
    }

    let mut hemisphere = if latitude { Hemisphere::N } else { Hemisphere::E };
    if let Some(h) = parts.peek().and_then(|t| Hemisphere::parse(t)) {
        if h.is_latitude() == latitude {
            hemisphere = h;
            parts.next();
        }
    }

    Dms {
        degrees,
        minutes,
        seconds,
        hemisphere,
    }
}

/// A LOC measurement in meters, optional trailing `m`
fn meters(token: &str) -> f64 {
    float(token.strip_suffix(&['m', 'M'][..]).unwrap_or(token))
}

pub fn parse_loc(rdata: &str) -> RecordData {
    let mut parts = rdata.split_whitespace().peekable();

    let latitude = loc_coordinate(&mut parts, true);
    let longitude = loc_coordinate(&mut parts, false);

    RecordData::Loc {
        latitude,
        longitude,
        altitude: parts.next().map_or(0.0, meters),
        size: parts.next().map_or(1.0, meters),
        horiz_precision: parts.next().map_or(10_000.0, meters),
        vert_precision: parts.next().map_or(10.0, meters),
    }
}

pub fn parse_ds(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Ds {
        key_tag: num(parts.first()),
        algorithm: num(parts.get(1)),
        digest_type: num(parts.get(2)),
        // hex digests may be split by whitespace
        digest: rest(&parts, 3, ""),
    }
}

pub fn parse_dnskey(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Dnskey {
        flags: num(parts.first()),
        protocol: num(parts.get(1)),
        algorithm: num(parts.get(2)),
        public_key: rest(&parts, 3, " "),
    }
}

pub fn parse_tlsa(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Tlsa {
        usage: num(parts.first()),
        selector: num(parts.get(1)),
        matching_type: num(parts.get(2)),
        certificate_association_data: rest(&parts, 3, " "),
    }
}

pub fn parse_smimea(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Smimea {
        usage: num(parts.first()),
        selector: num(parts.get(1)),
        matching_type: num(parts.get(2)),
        cert_association_data: text(parts.get(3)),
    }
}

pub fn parse_sshfp(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Sshfp {
        algorithm: num(parts.first()),
        fingerprint_type: num(parts.get(1)),
        fingerprint: rest(&parts, 2, ""),
    }
}

pub fn parse_https(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::ServiceBinding {
        priority: num(parts.first()),
        target: text(parts.get(1)),
        params: rest(&parts, 2, " "),
    }
}

pub fn parse_svcb(rdata: &str) -> RecordData {
    parse_https(rdata)
}

pub fn parse_ipseckey(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Ipseckey {
        precedence: num(parts.first()),
        gateway_type: num(parts.get(1)),
        algorithm: num(parts.get(2)),
        gateway: text(parts.get(3)),
        public_key: rest(&parts, 4, " "),
    }
}

pub fn parse_naptr(rdata: &str) -> RecordData {
    let parts = quoted_tokens(rdata);
    let unquoted = |idx: usize, default: &str| {
        parts
            .get(idx)
            .map_or_else(|| default.to_string(), |t| remove_quotes(t))
    };

    RecordData::Naptr {
        order: num(parts.first()),
        preference: num(parts.get(1)),
        flags: unquoted(2, ""),
        service: unquoted(3, ""),
        regexp: unquoted(4, "."),
        replacement: unquoted(5, "."),
    }
}

pub fn parse_cert(rdata: &str) -> RecordData {
    let parts = fields(rdata);
    RecordData::Cert {
        cert_type: num(parts.first()),
        key_tag: num(parts.get(1)),
        algorithm: num(parts.get(2)),
        certificate: rest(&parts, 3, " "),
    }
}

pub fn parse_uri(rdata: &str) -> RecordData {
    let parts = quoted_tokens(rdata);
    RecordData::Uri {
        priority: num(parts.first()),
        weight: num(parts.get(1)),
        target: parts
            .get(2)
            .map(|t| strip_outer_quotes(t))
            .unwrap_or_default(),
    }
}

pub fn parse_hinfo(rdata: &str) -> RecordData {
    let parts = quoted_tokens(rdata);
    let field = |idx: usize| parts.get(idx).map(|t| strip_outer_quotes(t)).unwrap_or_default();

    RecordData::Hinfo {
        cpu: field(0),
        os: field(1),
    }
}

pub fn parse_openpgpkey(rdata: &str) -> RecordData {
    RecordData::Openpgpkey {
        public_key: strip_outer_quotes(rdata.trim()),
    }
}

pub fn parse_rp(rdata: &str) -> RecordData {
    let parts = quoted_tokens(rdata);
    let field = |idx: usize| parts.get(idx).map(|t| strip_outer_quotes(t)).unwrap_or_default();

    RecordData::Rp {
        mailbox: field(0),
        txt_domain: field(1),
    }
}

// ========== Registry ==========

/// Dispatch rdata to the parser for its type
pub fn parse_rdata(record_type: RecordType, rdata: &str) -> RecordData {
    match record_type {
        RecordType::Soa => parse_soa(rdata),
        RecordType::A => parse_a(rdata),
        RecordType::Aaaa => parse_aaaa(rdata),
        RecordType::Cname => parse_cname(rdata),
        RecordType::Mx => parse_mx(rdata),
        RecordType::Ns => parse_ns(rdata),
        RecordType::Txt => parse_txt(rdata),
        RecordType::Srv => parse_srv(rdata),
        RecordType::Ptr => parse_ptr(rdata),
        RecordType::Caa => parse_caa(rdata),
        RecordType::Spf => parse_spf(rdata),
        RecordType::Loc => parse_loc(rdata),
        RecordType::Ds => parse_ds(rdata),
        RecordType::Dnskey => parse_dnskey(rdata),
        RecordType::Tlsa => parse_tlsa(rdata),
        RecordType::Sshfp => parse_sshfp(rdata),
        RecordType::Https => parse_https(rdata),
        RecordType::Ipseckey => parse_ipseckey(rdata),
        RecordType::Alias => parse_alias(rdata),
        RecordType::Naptr => parse_naptr(rdata),
        RecordType::Cert => parse_cert(rdata),
        RecordType::Smimea => parse_smimea(rdata),
        RecordType::Svcb => parse_svcb(rdata),
        RecordType::Uri => parse_uri(rdata),
        RecordType::Dname => parse_dname(rdata),
        RecordType::Hinfo => parse_hinfo(rdata),
        RecordType::Openpgpkey => parse_openpgpkey(rdata),
        RecordType::Rp => parse_rp(rdata),
    }
}

/// Layer typed fields onto a generic record
///
/// Records of an unsupported type keep their common fields only, with the
/// type upper-cased.
pub fn parse_record(mut record: GenericRecord) -> TypedRecord {
    record.record_type = record.record_type.to_uppercase();

    let data = match record.known_type() {
        Some(record_type) => parse_rdata(record_type, &record.rdata),
        None => RecordData::Unknown {},
    };

    TypedRecord { record, data }
}
