// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Canonical rdata field order
//!
//! For every supported type, the field paths in the order they appear in the
//! rdata text. These are the same names the rdata parsers produce, so a
//! parsed record can be fed straight back into the generator. Nested LOC
//! fields are addressed with dotted paths such as `latitude.degrees`.

use serde_json::{Map, Value};

use crate::record_types::RecordType;

const LOC_FIELDS: &[&str] = &[
    "latitude.degrees",
    "latitude.minutes",
    "latitude.seconds",
    "latitude.hemisphere",
    "longitude.degrees",
    "longitude.minutes",
    "longitude.seconds",
    "longitude.hemisphere",
    "altitude",
    "size",
    "horizPrecision",
    "vertPrecision",
];

/// Field paths of a type, in rdata order
pub fn canonical_fields(record_type: RecordType) -> &'static [&'static str] {
    match record_type {
        RecordType::A | RecordType::Aaaa => &["address"],
        RecordType::Cname | RecordType::Dname | RecordType::Alias => &["target"],
        RecordType::Ns => &["host"],
        RecordType::Ptr => &["ptrdname"],
        RecordType::Mx => &["priority", "exchange"],
        RecordType::Txt | RecordType::Spf => &["text"],
        RecordType::Hinfo => &["cpu", "os"],
        RecordType::Soa => &[
            "mname", "rname", "serial", "refresh", "retry", "expire", "minimum",
        ],
        RecordType::Srv => &["priority", "weight", "port", "target"],
        RecordType::Naptr => &[
            "order",
            "preference",
            "flags",
            "service",
            "regexp",
            "replacement",
        ],
        RecordType::Caa => &["flag", "tag", "value"],
        RecordType::Loc => LOC_FIELDS,
        RecordType::Ds => &["keyTag", "algorithm", "digestType", "digest"],
        RecordType::Dnskey => &["flags", "protocol", "algorithm", "publicKey"],
        RecordType::Tlsa => &[
            "usage",
            "selector",
            "matchingType",
            "certificateAssociationData",
        ],
        RecordType::Smimea => &["usage", "selector", "matchingType", "certAssociationData"],
        RecordType::Sshfp => &["algorithm", "fingerprintType", "fingerprint"],
        RecordType::Cert => &["certType", "keyTag", "algorithm", "certificate"],
        RecordType::Openpgpkey => &["publicKey"],
        RecordType::Rp => &["mailbox", "txtDomain"],
        RecordType::Https | RecordType::Svcb => &["priority", "target", "params"],
        RecordType::Uri => &["priority", "weight", "target"],
        RecordType::Ipseckey => &[
            "precedence",
            "gatewayType",
            "algorithm",
            "gateway",
            "publicKey",
        ],
    }
}

/// Resolve a possibly dotted path against a record's fields
pub fn lookup<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut keys = path.split('.').map(str::trim).filter(|k| !k.is_empty());
    let mut current = fields.get(keys.next()?)?;

    for key in keys {
        current = current.as_object()?.get(key)?;
    }

    Some(current)
}

/// Render a field value as rdata text; missing, null and structured values
/// render empty
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if n.is_f64() {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                    _ => n.to_string(),
                }
            } else {
                n.to_string()
            }
        }
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
