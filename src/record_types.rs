// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record data types shared by the parse and generate paths
//!
//! A zone file line is first reduced to a [`GenericRecord`] (owner name, TTL,
//! class, type and the raw rdata text). The per-type rdata parsers then layer
//! the typed fields on top of it, producing a [`TypedRecord`].
//!
//! Serialized records are flat JSON objects:
//!
//! ```json
//! { "name": "example.com.", "type": "MX", "ttl": 3600, "class": "IN",
//!   "rdata": "10 mail.example.com.", "priority": 10, "exchange": "mail.example.com." }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// TTL used when neither the record nor a `$TTL` directive provides one
pub const DEFAULT_TTL: u32 = 3600;

/// DNS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DnsClass {
    #[default]
    IN, // Internet
    CH, // Chaos
    CS, // CSNET
    HS, // Hesiod
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::CS => "CS",
            DnsClass::HS => "HS",
        }
    }

    /// Parse a class mnemonic, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "IN" => Some(DnsClass::IN),
            "CH" => Some(DnsClass::CH),
            "CS" => Some(DnsClass::CS),
            "HS" => Some(DnsClass::HS),
            _ => None,
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record types understood by the zone text engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Mx,
    Ns,
    Txt,
    Srv,
    Ptr,
    Soa,
    Ds,
    Dnskey,
    Tlsa,
    Sshfp,
    Https,
    Ipseckey,
    Alias,
    Spf,
    Naptr,
    Cert,
    Loc,
    Smimea,
    Svcb,
    Uri,
    Dname,
    Hinfo,
    Openpgpkey,
    Rp,
}

impl RecordType {
    /// Every supported type, in keyword-table order
    pub const ALL: [RecordType; 28] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Caa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Ns,
        RecordType::Txt,
        RecordType::Srv,
        RecordType::Ptr,
        RecordType::Soa,
        RecordType::Ds,
        RecordType::Dnskey,
        RecordType::Tlsa,
        RecordType::Sshfp,
        RecordType::Https,
        RecordType::Ipseckey,
        RecordType::Alias,
        RecordType::Spf,
        RecordType::Naptr,
        RecordType::Cert,
        RecordType::Loc,
        RecordType::Smimea,
        RecordType::Svcb,
        RecordType::Uri,
        RecordType::Dname,
        RecordType::Hinfo,
        RecordType::Openpgpkey,
        RecordType::Rp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
            RecordType::Srv => "SRV",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Ds => "DS",
            RecordType::Dnskey => "DNSKEY",
            RecordType::Tlsa => "TLSA",
            RecordType::Sshfp => "SSHFP",
            RecordType::Https => "HTTPS",
            RecordType::Ipseckey => "IPSECKEY",
            RecordType::Alias => "ALIAS",
            RecordType::Spf => "SPF",
            RecordType::Naptr => "NAPTR",
            RecordType::Cert => "CERT",
            RecordType::Loc => "LOC",
            RecordType::Smimea => "SMIMEA",
            RecordType::Svcb => "SVCB",
            RecordType::Uri => "URI",
            RecordType::Dname => "DNAME",
            RecordType::Hinfo => "HINFO",
            RecordType::Openpgpkey => "OPENPGPKEY",
            RecordType::Rp => "RP",
        }
    }

    /// Parse a type mnemonic, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        RecordType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// TXT and SPF carry quoted character-strings instead of plain tokens
    pub fn is_text(&self) -> bool {
        matches!(self, RecordType::Txt | RecordType::Spf)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record reduced to its common fields, rdata left as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericRecord {
    /// Owner name, lower-cased and qualified against the zone origin
    pub name: String,

    /// Upper-cased type mnemonic
    #[serde(rename = "type")]
    pub record_type: String,

    /// TTL in seconds
    pub ttl: u32,

    pub class: DnsClass,

    /// Everything after the type token
    pub rdata: String,
}

impl GenericRecord {
    /// The supported type this record carries, if any
    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::parse(&self.record_type)
    }
}

/// LOC hemisphere letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::N => "N",
            Hemisphere::S => "S",
            Hemisphere::E => "E",
            Hemisphere::W => "W",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "N" | "n" => Some(Hemisphere::N),
            "S" | "s" => Some(Hemisphere::S),
            "E" | "e" => Some(Hemisphere::E),
            "W" | "w" => Some(Hemisphere::W),
            _ => None,
        }
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::N | Hemisphere::S)
    }
}

/// Degrees, minutes, seconds and hemisphere of one LOC coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

/// Type-specific fields of a parsed record
///
/// Field names serialize in camelCase and match the canonical generation
/// field order for the type, see [`crate::field_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    /// A and AAAA
    Address { address: String },
    /// NS
    Host { host: String },
    /// CNAME, ALIAS and DNAME
    Target { target: String },
    Ptr { ptrdname: String },
    /// TXT and SPF
    Text { text: String },
    Mx { priority: u16, exchange: String },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Caa { flag: u8, tag: String, value: String },
    #[serde(rename_all = "camelCase")]
    Loc {
        latitude: Dms,
        longitude: Dms,
        altitude: f64,
        size: f64,
        horiz_precision: f64,
        vert_precision: f64,
    },
    #[serde(rename_all = "camelCase")]
    Ds {
        key_tag: u16,
        algorithm: u8,
        digest_type: u8,
        digest: String,
    },
    #[serde(rename_all = "camelCase")]
    Dnskey {
        flags: u16,
        protocol: u8,
        algorithm: u8,
        public_key: String,
    },
    #[serde(rename_all = "camelCase")]
    Tlsa {
        usage: u8,
        selector: u8,
        matching_type: u8,
        certificate_association_data: String,
    },
    #[serde(rename_all = "camelCase")]
    Smimea {
        usage: u8,
        selector: u8,
        matching_type: u8,
        cert_association_data: String,
    },
    #[serde(rename_all = "camelCase")]
    Sshfp {
        algorithm: u8,
        fingerprint_type: u8,
        fingerprint: String,
    },
    /// HTTPS and SVCB
    ServiceBinding {
        priority: u16,
        target: String,
        params: String,
    },
    #[serde(rename_all = "camelCase")]
    Ipseckey {
        precedence: u8,
        gateway_type: u8,
        algorithm: u8,
        gateway: String,
        public_key: String,
    },
    Naptr {
        order: u16,
        preference: u16,
        flags: String,
        service: String,
        regexp: String,
        replacement: String,
    },
    #[serde(rename_all = "camelCase")]
    Cert {
        cert_type: u16,
        key_tag: u16,
        algorithm: u8,
        certificate: String,
    },
    Uri {
        priority: u16,
        weight: u16,
        target: String,
    },
    Hinfo { cpu: String, os: String },
    #[serde(rename_all = "camelCase")]
    Openpgpkey { public_key: String },
    #[serde(rename_all = "camelCase")]
    Rp { mailbox: String, txt_domain: String },
    /// Types without a registered parser carry only the common fields
    Unknown {},
}

/// A generic record plus the fields derived from its rdata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedRecord {
    #[serde(flatten)]
    pub record: GenericRecord,

    #[serde(flatten)]
    pub data: RecordData,
}

impl TypedRecord {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn record_type(&self) -> &str {
        &self.record.record_type
    }
}
