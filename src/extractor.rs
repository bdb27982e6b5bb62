// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Field extraction and inheritance
//!
//! Each logical line from the sanitizer is either a directive (`$ORIGIN`,
//! `$TTL`) that updates the [`ZoneState`], or a record line of the shape
//!
//! ```text
//! [name] [ttl] [class] TYPE rdata
//! ```
//!
//! where name, TTL and class may each be omitted and TTL/class may appear in
//! either order. The TYPE token anchors the line: everything before it is the
//! prefix that is disambiguated here, everything after it is the rdata.
//!
//! The zone state is threaded explicitly through [`process_line`] and
//! returned alongside each record; nothing is kept between parse calls.

use tracing::debug;

use crate::parser::ParseOptions;
use crate::record_types::{DnsClass, GenericRecord, RecordType};
use crate::ttl::normalize_ttl;

/// Parse-scoped defaults, updated by directives and by every record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneState {
    /// Zone apex used to qualify relative names (`$ORIGIN` or the first SOA owner)
    pub zone_origin: Option<String>,

    /// TTL text from the last `$TTL` directive
    pub current_ttl: Option<String>,

    /// Owner name inherited by records that omit theirs
    pub current_owner: Option<String>,

    /// Number of record lines resolved so far
    pub records_seen: usize,
}

/// Location of the TYPE token within a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeToken {
    pub record_type: RecordType,
    pub start: usize,
    pub end: usize,
}

/// The text a type keyword may be matched in: everything before the first
/// quoted string
fn unquoted_prefix(line: &str) -> &str {
    let mut prev = None;
    for (idx, c) in line.char_indices() {
        if c == '"' && prev != Some('\\') {
            return &line[..idx];
        }
        prev = Some(c);
    }
    line
}

/// Find the last whole-word type keyword outside quoted strings
pub(crate) fn find_type_token(line: &str) -> Option<TypeToken> {
    let searchable = unquoted_prefix(line);
    let mut found = None;
    let mut offset = 0;

    for word in searchable.split_whitespace() {
        // split_whitespace yields subslices, so locate each one after the last
        let start = offset + searchable[offset..].find(word).unwrap_or(0);
        let end = start + word.len();
        offset = end;

        if let Some(record_type) = RecordType::parse(word) {
            found = Some(TypeToken {
                record_type,
                start,
                end,
            });
        }
    }

    found
}

/// Name, TTL and class picked out of the prefix tokens
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Prefix<'a> {
    pub name: Option<&'a str>,
    pub ttl: Option<&'a str>,
    pub class: Option<DnsClass>,
}

fn is_class(token: &str) -> bool {
    DnsClass::parse(token).is_some()
}

fn is_seconds(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Assign prefix tokens to name, TTL and class
///
/// `tokens` are ordered nearest-to-TYPE first. `inherit` means the line left
/// its owner name out (it started with whitespace), so one or two tokens are
/// TTL and/or class rather than a name.
pub(crate) fn resolve_prefix<'a>(tokens: &[&'a str], inherit: bool) -> Prefix<'a> {
    let class_of = |t: &str| Some(DnsClass::parse(t).unwrap_or_default());

    match *tokens {
        [] => Prefix::default(),
        [first] => match (is_class(first), inherit) {
            (true, true) => Prefix {
                class: class_of(first),
                ..Prefix::default()
            },
            (false, true) => Prefix {
                ttl: Some(first),
                ..Prefix::default()
            },
            (_, false) => Prefix {
                name: Some(first),
                ..Prefix::default()
            },
        },
        [first, second] => match (is_class(first), inherit) {
            (true, true) => Prefix {
                ttl: Some(second),
                class: class_of(first),
                name: None,
            },
            (true, false) => Prefix {
                class: class_of(first),
                name: Some(second),
                ..Prefix::default()
            },
            (false, true) => Prefix {
                ttl: Some(first),
                class: class_of(second),
                name: None,
            },
            (false, false) => Prefix {
                ttl: Some(first),
                name: Some(second),
                ..Prefix::default()
            },
        },
        [first, second, third, ..] => {
            if is_class(first) {
                Prefix {
                    ttl: Some(second),
                    class: class_of(first),
                    name: Some(third),
                }
            } else {
                Prefix {
                    ttl: Some(first),
                    class: class_of(second),
                    name: Some(third),
                }
            }
        }
    }
}

/// Qualify a name against the origin
pub fn to_fqdn(name: &str, origin: &str, keep_trailing_dot: bool) -> String {
    let fqdn = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.{}", name, origin)
    };

    if keep_trailing_dot {
        fqdn
    } else {
        match fqdn.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => fqdn,
        }
    }
}

/// Collect the contents of every double-quoted string, escapes left intact
pub fn quoted_segments(rdata: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut chars = rdata.char_indices();

    while let Some((open, c)) = chars.next() {
        if c != '"' {
            continue;
        }

        let mut escaped = false;
        for (idx, c) in chars.by_ref() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                segments.push(&rdata[open + 1..idx]);
                break;
            }
        }
    }

    segments
}

fn apply_directive(mut state: ZoneState, line: &str) -> ZoneState {
    let directive = line.trim().to_lowercase();
    let value = directive.split_whitespace().nth(1);

    if directive.starts_with("$origin") {
        if let Some(origin) = value {
            let origin = if origin.ends_with('.') {
                origin.to_string()
            } else {
                format!("{}.", origin)
            };
            debug!("origin set to {}", origin);
            state.current_owner = Some(origin.clone());
            state.zone_origin = Some(origin);
        }
    } else if directive.starts_with("$ttl") {
        if let Some(ttl) = value {
            debug!("default ttl set to {}", ttl);
            state.current_ttl = Some(ttl.to_string());
        }
    } else {
        debug!("ignoring unsupported directive: {}", line.trim());
    }

    state
}

/// Process one logical line, returning the updated state and the record it
/// produced, if any
///
/// Lines without a recognizable type keyword produce no record.
pub fn process_line(
    mut state: ZoneState,
    line: &str,
    options: &ParseOptions,
) -> (ZoneState, Option<GenericRecord>) {
    if line.starts_with('$') {
        return (apply_directive(state, line), None);
    }

    let Some(token) = find_type_token(line) else {
        debug!("dropping line without a known record type: {}", line.trim());
        return (state, None);
    };

    let prefix = &line[..token.start];
    let rdata = line[token.end..].trim();

    let tokens: Vec<&str> = prefix.split_whitespace().rev().collect();
    let mut inherit = prefix.starts_with(char::is_whitespace);

    // A first record written as `<ttl> <class>` or `<class> <ttl>` has no
    // owner. A lone numeric token stays a name (reverse zones).
    if !inherit && state.records_seen == 0 {
        if let [nearest, leftmost] = tokens[..] {
            inherit = (is_seconds(leftmost) && is_class(nearest))
                || (is_class(leftmost) && is_seconds(nearest));
        }
    }

    let resolved = resolve_prefix(&tokens, inherit);

    let ttl = normalize_ttl(resolved.ttl.or(state.current_ttl.as_deref()));
    let class = resolved.class.unwrap_or_default();
    let mut name = match resolved.name {
        Some(name) => name.to_string(),
        None => state
            .current_owner
            .clone()
            .unwrap_or_else(|| "@".to_string()),
    };

    state.current_owner = Some(name.clone());
    state.records_seen += 1;

    if state.zone_origin.is_none() && token.record_type == RecordType::Soa {
        if let Some(stripped) = name.strip_suffix('.') {
            name = stripped.to_string();
        }
        debug!("zone origin taken from SOA owner {}", name);
        state.zone_origin = Some(format!("{}.", name));
    }

    let origin = state.zone_origin.as_deref().unwrap_or("");

    let mut record_name = name.replacen('@', origin, 1);
    if token.record_type != RecordType::Soa {
        record_name = to_fqdn(&record_name, origin, options.keep_trailing_dot);
    }

    let rdata = if token.record_type.is_text() {
        let joiner = if options.preserve_spacing { " " } else { "" };
        quoted_segments(rdata).join(joiner)
    } else {
        let collapsed = rdata.split_whitespace().collect::<Vec<_>>().join(" ");
        if token.record_type == RecordType::Cname {
            to_fqdn(
                &collapsed.replacen('@', origin, 1),
                origin,
                options.keep_trailing_dot,
            )
        } else {
            collapsed
        }
    };

    let record = GenericRecord {
        name: record_name.to_lowercase(),
        record_type: token.record_type.as_str().to_string(),
        ttl,
        class,
        rdata,
    };

    (state, Some(record))
}

/// Fold every logical line through [`process_line`] with a fresh state
pub fn extract_records(lines: &[String], options: &ParseOptions) -> (Vec<GenericRecord>, ZoneState) {
    lines.iter().fold(
        (Vec::new(), ZoneState::default()),
        |(mut records, state), line| {
            let (state, record) = process_line(state, line, options);
            records.extend(record);
            (records, state)
        },
    )
}
