// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone text sanitizer
//!
//! Turns raw zone file text into logical record lines:
//! - full-line and trailing `;` comments are removed (a `;` inside a quoted
//!   string is data, not a comment)
//! - records continued over several lines with `(` ... `)` are merged
//! - blank lines are dropped and tabs become spaces
//!
//! # Examples
//!
//! ```rust
//! use zonetext::sanitizer::sanitize;
//!
//! let lines = sanitize("foo TXT \"a;b\" ; real comment\n; full line comment\n");
//! assert_eq!(lines, vec!["foo TXT \"a;b\"".to_string()]);
//! ```

use tracing::{debug, warn};

/// Tracks whether a left-to-right scan is inside a quoted string
#[derive(Debug, Default)]
pub(crate) struct QuoteState {
    inside: bool,
    escaped: bool,
}

impl QuoteState {
    /// Feed one character; true when it is significant (outside quotes and
    /// not itself a quote delimiter)
    pub(crate) fn significant(&mut self, c: char) -> bool {
        let escaped = self.escaped;
        self.escaped = c == '\\';

        if c == '"' && !escaped {
            self.inside = !self.inside;
            return false;
        }

        !self.inside
    }
}

/// Remove a trailing comment, keeping any `;` inside quotes
pub fn strip_comment(line: &str) -> &str {
    if !line.contains(';') {
        return line;
    }

    let mut quotes = QuoteState::default();
    for (idx, c) in line.char_indices() {
        if quotes.significant(c) && c == ';' {
            return line[..idx].trim_end();
        }
    }

    line
}

/// Which continuation parentheses appear outside quoted strings
fn parens(line: &str) -> (bool, bool) {
    let mut quotes = QuoteState::default();
    let mut open = false;
    let mut close = false;

    for c in line.chars() {
        if quotes.significant(c) {
            match c {
                '(' => open = true,
                ')' => close = true,
                _ => {}
            }
        }
    }

    (open, close)
}

/// Drop continuation parentheses that sit outside quoted strings
fn remove_parens(line: &str) -> String {
    let mut quotes = QuoteState::default();
    line.chars()
        .filter(|&c| !(quotes.significant(c) && (c == '(' || c == ')')))
        .collect()
}

/// Split zone text into logical record lines
///
/// A record opened with `(` but never closed is discarded with a warning.
pub fn sanitize(input: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut buffer = String::new();
    let mut open = false;

    for line in input.lines() {
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let line = strip_comment(line);
        if line.trim().is_empty() {
            continue;
        }

        let (opens, closes) = parens(line);

        if opens || closes {
            // leading whitespace on the first line marks an inherited owner
            let text = remove_parens(line);
            let text = if buffer.is_empty() {
                text.trim_end()
            } else {
                text.trim()
            };
            buffer.push_str(text);

            if opens && !closes {
                buffer.push(' ');
                open = true;
                continue;
            }

            records.push(buffer.trim_end().to_string());
            buffer.clear();
            open = false;
            continue;
        }

        if open {
            buffer.push_str(line);
            buffer.push(' ');
            continue;
        }

        records.push(line.to_string());
    }

    if open {
        warn!(
            "discarding unterminated parenthesized record: {}",
            buffer.trim()
        );
    }

    debug!("sanitized zone text into {} logical lines", records.len());

    records.into_iter().map(|r| r.replace('\t', " ")).collect()
}
