//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields sorted
//!   alphabetically)
//! - Synchronous, no buffering
//! - INFO/WARN to stdout, ERROR to stderr

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Noteworthy but non-failing conditions
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log a normal-operations event
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_event(Severity::Info, event, fields);
        Self::write_line(&mut io::stdout(), &line);
    }

    /// Log a noteworthy but non-failing condition
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_event(Severity::Warn, event, fields);
        Self::write_line(&mut io::stdout(), &line);
    }

    /// Log an operation failure
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_event(Severity::Error, event, fields);
        Self::write_line(&mut io::stderr(), &line);
    }

    fn write_line<W: Write>(writer: &mut W, line: &str) {
        // One write, one flush; logging never fails the operation it reports on
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Renders one event as a single JSON line with deterministic key order
    fn format_event(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":\"");
        Self::escape_into(&mut output, event);
        output.push_str("\",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted {
            output.push_str(",\"");
            Self::escape_into(&mut output, key);
            output.push_str("\":\"");
            Self::escape_into(&mut output, value);
            output.push('"');
        }

        output.push_str("}\n");
        output
    }

    fn escape_into(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}
