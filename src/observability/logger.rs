//! Structured JSON logger
//!
//! - Every event is a single JSON line
//! - Key order is fixed: event, severity, then fields sorted by key
//! - Writes are synchronous and unbuffered
//! - INFO/WARN go to stdout, ERROR to stderr

use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Routine operations
    Info = 0,
    /// Rejected input, recoverable issues
    Warn = 1,
    /// Store and handler failures
    Error = 2,
}

impl Severity {
    /// Uppercase label as it appears in log output
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

/// A structured logger that outputs one JSON object per line
///
/// Output is deterministic: the same event with the same fields always
/// produces byte-identical output, regardless of field order at the
/// call site.
pub struct Logger;

impl Logger {
    /// Emits one event line on stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Emits one event line on stderr, used for failures
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Shared rendering path over any writer
    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // JSON is assembled by hand so key order stays fixed: event,
        // severity, then fields alphabetically
        let mut line = String::with_capacity(128);

        line.push('{');
        push_pair(&mut line, "event", event);
        line.push(',');
        push_pair(&mut line, "severity", severity.as_str());

        let mut ordered: Vec<&(&str, &str)> = fields.iter().collect();
        ordered.sort_by_key(|(key, _)| *key);

        for (key, value) in ordered {
            line.push(',');
            push_pair(&mut line, key, value);
        }

        line.push_str("}\n");

        // One write call per line so concurrent handlers never interleave
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Appends `"key":"value"` with JSON escaping on both halves
fn push_pair(line: &mut String, key: &str, value: &str) {
    line.push('"');
    push_escaped(line, key);
    line.push_str("\":\"");
    push_escaped(line, value);
    line.push('"');
}

fn push_escaped(line: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(line, "\\u{:04x}", c as u32);
            }
            c => line.push(c),
        }
    }
}

/// Renders one log line into a buffer so tests can assert exact bytes
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
