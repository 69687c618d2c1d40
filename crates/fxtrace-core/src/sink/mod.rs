//! Structured logging boundary.
//!
//! The adapter never talks to a logging backend directly. It builds an
//! [`Entry`] against a [`FieldLogger`], attaches fields or an error, and emits
//! exactly one [`Record`] per level call.

mod entry;
pub mod memory;
pub mod tracing_sink;

pub use entry::Entry;
pub use memory::{CapturedRecord, RecordingSink};
pub use tracing_sink::TracingSink;

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value attached to a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    /// Rendered like Go's `time.Duration`: `0s`, `250µs`, `5ms`, `1.5s`, `1m30s`.
    Duration(Duration),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Duration(d) => f.write_str(&format_duration(*d)),
        }
    }
}

/// Integer part of `value / 10^prec`, plus the fraction with trailing zeros
/// trimmed (empty when the fraction is zero).
fn split_fraction(value: u128, prec: u32) -> (u128, String) {
    let scale = 10u128.pow(prec);
    let frac = value % scale;
    if frac == 0 {
        return (value / scale, String::new());
    }
    let digits = format!("{:0width$}", frac, width = prec as usize);
    (value / scale, format!(".{}", digits.trim_end_matches('0')))
}

fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }
    if nanos < 1_000_000 {
        let (int, frac) = split_fraction(nanos, 3);
        return format!("{}{}µs", int, frac);
    }
    if nanos < 1_000_000_000 {
        let (int, frac) = split_fraction(nanos, 6);
        return format!("{}{}ms", int, frac);
    }

    let (total_secs, frac) = split_fraction(nanos, 9);
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{}h{}m{}{}s", hours, minutes, secs, frac)
    } else if minutes > 0 {
        format!("{}m{}{}s", minutes, secs, frac)
    } else {
        format!("{}{}s", secs, frac)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Str(value.clone())
    }
}

impl From<Duration> for FieldValue {
    fn from(value: Duration) -> Self {
        FieldValue::Duration(value)
    }
}

/// Ordered field list; insertion order is preserved on output.
pub type Fields = Vec<(&'static str, FieldValue)>;

/// A single log record handed to a sink. Borrowed; sinks that keep records
/// must copy what they need.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub fields: &'a [(&'static str, FieldValue)],
    pub error: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

impl<'a> Record<'a> {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'a FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// A field-keyed structured logger.
///
/// Implementations must be safe to call from several threads at once; the
/// adapter shares one sink across every caller and adds no locking.
pub trait FieldLogger: Send + Sync {
    fn emit(&self, record: &Record<'_>);
}
