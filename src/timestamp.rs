//! Wall-clock prefixes for emitted log lines.

use chrono::{DateTime, Local};

/// Timestamp format with microsecond precision: `2024-03-01 12:00:00.123456`
const FORMAT_MICROS: &str = "%Y-%m-%d %H:%M:%S%.6f";
/// Timestamp format with second precision: `2024-03-01 12:00:00`
const FORMAT_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Precision of the timestamp written in front of each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Seconds,
    #[default]
    Microseconds,
}

impl Precision {
    pub fn from_micros(enabled: bool) -> Self {
        if enabled {
            Precision::Microseconds
        } else {
            Precision::Seconds
        }
    }

    fn format_str(self) -> &'static str {
        match self {
            Precision::Seconds => FORMAT_SECONDS,
            Precision::Microseconds => FORMAT_MICROS,
        }
    }

    /// Width of a rendered timestamp plus the separating space.
    pub fn prefix_width(self) -> usize {
        match self {
            Precision::Seconds => 20,
            Precision::Microseconds => 27,
        }
    }
}

/// Render `now` at the given precision.
pub fn format_timestamp(now: &DateTime<Local>, precision: Precision) -> String {
    now.format(precision.format_str()).to_string()
}

/// Prefix a possibly multi-line message with a timestamp.
///
/// The first emitted line carries the timestamp; later lines are indented by
/// blanks of the same width. Empty lines are dropped. Every emitted line ends
/// with `\n`, and a message with no content renders as `""`.
pub fn timestamped_lines(text: &str, now: &DateTime<Local>, precision: Precision) -> String {
    let indent = " ".repeat(precision.prefix_width());
    let mut out = String::with_capacity(text.len() + indent.len() * 2);

    // The timestamp belongs to the first line of the message, even if that
    // line is empty and gets dropped.
    for (i, line) in text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        if i == 0 {
            out.push_str(&format_timestamp(now, precision));
            out.push(' ');
        } else {
            out.push_str(&indent);
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
