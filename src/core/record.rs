//! Log records and the standardized line format
//!
//! A `Record` is produced per admitted message and handed to the sinks; the
//! core does not retain it. `RecordFormat` renders a record into the
//! standardized line format, which external consumers parse and therefore
//! must be reproduced exactly:
//!
//! ```text
//! <timestamp> | <name> |<tier-markers>| <LABEL> | <text>[: <detail>]
//! ```
//!
//! Tier markers are one `-` per nesting depth beyond the root, bracketed by
//! `|`. Summary lines use label `SUMMARY`, headers `HEADER`.

use super::level::Level;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One log record, ephemeral, produced per admitted message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: DateTime<Local>,
    pub logger_name: String,
    /// Nesting depth beyond the root at which the record was emitted
    pub depth: usize,
    /// Alias or level name, upper case ("INFO", "HEADER", "SUMMARY", ...)
    pub label: String,
    pub level: Level,
    pub text: String,
    /// Optional trailing detail, typically a file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Record {
    /// Sanitize log text to prevent log injection.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a message can never masquerade as additional records.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        logger_name: impl Into<String>,
        depth: usize,
        label: impl Into<String>,
        level: Level,
        text: &str,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            logger_name: logger_name.into(),
            depth,
            label: label.into(),
            level,
            text: Self::sanitize(text),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail.map(|d| Self::sanitize(&d));
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// True for the blank separator records emitted after a tier closes
    pub fn is_blank(&self) -> bool {
        self.label.is_empty() && self.text.is_empty()
    }
}

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Configuration for rendering records into the standardized line format.
#[derive(Debug, Clone)]
pub struct RecordFormat {
    /// Include the time tag
    pub timestamps: bool,
    /// Fractional digits in the seconds field, 0 to 6
    pub digits: usize,
    /// Include the logger name
    pub lognames: bool,
    /// Include this process ID
    pub pid: Option<u32>,
    /// Include the tier markers
    pub indent: bool,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            timestamps: true,
            digits: 6,
            lognames: true,
            pid: None,
            indent: true,
        }
    }
}

impl RecordFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    #[must_use]
    pub fn with_lognames(mut self, lognames: bool) -> Self {
        self.lognames = lognames;
        self
    }

    #[must_use]
    pub fn with_pid(mut self, pid: Option<u32>) -> Self {
        self.pid = pid;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Render a record into the standardized line format.
    pub fn render(&self, record: &Record) -> String {
        if record.is_blank() {
            return String::new();
        }

        let mut parts: Vec<String> = Vec::new();
        if self.timestamps {
            let full = record.timestamp.format(TIME_FMT).to_string();
            let digits = self.digits.min(6);
            let timetag = if digits == 0 {
                full[..19].to_string()
            } else {
                full[..20 + digits].to_string()
            };
            parts.push(timetag);
            parts.push(" | ".to_string());
        }

        if self.lognames {
            parts.push(record.logger_name.clone());
            parts.push(" | ".to_string());
        }

        if let Some(pid) = self.pid {
            parts.push(pid.to_string());
            parts.push(" | ".to_string());
        }

        if self.indent {
            if let Some(last) = parts.last_mut() {
                *last = " |".to_string();
            }
            parts.push("-".repeat(record.depth));
            parts.push("| ".to_string());
        }

        parts.push(record.label.clone());
        parts.push(" | ".to_string());
        parts.push(record.text.clone());

        if let Some(detail) = &record.detail {
            parts.push(": ".to_string());
            parts.push(detail.clone());
        }

        parts.concat()
    }
}

/// Format an elapsed duration as `H:MM:SS.ffffff`, omitting the fraction
/// when it is zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let micros = elapsed.subsec_micros();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record(depth: usize) -> Record {
        let timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456);
        Record::new("pds.test", depth, "INFO", Level::INFO, "something happened")
            .with_timestamp(timestamp)
    }

    #[test]
    fn test_render_full_line() {
        let format = RecordFormat::new();
        assert_eq!(
            format.render(&fixed_record(0)),
            "2025-01-08 10:30:45.123456 | pds.test || INFO | something happened"
        );
    }

    #[test]
    fn test_render_tier_markers() {
        let format = RecordFormat::new();
        assert_eq!(
            format.render(&fixed_record(2)),
            "2025-01-08 10:30:45.123456 | pds.test |--| INFO | something happened"
        );
    }

    #[test]
    fn test_render_digit_truncation() {
        let format = RecordFormat::new().with_digits(3);
        assert_eq!(
            format.render(&fixed_record(0)),
            "2025-01-08 10:30:45.123 | pds.test || INFO | something happened"
        );

        let format = RecordFormat::new().with_digits(0);
        assert_eq!(
            format.render(&fixed_record(0)),
            "2025-01-08 10:30:45 | pds.test || INFO | something happened"
        );
    }

    #[test]
    fn test_render_without_timestamps() {
        let format = RecordFormat::new().with_timestamps(false);
        assert_eq!(
            format.render(&fixed_record(1)),
            "pds.test |-| INFO | something happened"
        );
    }

    #[test]
    fn test_render_without_indent() {
        let format = RecordFormat::new().with_timestamps(false).with_indent(false);
        assert_eq!(
            format.render(&fixed_record(1)),
            "pds.test | INFO | something happened"
        );
    }

    #[test]
    fn test_render_with_pid() {
        let format = RecordFormat::new().with_timestamps(false).with_pid(Some(4242));
        assert_eq!(
            format.render(&fixed_record(0)),
            "pds.test | 4242 || INFO | something happened"
        );
    }

    #[test]
    fn test_render_detail() {
        let format = RecordFormat::new().with_timestamps(false);
        let record = fixed_record(0).with_detail(Some("holdings/file.dat".to_string()));
        assert_eq!(
            format.render(&record),
            "pds.test || INFO | something happened: holdings/file.dat"
        );
    }

    #[test]
    fn test_render_blank() {
        let format = RecordFormat::new();
        let record = Record::new("pds.test", 0, "", Level::INFO, "");
        assert_eq!(format.render(&record), "");
    }

    #[test]
    fn test_sanitize_injection() {
        let record = Record::new(
            "pds.test",
            0,
            "INFO",
            Level::INFO,
            "line one\nFAKE | injected\twide",
        );
        assert!(!record.text.contains('\n'));
        assert!(record.text.contains("\\n"));
        assert!(record.text.contains("\\t"));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "0:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(
            format_elapsed(Duration::new(1, 234_567_000)),
            "0:00:01.234567"
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = fixed_record(1);
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["logger_name"], "pds.test");
        assert_eq!(json["depth"], 1);
        assert_eq!(json["label"], "INFO");
        assert_eq!(json["level"], 20);
        assert!(json.get("detail").is_none());
    }
}
