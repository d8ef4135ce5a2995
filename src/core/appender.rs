//! Appender trait for log output destinations
//!
//! The logger renders each admitted record into the standardized line format
//! and hands both to every appender. Appender failures are reported and
//! swallowed by the logger; they never reach the logging caller.

use super::{error::Result, record::Record};

pub trait Appender: Send + Sync {
    fn append(&mut self, record: &Record, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
