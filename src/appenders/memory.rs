//! In-memory appender, for tests and for capturing output programmatically

use crate::core::{Appender, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every rendered line in memory.
///
/// The buffer is shared: clone the appender before handing it to the logger
/// and read the captured lines from the clone.
///
/// # Examples
///
/// ```
/// use tierlog::prelude::*;
/// use tierlog::appenders::MemoryAppender;
///
/// let capture = MemoryAppender::new();
/// let logger = Logger::builder("t")
///     .timestamps(false)
///     .appender(capture.clone())
///     .build();
/// logger.info("captured");
/// assert_eq!(capture.lines(), vec!["pds.t || INFO | captured"]);
/// ```
#[derive(Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines captured so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, _record: &Record, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn test_shared_buffer() {
        let capture = MemoryAppender::new();
        let mut sink = capture.clone();

        let record = Record::new("pds.test", 0, "INFO", Level::INFO, "hello");
        sink.append(&record, "one").unwrap();
        sink.append(&record, "two").unwrap();

        assert_eq!(capture.lines(), vec!["one", "two"]);
        assert_eq!(capture.len(), 2);

        capture.clear();
        assert!(capture.is_empty());
    }
}
