//! Console appender implementation

use crate::core::{Appender, Level, Record, Result};
use colored::Colorize;

/// Writes rendered lines to the terminal, optionally colorized by level.
///
/// Error-or-worse records go to stderr, everything else to stdout. Coloring
/// applies to the whole line so grep-ability of the format is unaffected
/// when colors are off.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &Record, line: &str) -> Result<()> {
        let output = if self.use_colors && !record.is_blank() {
            line.color(record.level.color_code()).to_string()
        } else {
            line.to_string()
        };

        if record.level >= Level::ERROR {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
