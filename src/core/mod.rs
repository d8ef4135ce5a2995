//! Core logging functionality
//!
//! Alias resolution, the admission gate, per-tier tallies, the open/close
//! hierarchy, and record rendering.

pub mod alias;
pub mod appender;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;
pub mod tally;
pub mod tier;

pub use appender::Appender;
pub use error::{Result, TierlogError};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, TierGuard, TierOptions, TierSummary};
pub use record::{format_elapsed, Record, RecordFormat};
pub use tally::{AliasCounts, SeverityCounts};
