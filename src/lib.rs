//! # Tierlog
//!
//! A hierarchical logging facility for long-running batch pipelines, where a
//! single run touches many nested units of work and repetitive per-file
//! messages would otherwise drown the log.
//!
//! ## Features
//!
//! - **Named Aliases**: severity names decoupled from numeric levels, with
//!   domain aliases (`ds_store`, `dot_`, `invisible`, `normal`) built in
//! - **Message Limits**: per-alias caps with suppressed-count tallies, so a
//!   capped log still reports how much it withheld
//! - **Hierarchy**: `open()`/`close()` tiers with headers, per-tier tallies,
//!   elapsed times, and upward count aggregation
//! - **Thread Safe**: one logger instance shared across threads
//!
//! ## Example
//!
//! ```
//! use tierlog::prelude::*;
//!
//! let logger = Logger::builder("validation")
//!     .auto_print(false)
//!     .limit("ds_store", Some(2))
//!     .build();
//!
//! logger.open("Checking volume v1").unwrap();
//! logger.info("index found");
//! for _ in 0..5 {
//!     logger.ds_store("extraneous file");
//! }
//! let summary = logger.close().unwrap();
//! assert_eq!(
//!     summary.lines,
//!     vec!["2 DS_STORE messages (3 suppressed)", "1 INFO message"]
//! );
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::appenders::{FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Level, Logger, LoggerBuilder, Record, RecordFormat, Result, TierGuard,
        TierOptions, TierSummary, TierlogError,
    };
}

#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
pub use crate::appenders::{FileAppender, MemoryAppender};
pub use crate::core::logger::{DEFAULT_MAX_DEPTH, DEFAULT_PREFIX};
pub use crate::core::{
    format_elapsed, AliasCounts, Appender, Level, Logger, LoggerBuilder, Record, RecordFormat,
    Result, SeverityCounts, TierGuard, TierOptions, TierSummary, TierlogError,
};
