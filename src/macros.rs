//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use tierlog::prelude::*;
//! use tierlog::info;
//!
//! let logger = Logger::builder("server").auto_print(false).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message under any registered alias, with automatic formatting.
///
/// Evaluates to a `Result`: an unregistered alias is an error.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::log;
/// log!(logger, "info", "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $alias:expr, $($arg:tt)+) => {
        $logger.log($alias, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::error;
/// error!(logger, "Failed to open index");
/// error!(logger, "Error code: {}, message: {}", 500, "internal");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::fatal;
/// fatal!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// Log a message with alias `normal`, for any ordinary outcome.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::normal;
/// normal!(logger, "Checked {} files", 120);
/// ```
#[macro_export]
macro_rules! normal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.normal(format!($($arg)+))
    };
}

/// Log a hidden message: tallied but never displayed.
///
/// # Examples
///
/// ```
/// # use tierlog::prelude::*;
/// # let logger = Logger::builder("t").auto_print(false).build();
/// use tierlog::hidden;
/// hidden!(logger, "Checked {} bytes", 4096);
/// ```
#[macro_export]
macro_rules! hidden {
    ($logger:expr, $($arg:tt)+) => {
        $logger.hidden(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Logger;

    fn quiet(name: &str) -> Logger {
        Logger::builder(name).auto_print(false).build()
    }

    #[test]
    fn test_log_macro() {
        let logger = quiet("m1");
        log!(logger, "info", "Test message").unwrap();
        log!(logger, "warn", "Formatted: {}", 42).unwrap();
        assert!(log!(logger, "nonesuch", "never").is_err());
    }

    #[test]
    fn test_level_macros() {
        let logger = quiet("m2");
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let counts = logger.summarize();
        assert_eq!(counts.fatal, 1);
        assert_eq!(counts.errors, 1);
        assert_eq!(counts.warnings, 1);
        assert_eq!(counts.total, 5);
    }

    #[test]
    fn test_normal_macro() {
        let logger = quiet("m4");
        normal!(logger, "Checked {} files", 3);
        assert_eq!(logger.alias_counts("normal").unwrap().emitted, 1);
    }

    #[test]
    fn test_hidden_macro_suppressed() {
        let logger = quiet("m3");
        hidden!(logger, "invisible {}", 1);
        let counts = logger.alias_counts("hidden").unwrap();
        assert_eq!(counts.emitted, 0);
        assert_eq!(counts.suppressed, 1);
    }
}
