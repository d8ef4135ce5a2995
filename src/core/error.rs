//! Error types for the tierlog system

pub type Result<T> = std::result::Result<T, TierlogError>;

#[derive(Debug, thiserror::Error)]
pub enum TierlogError {
    /// An alias that was never registered and is not one of the built-ins
    #[error("Unknown alias '{name}': never registered on this logger")]
    UnknownAlias { name: String },

    /// A close() call with no matching open(); the root tier is never popped
    #[error("Unbalanced close: no matching open() on this logger")]
    UnbalancedContext,

    /// Tier nesting exceeded the configured cap
    #[error("Maximum tier depth of {max} reached")]
    MaxDepthExceeded { max: usize },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer error (generic sink failure)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl TierlogError {
    /// Create an unknown-alias error
    pub fn unknown_alias(name: impl Into<String>) -> Self {
        TierlogError::UnknownAlias { name: name.into() }
    }

    /// Create a max-depth error
    pub fn max_depth(max: usize) -> Self {
        TierlogError::MaxDepthExceeded { max }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        TierlogError::Writer(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TierlogError::unknown_alias("mystery");
        assert!(matches!(err, TierlogError::UnknownAlias { .. }));

        let err = TierlogError::max_depth(6);
        assert!(matches!(err, TierlogError::MaxDepthExceeded { max: 6 }));
    }

    #[test]
    fn test_error_display() {
        let err = TierlogError::unknown_alias("mystery");
        assert_eq!(
            err.to_string(),
            "Unknown alias 'mystery': never registered on this logger"
        );

        let err = TierlogError::UnbalancedContext;
        assert_eq!(
            err.to_string(),
            "Unbalanced close: no matching open() on this logger"
        );

        let err = TierlogError::max_depth(6);
        assert_eq!(err.to_string(), "Maximum tier depth of 6 reached");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: TierlogError = io_err.into();
        assert!(matches!(err, TierlogError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
