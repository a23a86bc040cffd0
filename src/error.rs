//! Unified error types for devrank.
//!
//! The scoring core never errors - missing or malformed specification text
//! is a missing signal, absorbed by defaulting. These types serve the
//! layers around it: catalog ingestion, configuration, and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devrank operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DevRankError {
    /// Errors during catalog parsing
    #[error("Failed to parse catalog: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Catalog document holds no device array")]
    NoDevices,
}

/// Convenient Result type for devrank operations
pub type Result<T> = std::result::Result<T, DevRankError>;

impl DevRankError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for DevRankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DevRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension traits
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, creating
/// a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DevRankError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: DevRankError, new_ctx: &str) -> DevRankError {
    match err {
        DevRankError::Parse {
            context: existing,
            source,
        } => DevRankError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DevRankError::Io {
            path,
            message,
            source,
        } => DevRankError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DevRankError::Config(msg) => DevRankError::Config(chain_context(new_ctx, &msg)),
        DevRankError::Validation(msg) => DevRankError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| DevRankError::Validation(context.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DevRankError::parse("at catalog.json", ParseErrorKind::NoDevices);
        assert!(err.to_string().contains("parse"));

        let err = DevRankError::parse(
            "device entry",
            ParseErrorKind::MissingField {
                field: "id".to_string(),
                context: "device".to_string(),
            },
        );
        assert!(err.to_string().contains("device entry"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DevRankError::io("/path/to/catalog.json", io_err);
        assert!(err.to_string().contains("/path/to/catalog.json"));
    }

    #[test]
    fn test_context_chaining() {
        fn inner() -> Result<()> {
            Err(DevRankError::parse("base", ParseErrorKind::NoDevices))
        }
        fn outer() -> Result<()> {
            inner().context("loading fleet catalog")
        }

        match outer() {
            Err(DevRankError::Parse { context, .. }) => {
                assert!(context.contains("loading fleet catalog"), "{context}");
                assert!(context.contains("base"), "{context}");
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");
    }

    #[test]
    fn test_option_context() {
        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(DevRankError::Validation(msg)) => assert_eq!(msg, "missing value"),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "inner"), "outer: inner");
    }
}
