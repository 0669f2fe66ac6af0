//! Common error types and utilities used across all AirFuzz crates.
//!
//! This module provides the top-level error enum that can wrap all sub-errors,
//! along with error classification, severity levels, and utility traits.

use core::fmt;

use crate::{DissectError, ModuleError, PassError};

/// Top-level error type that can wrap all AirFuzz sub-errors.
///
/// This enum provides a unified error type for the entire harness, allowing
/// easy error propagation and classification.
#[derive(Debug, thiserror::Error)]
pub enum AirFuzzError {
    /// Module lifecycle errors
    #[error("Module error: {0}")]
    Module(#[from] ModuleError),

    /// Per-pass faults
    #[error("Pass error: {0}")]
    Pass(#[from] PassError),

    /// Decode-engine errors
    #[error("Dissection error: {0}")]
    Dissect(#[from] DissectError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl AirFuzzError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirFuzzError::Module(_) => ErrorCategory::Module,
            AirFuzzError::Pass(_) => ErrorCategory::Pass,
            AirFuzzError::Dissect(_) => ErrorCategory::Dissect,
            AirFuzzError::Io(_) => ErrorCategory::IO,
            AirFuzzError::Config(_) => ErrorCategory::Config,
            AirFuzzError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AirFuzzError::Module(e) => e.severity(),
            AirFuzzError::Pass(e) => e.severity(),
            AirFuzzError::Dissect(e) => e.severity(),
            AirFuzzError::Io(_) => ErrorSeverity::Error,
            AirFuzzError::Config(_) => ErrorSeverity::Error,
            AirFuzzError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable without disabling anything.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Error
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        AirFuzzError::Config(msg.into())
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        AirFuzzError::Other(msg.into())
    }
}

impl From<std::io::Error> for AirFuzzError {
    fn from(e: std::io::Error) -> Self {
        AirFuzzError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Module lifecycle errors
    Module = 0,
    /// Per-pass faults
    Pass = 1,
    /// Decode-engine errors
    Dissect = 2,
    /// Configuration errors
    Config = 3,
    /// I/O errors
    IO = 4,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Module => write!(f, "Module"),
            ErrorCategory::Pass => write!(f, "Pass"),
            ErrorCategory::Dissect => write!(f, "Dissect"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, recovered locally
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, the affected component must be disabled
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Context information for errors.
///
/// Provides additional context for error messages, useful for debugging
/// and error reporting.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped error with the context prepended.
    fn context(self, ctx: ErrorContext) -> Result<T, AirFuzzError>;

    /// Add context with an operation name.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped error with the operation name prepended.
    fn with_context(self, operation: impl Into<String>) -> Result<T, AirFuzzError>;
}

impl<T, E: Into<AirFuzzError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, AirFuzzError> {
        self.map_err(|e| {
            let err: AirFuzzError = e.into();
            AirFuzzError::Other(format!("{ctx}: {err}"))
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, AirFuzzError> {
        self.context(ErrorContext::new(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Module.to_string(), "Module");
        assert_eq!(ErrorCategory::Pass.to_string(), "Pass");
        assert_eq!(ErrorCategory::Dissect.to_string(), "Dissect");
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::Error);
        assert!(ErrorSeverity::Error > ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning > ErrorSeverity::Info);
    }

    #[test]
    fn test_error_context() {
        let ctx = ErrorContext::new("compile_filter")
            .with("module", "mac_sch_865_mut2")
            .with("filter", "nr-rrc.rrcSetup_element");
        assert!(ctx.to_string().contains("compile_filter"));
        assert!(ctx.to_string().contains("nr-rrc.rrcSetup_element"));
    }

    #[test]
    fn test_airfuzz_error_category() {
        let err: AirFuzzError = PassError::DissectionUnavailable.into();
        assert_eq!(err.category(), ErrorCategory::Pass);

        let err = AirFuzzError::config("bad spec");
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_airfuzz_error_is_std_error() {
        let err: AirFuzzError = PassError::OutOfRangeWrite.into();
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), PassError> = Err(PassError::DissectionUnavailable);
        let with_ctx = result.with_context("run_pass");
        let err = match with_ctx {
            Ok(()) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("run_pass"));
    }
}
