//! Module lifecycle errors.
//!
//! Failures that occur while loading a test-case module: filter compilation,
//! spec validation, and the one-time `setup` hook. A module that fails here
//! is excluded from the run; the run itself continues.

use crate::common::ErrorSeverity;

/// Errors raised while loading or setting up a module.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModuleError {
    /// A filter name did not resolve to a known element path.
    ///
    /// Fatal for the module, not retried, and never aborts the run.
    #[error("filter '{name}' does not resolve to a known element path")]
    FilterCompile {
        /// The filter name that failed to compile
        name: String,
    },

    /// The module's `setup` hook returned a nonzero (fatal) status.
    #[error("module '{module}' setup failed with status {status}")]
    SetupFailed {
        /// The module's display name
        module: String,
        /// The nonzero status returned by the hook
        status: i32,
    },

    /// A declarative module spec failed validation before setup.
    #[error("invalid module spec '{module}': {reason}")]
    SpecInvalid {
        /// The module's display name
        module: String,
        /// Why the spec was rejected
        reason: String,
    },
}

impl ModuleError {
    /// Create a filter compilation error.
    pub fn filter_compile(name: impl Into<String>) -> Self {
        ModuleError::FilterCompile { name: name.into() }
    }

    /// Create a spec validation error.
    pub fn spec_invalid(module: impl Into<String>, reason: impl Into<String>) -> Self {
        ModuleError::SpecInvalid {
            module: module.into(),
            reason: reason.into(),
        }
    }

    /// Get the error severity.
    ///
    /// Every module error is critical *for that module*: it must be disabled.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Critical
    }

    /// The nonzero status code reported across the harness boundary.
    pub fn status(&self) -> i32 {
        match self {
            ModuleError::FilterCompile { .. } => 1,
            ModuleError::SetupFailed { status, .. } => *status,
            ModuleError::SpecInvalid { .. } => 2,
        }
    }
}
