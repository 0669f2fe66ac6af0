//! Prelude module for convenient error handling imports.
//!
//! This module re-exports the most commonly used types and traits for
//! error handling in AirFuzz.
//!
//! # Example
//!
//! ```
//! use airfuzz_errors::prelude::*;
//!
//! fn load_spec(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(AirFuzzError::config("spec path is empty"));
//!     }
//!     Ok(path.to_string())
//! }
//! ```

pub use crate::{
    PassResult, Result,
    common::{AirFuzzError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    dissect::DissectError,
    module::ModuleError,
    pass::PassError,
};

/// Macro for creating an error with context.
///
/// # Example
///
/// ```
/// use airfuzz_errors::prelude::*;
/// use airfuzz_errors::error_context;
///
/// # fn example() -> Result<()> {
/// let result: std::result::Result<(), AirFuzzError> =
///     Err(AirFuzzError::config("bad value"));
/// let ctx = error_context!("load_spec", "file" => "campaign.yaml");
/// result.context(ctx)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! error_context {
    ($operation:expr, $($key:expr => $value:expr),* $(,)?) => {
        {
            let mut ctx = $crate::ErrorContext::new($operation);
            $(
                ctx = ctx.with($key, $value);
            )*
            ctx
        }
    };
}

/// Macro for early-returning a module error when a condition fails.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}
