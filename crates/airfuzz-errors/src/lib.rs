//! Centralized error types for AirFuzz
//!
//! This crate provides the unified error handling system for the AirFuzz
//! harness, covering both module-load-time failures and per-pass faults that
//! must be recovered locally without aborting the run.
//!
//! # Architecture
//!
//! The error system is organized into several modules:
//!
//! - [`common`]: Top-level error types and classifications used across all crates
//! - [`module`]: Module lifecycle errors (filter compilation, setup)
//! - [`pass`]: Per-packet-pass faults with fixed-size, `Copy` semantics
//! - [`dissect`]: Decode-engine contract errors
//!
//! # Recovery policy
//!
//! A module-level fatal error (a filter name that does not compile) disables
//! that module only; the run continues. Per-pass faults such as an
//! out-of-range patch write or an undissectable packet are recovered in place
//! and surface as warning-level diagnostics, never as aborts.
//!
//! # Example
//!
//! ```
//! use airfuzz_errors::prelude::*;
//!
//! fn compile(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(ModuleError::filter_compile(name).into());
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod dissect;
pub mod module;
pub mod pass;
pub mod prelude;

pub use common::{AirFuzzError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt};
pub use dissect::DissectError;
pub use module::ModuleError;
pub use pass::PassError;

/// A specialized `Result` type for AirFuzz operations.
pub type Result<T> = std::result::Result<T, AirFuzzError>;

/// A specialized `Result` type for per-pass operations.
pub type PassResult<T = ()> = std::result::Result<T, PassError>;
