//! Convenience re-exports for dissection types.
//!
//! # Example
//!
//! ```
//! use airfuzz_dissect::prelude::*;
//!
//! let registry = FilterRegistry::new();
//! assert!(registry.is_empty());
//! ```

pub use crate::dissector::Dissector;
pub use crate::registry::{Filter, FilterId, FilterRegistry};
pub use crate::tree::{ElementNode, ElementTree};
