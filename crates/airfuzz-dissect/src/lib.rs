//! Dissection contract and filter registry for AirFuzz
//!
//! This crate provides the decode-side plumbing of the mutation harness:
//!
//! - **ElementTree**: the structured form of one decoded packet
//! - **Dissector**: the contract the external decode engine implements
//! - **FilterRegistry**: compiles named filter predicates once, deduplicates
//!   them by name across modules, and answers per-packet match queries
//!
//! # Per-packet cycle
//!
//! ```text
//! begin_packet() → register(filter)* → [external decode] → evaluate(tree) → query(filter)*
//! ```
//!
//! A filter compiled once at module setup is reused for every packet. The
//! registry owns the per-packet active set and match cache; `query` before
//! `evaluate`, or for an unregistered filter, is defined to return false.
//!
//! # Example
//!
//! ```
//! use airfuzz_dissect::{Dissector, ElementTree, FilterRegistry};
//! # use airfuzz_errors::DissectError;
//! # struct Stub;
//! # impl Dissector for Stub {
//! #     fn knows_path(&self, path: &str) -> bool { path == "nr-rrc.rrcSetup_element" }
//! #     fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
//! #         Ok(ElementTree::from_paths(["nr-rrc.rrcSetup_element"]))
//! #     }
//! # }
//!
//! let dissector = Stub;
//! let mut registry = FilterRegistry::new();
//! let filter = registry.compile(&dissector, "nr-rrc.rrcSetup_element").unwrap();
//!
//! registry.begin_packet();
//! registry.register(&filter);
//! let tree = dissector.dissect(&[0u8; 4]).unwrap();
//! registry.evaluate(Some(&tree));
//! assert!(registry.query(&filter));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dissector;
pub mod prelude;
pub mod registry;
pub mod tree;

pub use dissector::Dissector;
pub use registry::{Filter, FilterId, FilterRegistry};
pub use tree::ElementTree;
