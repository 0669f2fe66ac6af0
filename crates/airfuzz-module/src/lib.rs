//! Test-case module contract and runtime for AirFuzz
//!
//! A module is one fuzz test case: it declares interest in a decoded
//! protocol element via a named filter and, when an outgoing packet matches,
//! overwrites a fixed set of byte offsets in the raw buffer before
//! transmission.
//!
//! # Lifecycle
//!
//! ```text
//! setup(ctx)                 once: compile filters, optional one-time config flip
//! pre_dissection(buf, ctx)   per packet: register filters
//! [external decode]
//! post_dissection(buf, ctx)  per packet: query, mutate on match, report status
//! ```
//!
//! Status codes cross the harness boundary as integers: `setup` reports
//! 0 = ok / nonzero = fatal (the module is disabled, the run continues), and
//! `post_dissection` reports 0 = unchanged / 1 = mutated.
//!
//! # Data-driven modules
//!
//! The historical corpus is hundreds of generated modules that differ only
//! in a filter name and a patch table. Here that collapses into one generic
//! [`MutatorModule`] executed from a declarative [`ModuleSpec`] record, which
//! can be loaded from JSON or YAML campaign files. Hand-written test cases
//! can still implement [`ModuleHooks`] directly.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod context;
pub mod hooks;
pub mod mutator;
pub mod prelude;
pub mod spec;
pub mod status;

pub use context::{ExecutionContext, PacketContext, RunConfig, SetupContext};
pub use hooks::ModuleHooks;
pub use mutator::MutatorModule;
pub use spec::{ConfigOverride, ModuleSpec, SpecFileError};
pub use status::{HookStatus, ModuleState, PostStatus};
