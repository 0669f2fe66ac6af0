//! Packet pass orchestration and campaign execution for AirFuzz
//!
//! This crate drives loaded test-case modules through the per-packet state
//! machine and turns declarative campaign files into running executors.
//!
//! # Overview
//!
//! - **PacketExecutor**: runs every packet through the phase sequence,
//!   fanning each phase out to the loaded modules
//! - **CampaignValidator**: structural checks on a spec list before loading
//! - **Phase machine**: the legal packet lifecycle, enforced at runtime
//! - **Hash calculation**: deterministic campaign hashing for change detection
//!
//! # Packet lifecycle
//!
//! ```text
//! Created → PreDissection → Dissected → PostDissection → Sent
//!                                                      ↘ Dropped
//! ```
//!
//! Every phase runs for every packet; a drop vote in pre-dissection changes
//! only the final verdict, never the phases in between. A decode failure is
//! recorded and the pass continues with every filter reading unmatched.
//!
//! # Example
//!
//! ```
//! use airfuzz_pipeline::prelude::*;
//! use airfuzz_dissect::{Dissector, ElementTree};
//! use airfuzz_errors::DissectError;
//! use airfuzz_module::ModuleSpec;
//! use std::sync::Arc;
//!
//! struct NullDissector;
//!
//! impl Dissector for NullDissector {
//!     fn knows_path(&self, _path: &str) -> bool {
//!         true
//!     }
//!     fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
//!         Ok(ElementTree::from_paths(["rrc.setup_element".to_owned()]))
//!     }
//! }
//!
//! let specs = vec![ModuleSpec {
//!     name: "demo".to_owned(),
//!     filter: "rrc.setup_element".to_owned(),
//!     patches: vec![(2, 0xff).into()],
//!     offset_base: 0,
//!     config: Default::default(),
//!     diagnostic: None,
//! }];
//!
//! let mut executor = PacketExecutor::from_specs(&specs, Arc::new(NullDissector)).unwrap();
//! executor.setup();
//!
//! let mut buf = vec![0u8; 8];
//! let report = executor.run_packet(&mut buf);
//! assert_eq!(report.verdict, PacketVerdict::Sent);
//! assert_eq!(buf[2], 0xff);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod executor;
pub mod hash;
pub mod phase;
pub mod prelude;
pub mod state;
pub mod types;
pub mod validation;

pub use executor::PacketExecutor;
pub use hash::campaign_hash;
pub use phase::PacketPhase;
pub use state::ExecutorSnapshot;
pub use types::{ModuleReport, PacketVerdict, PassReport};
pub use validation::CampaignValidator;
