//! Convenience re-exports for campaign drivers.
//!
//! ```
//! use airfuzz_pipeline::prelude::*;
//! ```

pub use crate::executor::PacketExecutor;
pub use crate::hash::{campaign_hash, spec_hash};
pub use crate::phase::PacketPhase;
pub use crate::state::ExecutorSnapshot;
pub use crate::types::{ModuleReport, PacketVerdict, PassReport};
pub use crate::validation::CampaignValidator;
