//! Convenience re-exports for module authors and the executor.
//!
//! ```
//! use airfuzz_module::prelude::*;
//! ```

pub use crate::context::{ExecutionContext, PacketContext, RunConfig, SetupContext};
pub use crate::hooks::ModuleHooks;
pub use crate::mutator::MutatorModule;
pub use crate::spec::{
    specs_from_json, specs_from_path, specs_from_yaml, ConfigOverride, ModuleSpec, SpecFileError,
};
pub use crate::status::{HookStatus, ModuleState, PostStatus};
