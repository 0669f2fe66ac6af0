//! The module hook contract
//!
//! Every test-case module, generated or hand-written, implements
//! [`ModuleHooks`]. The executor drives the hooks in a fixed order and never
//! calls a packet hook before `setup` has succeeded.

use airfuzz_errors::module::ModuleError;

use crate::context::{PacketContext, SetupContext};
use crate::status::{HookStatus, PostStatus};

/// Lifecycle hooks a test-case module exposes to the executor.
///
/// Contract:
///
/// - `setup` runs exactly once per run, before any packet. A failure
///   disables the module for the rest of the run; other modules and the run
///   itself continue.
/// - `pre_dissection` runs once per outgoing packet, before decode. The
///   buffer is read-only here; the decoded element tree does not exist yet,
///   so querying a filter in this phase always reads `false`.
/// - `post_dissection` runs once per packet, after decode results have been
///   recorded. This is the only phase that may write into the buffer.
pub trait ModuleHooks {
    /// Stable identifier used in logs and status reports.
    fn module_name(&self) -> &str;

    /// One-time initialization: compile filters, apply config overrides.
    ///
    /// # Errors
    ///
    /// Any error disables this module; the run is not aborted.
    fn setup(&mut self, ctx: &mut SetupContext<'_>) -> Result<(), ModuleError>;

    /// Per-packet hook before dissection. Registers filter interest and may
    /// vote to suppress the packet.
    fn pre_dissection(&mut self, buf: &[u8], ctx: &mut PacketContext<'_>) -> HookStatus;

    /// Per-packet hook after dissection. May overwrite buffer bytes; reports
    /// whether its filter matched and a patch was attempted.
    fn post_dissection(&mut self, buf: &mut [u8], ctx: &mut PacketContext<'_>) -> PostStatus;
}

impl<M: ModuleHooks + ?Sized> ModuleHooks for Box<M> {
    fn module_name(&self) -> &str {
        (**self).module_name()
    }

    fn setup(&mut self, ctx: &mut SetupContext<'_>) -> Result<(), ModuleError> {
        (**self).setup(ctx)
    }

    fn pre_dissection(&mut self, buf: &[u8], ctx: &mut PacketContext<'_>) -> HookStatus {
        (**self).pre_dissection(buf, ctx)
    }

    fn post_dissection(&mut self, buf: &mut [u8], ctx: &mut PacketContext<'_>) -> PostStatus {
        (**self).post_dissection(buf, ctx)
    }
}
