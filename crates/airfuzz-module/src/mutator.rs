//! Generic spec-driven mutator module
//!
//! [`MutatorModule`] is the runtime behind every declarative test case: it
//! compiles the spec's filter during setup, registers it each packet, and on
//! a post-dissection match stamps the spec's patch table into the outgoing
//! buffer.

use airfuzz_dissect::Filter;
use airfuzz_errors::module::ModuleError;
use airfuzz_patch::{apply, PatchTable};
use tracing::{debug, info};

use crate::context::{PacketContext, SetupContext};
use crate::hooks::ModuleHooks;
use crate::spec::ModuleSpec;
use crate::status::{HookStatus, PostStatus};

/// A test-case module built from a [`ModuleSpec`].
#[derive(Debug)]
pub struct MutatorModule {
    name: String,
    filter_name: String,
    table: PatchTable,
    disable_global_timeout: bool,
    diagnostic: String,
    filter: Option<Filter>,
}

impl MutatorModule {
    /// Builds a module from a validated spec, rebasing patch offsets into
    /// live-buffer coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::SpecInvalid`] when the spec fails validation
    /// or an offset underflows the offset base.
    pub fn from_spec(spec: &ModuleSpec) -> Result<Self, ModuleError> {
        spec.validate()?;
        let table = PatchTable::rebased(spec.patches.clone(), spec.offset_base)
            .map_err(|err| match err {
                ModuleError::SpecInvalid { reason, .. } => {
                    ModuleError::spec_invalid(&spec.name, reason)
                }
                other => other,
            })?;
        let diagnostic = spec
            .diagnostic
            .clone()
            .unwrap_or_else(|| format!("{} mutation applied", spec.name));
        Ok(Self {
            name: spec.name.clone(),
            filter_name: spec.filter.clone(),
            table,
            disable_global_timeout: spec.config.disable_global_timeout,
            diagnostic,
            filter: None,
        })
    }

    /// The compiled filter, once setup has run.
    #[must_use]
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// The rebased patch table this module stamps on a match.
    #[must_use]
    pub fn patch_table(&self) -> &PatchTable {
        &self.table
    }
}

impl ModuleHooks for MutatorModule {
    fn module_name(&self) -> &str {
        &self.name
    }

    fn setup(&mut self, ctx: &mut SetupContext<'_>) -> Result<(), ModuleError> {
        if self.disable_global_timeout {
            ctx.config_mut().global_timeout = false;
            debug!(module = %self.name, "global timeout disarmed");
        }
        let filter = ctx.compile_filter(&self.filter_name)?;
        debug!(module = %self.name, filter = %self.filter_name, "module ready");
        self.filter = Some(filter);
        Ok(())
    }

    fn pre_dissection(&mut self, _buf: &[u8], ctx: &mut PacketContext<'_>) -> HookStatus {
        if let Some(filter) = &self.filter {
            ctx.register(filter);
        }
        HookStatus::Continue
    }

    fn post_dissection(&mut self, buf: &mut [u8], ctx: &mut PacketContext<'_>) -> PostStatus {
        let Some(filter) = &self.filter else {
            return PostStatus::Unchanged;
        };
        if !ctx.query(filter) {
            return PostStatus::Unchanged;
        }
        // Status reports the filter match, not the write count: a match
        // whose writes all land out of range still counts as an injected
        // fault for the harness.
        let report = apply(buf, &self.table);
        info!(module = %self.name, written = report.written, "{}", self.diagnostic);
        PostStatus::Mutated
    }
}
