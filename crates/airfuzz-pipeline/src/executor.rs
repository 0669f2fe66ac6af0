//! Packet pass execution
//!
//! [`PacketExecutor`] owns the loaded modules and the shared execution
//! context, and drives every outgoing packet through the phase machine:
//! pre-dissection fan-out, one decode, post-dissection fan-out, verdict.
//!
//! Faults stay local. A module whose setup fails is disabled and skipped,
//! a packet that fails to decode completes its pass with every filter
//! reading unmatched, and out-of-range patch writes were already skipped a
//! layer below. The run itself never aborts mid-campaign.

use std::sync::Arc;

use airfuzz_dissect::Dissector;
use airfuzz_errors::module::ModuleError;
use airfuzz_errors::{PassError, PassResult};
use airfuzz_module::{
    ExecutionContext, HookStatus, ModuleHooks, ModuleState, ModuleSpec, MutatorModule, RunConfig,
};
use tracing::{debug, error, info, warn};

use crate::hash::campaign_hash;
use crate::phase::PacketPhase;
use crate::types::{ModuleReport, PacketVerdict, PassReport};
use crate::validation::CampaignValidator;

struct LoadedModule {
    hooks: Box<dyn ModuleHooks>,
    state: ModuleState,
}

/// Drives loaded test-case modules over outgoing packets.
pub struct PacketExecutor {
    modules: Vec<LoadedModule>,
    ctx: ExecutionContext,
    campaign_hash: u64,
    packets_processed: u64,
    setup_done: bool,
}

impl std::fmt::Debug for PacketExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketExecutor")
            .field("modules", &self.modules.len())
            .field("campaign_hash", &self.campaign_hash)
            .field("packets_processed", &self.packets_processed)
            .field("setup_done", &self.setup_done)
            .finish_non_exhaustive()
    }
}

impl PacketExecutor {
    /// Creates an executor with no modules loaded.
    #[must_use]
    pub fn new(dissector: Arc<dyn Dissector>) -> Self {
        Self {
            modules: Vec::new(),
            ctx: ExecutionContext::new(dissector),
            campaign_hash: 0,
            packets_processed: 0,
            setup_done: false,
        }
    }

    /// Builds an executor from a validated campaign of module specs.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::SpecInvalid`] when the campaign fails
    /// validation or a spec cannot be turned into a module.
    pub fn from_specs(
        specs: &[ModuleSpec],
        dissector: Arc<dyn Dissector>,
    ) -> Result<Self, ModuleError> {
        CampaignValidator::new().validate(specs)?;
        let mut executor = Self::new(dissector);
        executor.campaign_hash = campaign_hash(specs);
        for spec in specs {
            executor.push_module(Box::new(MutatorModule::from_spec(spec)?));
        }
        info!(
            modules = executor.modules.len(),
            campaign_hash = executor.campaign_hash,
            "campaign loaded"
        );
        Ok(executor)
    }

    /// Adds a hand-written module to the load order.
    pub fn push_module(&mut self, hooks: Box<dyn ModuleHooks>) {
        self.modules.push(LoadedModule {
            hooks,
            state: ModuleState::Ready,
        });
    }

    /// Runs every module's setup hook once.
    ///
    /// A failing module is disabled with an error log; the others and the
    /// run continue. Calling this twice is a no-op.
    pub fn setup(&mut self) {
        if self.setup_done {
            return;
        }
        let Self { modules, ctx, .. } = self;
        for loaded in modules.iter_mut() {
            let mut scope = ctx.setup_scope();
            match loaded.hooks.setup(&mut scope) {
                Ok(()) => {
                    debug!(module = loaded.hooks.module_name(), "module setup complete");
                }
                Err(err) => {
                    warn!(
                        module = loaded.hooks.module_name(),
                        status = err.status(),
                        error = %err,
                        "module setup failed, module disabled for this run"
                    );
                    loaded.state = ModuleState::Disabled;
                }
            }
        }
        self.setup_done = true;
    }

    /// Runs one packet through the full phase sequence.
    ///
    /// Setup is performed lazily on the first packet if it has not been run.
    /// A phase-order fault (a bug, not an input condition) suppresses the
    /// packet rather than poisoning the run.
    pub fn run_packet(&mut self, buf: &mut [u8]) -> PassReport {
        self.setup();
        self.packets_processed += 1;
        match self.execute_pass(buf) {
            Ok(report) => report,
            Err(fault) => {
                error!(code = fault.code(), error = %fault, "packet pass faulted, packet dropped");
                PassReport {
                    verdict: PacketVerdict::Dropped,
                    decode_ok: false,
                    mutations: 0,
                    modules: Vec::new(),
                }
            }
        }
    }

    fn execute_pass(&mut self, buf: &mut [u8]) -> PassResult<PassReport> {
        let mut phase = PacketPhase::Created;
        let Self { modules, ctx, .. } = self;

        ctx.begin_packet();
        phase = phase.advance(PacketPhase::PreDissection)?;

        let mut drop_vote = false;
        let mut reports = Vec::with_capacity(modules.len());
        for loaded in modules.iter_mut().filter(|m| m.state.is_ready()) {
            let mut scope = ctx.packet_scope();
            let status = loaded.hooks.pre_dissection(buf, &mut scope);
            if status == HookStatus::DropPacket {
                debug!(module = loaded.hooks.module_name(), "module voted to drop packet");
                drop_vote = true;
            }
            reports.push(ModuleReport {
                module: loaded.hooks.module_name().to_owned(),
                pre_code: status.code(),
                post_code: 0,
            });
        }

        let decode_ok = match ctx.dissect(buf) {
            Ok(tree) => {
                ctx.evaluate(Some(&tree));
                true
            }
            Err(err) => {
                warn!(
                    code = PassError::DissectionUnavailable.code(),
                    error = %err,
                    "packet could not be dissected, filters read unmatched"
                );
                ctx.evaluate(None);
                false
            }
        };
        phase = phase.advance(PacketPhase::Dissected)?;
        phase = phase.advance(PacketPhase::PostDissection)?;

        let mut mutations = 0;
        let ready = modules.iter_mut().filter(|m| m.state.is_ready());
        for (loaded, report) in ready.zip(reports.iter_mut()) {
            let mut scope = ctx.packet_scope();
            let status = loaded.hooks.post_dissection(buf, &mut scope);
            report.post_code = status.code();
            if status.is_mutated() {
                mutations += 1;
            }
        }

        let verdict = if drop_vote {
            PacketVerdict::Dropped
        } else {
            PacketVerdict::Sent
        };
        phase = phase.advance(PacketPhase::terminal_for(verdict))?;
        debug_assert!(phase.is_terminal());

        Ok(PassReport {
            verdict,
            decode_ok,
            mutations,
            modules: reports,
        })
    }

    /// Current run configuration.
    #[must_use]
    pub fn config(&self) -> RunConfig {
        self.ctx.config()
    }

    /// Hash of the campaign this executor was loaded from; 0 for a
    /// hand-assembled executor.
    #[must_use]
    pub fn campaign_hash(&self) -> u64 {
        self.campaign_hash
    }

    /// Total packets run so far.
    #[must_use]
    pub fn packets_processed(&self) -> u64 {
        self.packets_processed
    }

    /// Number of loaded modules, disabled ones included.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of modules disabled by a setup failure.
    #[must_use]
    pub fn disabled_count(&self) -> usize {
        self.modules.iter().filter(|m| !m.state.is_ready()).count()
    }

    pub(crate) fn compiled_filters(&self) -> usize {
        self.ctx.registry().len()
    }
}
