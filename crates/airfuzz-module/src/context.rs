//! Shared execution context and its phase-scoped views
//!
//! One [`ExecutionContext`] lives for the whole run. Modules never touch it
//! directly: the executor hands each hook a borrowed view that exposes only
//! the operations legal in that phase. [`SetupContext`] (setup only) can
//! compile filters and mutate run configuration; [`PacketContext`] (pre and
//! post hooks) can register and query filters and read configuration, but
//! the config flag surface is gone. "Configuration changes happen during
//! setup only" is therefore enforced by the type system rather than by a
//! runtime check.

use std::sync::Arc;

use airfuzz_dissect::{Dissector, ElementTree, Filter, FilterRegistry};
use airfuzz_errors::module::ModuleError;
use airfuzz_errors::DissectError;

/// Run-wide configuration flags shared by every module.
///
/// The only flag carried today is the watchdog toggle: when a campaign opts
/// out of the global timeout, the run is no longer killed for stalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Whether the run-wide watchdog timeout is armed. Defaults to `true`.
    pub global_timeout: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            global_timeout: true,
        }
    }
}

/// Run-long state threaded through every module hook.
///
/// Owns the run configuration, the filter registry, and the dissector used
/// to decode outgoing packets.
pub struct ExecutionContext {
    config: RunConfig,
    registry: FilterRegistry,
    dissector: Arc<dyn Dissector>,
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ExecutionContext {
    /// Creates a context with default configuration and an empty registry.
    #[must_use]
    pub fn new(dissector: Arc<dyn Dissector>) -> Self {
        Self {
            config: RunConfig::default(),
            registry: FilterRegistry::new(),
            dissector,
        }
    }

    /// Current run configuration.
    #[must_use]
    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// The registry of compiled filters.
    #[must_use]
    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Decodes an outgoing buffer with the run's dissector.
    ///
    /// # Errors
    ///
    /// Propagates the dissector's decode failure; callers treat that as a
    /// malformed packet, not a fatal run error.
    pub fn dissect(&self, buf: &[u8]) -> Result<ElementTree, DissectError> {
        self.dissector.dissect(buf)
    }

    /// Resets per-packet registry state at the start of a packet pass.
    pub fn begin_packet(&mut self) {
        self.registry.begin_packet();
    }

    /// Records dissection results against all registered filters.
    ///
    /// Pass `None` when decode failed; every query for this packet then
    /// reports no match.
    pub fn evaluate(&mut self, tree: Option<&ElementTree>) {
        self.registry.evaluate(tree);
    }

    /// Borrows the context as a setup-phase view.
    #[must_use]
    pub fn setup_scope(&mut self) -> SetupContext<'_> {
        SetupContext { inner: self }
    }

    /// Borrows the context as a packet-phase view.
    #[must_use]
    pub fn packet_scope(&mut self) -> PacketContext<'_> {
        PacketContext { inner: self }
    }
}

/// Setup-phase view of the execution context.
///
/// The only place run configuration can be changed.
#[derive(Debug)]
pub struct SetupContext<'a> {
    inner: &'a mut ExecutionContext,
}

impl SetupContext<'_> {
    /// Compiles a named filter expression, deduplicating by name.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::FilterCompile`] when the dissector does not
    /// recognize the element path.
    pub fn compile_filter(&mut self, name: &str) -> Result<Filter, ModuleError> {
        let dissector = Arc::clone(&self.inner.dissector);
        self.inner.registry.compile(dissector.as_ref(), name)
    }

    /// Current run configuration.
    #[must_use]
    pub fn config(&self) -> RunConfig {
        self.inner.config
    }

    /// Mutable access to the run configuration.
    pub fn config_mut(&mut self) -> &mut RunConfig {
        &mut self.inner.config
    }
}

/// Packet-phase view of the execution context, handed to pre- and
/// post-dissection hooks.
#[derive(Debug)]
pub struct PacketContext<'a> {
    inner: &'a mut ExecutionContext,
}

impl PacketContext<'_> {
    /// Registers interest in a compiled filter for the current packet.
    pub fn register(&mut self, filter: &Filter) {
        self.inner.registry.register(filter);
    }

    /// Reads a filter's match result for the current packet.
    ///
    /// `false` until dissection results have been recorded, and `false`
    /// for the whole packet when decode failed.
    #[must_use]
    pub fn query(&self, filter: &Filter) -> bool {
        self.inner.registry.query(filter)
    }

    /// Current run configuration (read-only in packet phases).
    #[must_use]
    pub fn config(&self) -> RunConfig {
        self.inner.config
    }
}
