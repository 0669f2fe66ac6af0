//! Filter compilation, registration, and per-packet match queries.
//!
//! A filter is a named predicate over the decoded element tree. Compilation
//! resolves the name against the dissector's table exactly once; the
//! resulting [`Filter`] handle is reused for every packet. Modules that
//! compile the identical name share one slot in the registry, so they also
//! share one match result per packet.

use std::collections::HashMap;
use std::sync::Arc;

use airfuzz_errors::{ModuleError, PassError};
use tracing::{debug, warn};

use crate::dissector::Dissector;
use crate::tree::ElementTree;

/// Index of a compiled filter inside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterId(usize);

impl FilterId {
    /// The raw slot index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a compiled filter predicate.
///
/// Cheap to clone; the per-packet active/match state lives in the registry,
/// not in the handle.
#[derive(Debug, Clone)]
pub struct Filter {
    name: Arc<str>,
    id: FilterId,
}

impl Filter {
    /// The element path this filter matches.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registry slot backing this filter.
    #[must_use]
    pub fn id(&self) -> FilterId {
        self.id
    }
}

/// Per-slot registry state.
#[derive(Debug, Default, Clone, Copy)]
struct SlotState {
    /// Registered for the current packet's decode
    active: bool,
    /// Match result of the current packet's decode
    matched: bool,
    /// Whether `evaluate` has run for the current packet
    evaluated: bool,
}

/// Compiles and caches named filter predicates, answers per-packet queries.
///
/// Process-wide: created once at load time and shared by all modules for the
/// whole run. The single-threaded pipeline is the only writer; a concurrent
/// extension must serialize access (registration and evaluation both mutate).
#[derive(Debug, Default)]
pub struct FilterRegistry {
    by_name: HashMap<Arc<str>, FilterId>,
    names: Vec<Arc<str>>,
    slots: Vec<SlotState>,
}

impl FilterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `name` into a filter, deduplicating by name.
    ///
    /// The predicate is compiled exactly once per distinct name; a second
    /// call with the same name returns a handle to the same slot, so all
    /// modules interested in the name share one match result per packet.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::FilterCompile`] when the dissector does not
    /// know the element path. This is fatal for the calling module only.
    pub fn compile<D: Dissector + ?Sized>(
        &mut self,
        dissector: &D,
        name: &str,
    ) -> Result<Filter, ModuleError> {
        if let Some((existing, &id)) = self.by_name.get_key_value(name) {
            debug!(filter = name, slot = id.index(), "filter already compiled, reusing slot");
            return Ok(Filter {
                name: Arc::clone(existing),
                id,
            });
        }

        if !dissector.knows_path(name) {
            return Err(ModuleError::filter_compile(name));
        }

        let name: Arc<str> = Arc::from(name);
        let id = FilterId(self.names.len());
        self.by_name.insert(Arc::clone(&name), id);
        self.names.push(Arc::clone(&name));
        self.slots.push(SlotState::default());
        debug!(filter = &*name, slot = id.index(), "filter compiled");
        Ok(Filter { name, id })
    }

    /// Start a new packet pass: clear the active set and match cache.
    pub fn begin_packet(&mut self) {
        for slot in &mut self.slots {
            *slot = SlotState::default();
        }
    }

    /// Mark a filter active for the current packet's upcoming decode.
    ///
    /// Idempotent: registering the same filter twice has no additional
    /// effect. Must happen before `evaluate` or the subsequent query is
    /// false.
    pub fn register(&mut self, filter: &Filter) {
        let Some(slot) = self.slots.get_mut(filter.id.index()) else {
            warn!(filter = filter.name(), "register on a filter from another registry");
            return;
        };
        if slot.evaluated {
            warn!(
                filter = filter.name(),
                code = PassError::StaleQuery.code(),
                "registration after decode; match result is stale for this packet"
            );
            return;
        }
        slot.active = true;
    }

    /// Record match results for the current packet.
    ///
    /// `tree` is `None` when decode failed; every query for this packet is
    /// then defined to return false. Only filters registered this pass are
    /// evaluated.
    pub fn evaluate(&mut self, tree: Option<&ElementTree>) {
        for (slot, name) in self.slots.iter_mut().zip(&self.names) {
            slot.matched = match (slot.active, tree) {
                (true, Some(tree)) => tree.contains(name),
                _ => false,
            };
            slot.evaluated = true;
        }
    }

    /// Whether the current packet's decoded tree satisfied `filter`.
    ///
    /// Valid only after `evaluate` has run for the current packet; before
    /// that, or for an unregistered filter, the answer is false.
    #[must_use]
    pub fn query(&self, filter: &Filter) -> bool {
        self.slots
            .get(filter.id.index())
            .is_some_and(|slot| slot.evaluated && slot.matched)
    }

    /// Number of distinct compiled filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no filters have been compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
