//! Core pass reporting types.

/// Final decision for a packet after its pass completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketVerdict {
    /// Packet is released for transmission (possibly mutated).
    Sent,
    /// Packet is suppressed; at least one module voted to drop it.
    Dropped,
}

/// Per-module outcome of one packet pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    /// Module identifier.
    pub module: String,
    /// Wire code of the pre-dissection verdict (0 continue, 1 drop).
    pub pre_code: i32,
    /// Wire code of the post-dissection verdict (0 unchanged, 1 mutated).
    pub post_code: i32,
}

/// Outcome of running one packet through every loaded module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Final decision for the packet.
    pub verdict: PacketVerdict,
    /// Whether the dissector produced an element tree for this packet.
    pub decode_ok: bool,
    /// Number of modules that mutated the buffer.
    pub mutations: usize,
    /// Per-module hook outcomes, in load order. Disabled modules are absent.
    pub modules: Vec<ModuleReport>,
}

impl PassReport {
    /// `true` when any module wrote into the buffer.
    #[must_use]
    pub fn is_mutated(&self) -> bool {
        self.mutations > 0
    }
}
