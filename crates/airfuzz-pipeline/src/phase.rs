//! The packet pass state machine
//!
//! A packet moves through a fixed phase sequence; hooks are only legal in
//! their own slot. The executor advances the machine explicitly and treats
//! an out-of-order transition as a pass fault ([`PassError::PhaseOrder`]),
//! which fails the current packet but never the run.

use airfuzz_errors::PassError;

use crate::types::PacketVerdict;

/// Lifecycle phase of a packet inside one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PacketPhase {
    /// Buffer captured, no hook has run yet.
    #[default]
    Created,
    /// Pre-dissection hooks are running.
    PreDissection,
    /// Decode finished (successfully or not) and results are recorded.
    Dissected,
    /// Post-dissection hooks are running.
    PostDissection,
    /// Terminal: packet released for transmission.
    Sent,
    /// Terminal: packet suppressed.
    Dropped,
}

impl PacketPhase {
    /// Advances to `next`, checking the transition is legal.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::PhaseOrder`] when `next` is not a direct
    /// successor of the current phase.
    pub fn advance(self, next: PacketPhase) -> Result<PacketPhase, PassError> {
        let legal = matches!(
            (self, next),
            (PacketPhase::Created, PacketPhase::PreDissection)
                | (PacketPhase::PreDissection, PacketPhase::Dissected)
                | (PacketPhase::Dissected, PacketPhase::PostDissection)
                | (PacketPhase::PostDissection, PacketPhase::Sent)
                | (PacketPhase::PostDissection, PacketPhase::Dropped)
        );
        if legal { Ok(next) } else { Err(PassError::PhaseOrder) }
    }

    /// The terminal phase for a verdict.
    #[must_use]
    pub fn terminal_for(verdict: PacketVerdict) -> PacketPhase {
        match verdict {
            PacketVerdict::Sent => PacketPhase::Sent,
            PacketVerdict::Dropped => PacketPhase::Dropped,
        }
    }

    /// Whether this phase ends the pass.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, PacketPhase::Sent | PacketPhase::Dropped)
    }
}
