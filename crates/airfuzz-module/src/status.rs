//! Status codes crossing the module/harness boundary
//!
//! The hook contract is numeric at the edge: hooks report plain integer
//! codes so that results can be logged, compared, and (eventually) carried
//! over process boundaries without dragging Rust enums along. Inside the
//! crate the codes are typed.

/// Verdict returned by a pre-dissection hook.
///
/// `Continue` lets the packet proceed through decode and post-dissection.
/// `DropPacket` marks the packet for suppression; the pass still runs the
/// remaining phases so every module observes the packet, and the final
/// verdict is applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HookStatus {
    /// Packet proceeds normally.
    Continue = 0,
    /// Packet is suppressed after the pass completes.
    DropPacket = 1,
}

impl HookStatus {
    /// Returns the integer wire code for this status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolves a wire code back into a status, if known.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Continue),
            1 => Some(Self::DropPacket),
            _ => None,
        }
    }
}

/// Verdict returned by a post-dissection hook.
///
/// `Mutated` reports a filter match and an attempted patch; the harness
/// records the packet as an injected-fault case even when individual writes
/// were skipped as out of range. `Unchanged` means no filter matched and the
/// buffer was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PostStatus {
    /// No match; buffer left untouched.
    Unchanged = 0,
    /// Filter matched and the patch table was applied.
    Mutated = 1,
}

impl PostStatus {
    /// Returns the integer wire code for this status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolves a wire code back into a status, if known.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Unchanged),
            1 => Some(Self::Mutated),
            _ => None,
        }
    }

    /// `true` when the hook reported a buffer write.
    #[must_use]
    pub const fn is_mutated(self) -> bool {
        matches!(self, Self::Mutated)
    }
}

/// Runtime state of a loaded module.
///
/// A module whose setup hook fails is parked in `Disabled` rather than
/// aborting the run; the executor skips its packet hooks from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleState {
    /// Setup succeeded; packet hooks run.
    #[default]
    Ready,
    /// Setup failed; packet hooks are skipped for the rest of the run.
    Disabled,
}

impl ModuleState {
    /// `true` when packet hooks should run for this module.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
