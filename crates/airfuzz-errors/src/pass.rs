//! Per-packet-pass fault codes.
//!
//! These error types are designed for use inside the per-packet hot path
//! with specific guarantees:
//! - Copy semantics (no heap allocations)
//! - Pre-allocated error codes for cheap reporting
//! - Fixed-size representation
//!
//! Every fault here is recovered locally: the pass that observes it still
//! runs to completion and the overall run is never aborted.

use core::fmt;

use crate::common::ErrorSeverity;

/// Per-pass fault codes (pre-allocated for the packet path).
///
/// # Examples
///
/// ```
/// use airfuzz_errors::{ErrorSeverity, PassError};
///
/// let err = PassError::OutOfRangeWrite;
///
/// // Pass faults have numeric codes for efficient logging
/// assert_eq!(err.code(), 1);
///
/// // Check severity for escalation decisions
/// assert_eq!(err.severity(), ErrorSeverity::Warning);
///
/// // All pass faults are recovered without dropping the run
/// assert!(err.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PassError {
    /// A patch offset was at or beyond the current buffer length; the single
    /// write was skipped
    OutOfRangeWrite = 1,
    /// Decode failed for this packet; all filter queries report false
    DissectionUnavailable = 2,
    /// A phase hook ran outside its slot in the pass state machine
    PhaseOrder = 3,
    /// A filter was queried without having been registered this pass
    StaleQuery = 4,
}

impl PassError {
    /// Get the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use airfuzz_errors::PassError;
    ///
    /// assert_eq!(PassError::OutOfRangeWrite.code(), 1);
    /// assert_eq!(PassError::DissectionUnavailable.code(), 2);
    /// ```
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get the error severity.
    pub fn severity(self) -> ErrorSeverity {
        match self {
            PassError::OutOfRangeWrite => ErrorSeverity::Warning,
            PassError::DissectionUnavailable => ErrorSeverity::Warning,
            PassError::PhaseOrder => ErrorSeverity::Error,
            PassError::StaleQuery => ErrorSeverity::Warning,
        }
    }

    /// Check if this fault is recovered within the pass.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            PassError::OutOfRangeWrite
                | PassError::DissectionUnavailable
                | PassError::StaleQuery
        )
    }

    /// Create an error from a code.
    ///
    /// Returns `None` if the code does not correspond to a known fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use airfuzz_errors::PassError;
    ///
    /// assert_eq!(PassError::from_code(1), Some(PassError::OutOfRangeWrite));
    /// assert_eq!(PassError::from_code(255), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PassError::OutOfRangeWrite),
            2 => Some(PassError::DissectionUnavailable),
            3 => Some(PassError::PhaseOrder),
            4 => Some(PassError::StaleQuery),
            _ => None,
        }
    }
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::OutOfRangeWrite => write!(f, "Patch offset beyond buffer length"),
            PassError::DissectionUnavailable => write!(f, "Packet could not be dissected"),
            PassError::PhaseOrder => write!(f, "Hook ran outside its pipeline phase"),
            PassError::StaleQuery => write!(f, "Filter queried without registration"),
        }
    }
}

impl std::error::Error for PassError {}
