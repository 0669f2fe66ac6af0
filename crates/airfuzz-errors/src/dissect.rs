//! Decode-engine contract errors.
//!
//! The decoder itself lives outside this workspace; these are the errors its
//! contract can surface into the harness.

use crate::common::ErrorSeverity;

/// Errors surfaced by the external decode engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DissectError {
    /// The decoder could not produce an element tree for this buffer.
    ///
    /// Recovered locally: the pass proceeds to POST with every filter query
    /// defined to return false.
    #[error("decode failed: {reason}")]
    DecodeFailed {
        /// Decoder-supplied failure description
        reason: String,
    },

    /// An element path is not part of the decoder's dissection table.
    #[error("unknown element path '{path}'")]
    UnknownPath {
        /// The path that failed to resolve
        path: String,
    },
}

impl DissectError {
    /// Create a decode failure error.
    pub fn decode_failed(reason: impl Into<String>) -> Self {
        DissectError::DecodeFailed {
            reason: reason.into(),
        }
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Recovered within the pass
            DissectError::DecodeFailed { .. } => ErrorSeverity::Warning,
            // Fatal for the module compiling the path
            DissectError::UnknownPath { .. } => ErrorSeverity::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failed_display() {
        let err = DissectError::decode_failed("truncated PDU");
        assert!(err.to_string().contains("truncated PDU"));
    }

    #[test]
    fn test_severity_split() {
        assert_eq!(
            DissectError::decode_failed("x").severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            DissectError::UnknownPath { path: "a.b".into() }.severity(),
            ErrorSeverity::Critical
        );
    }
}
