//! Mock implementations for testing.
//!
//! The central mock is [`ScriptedDissector`]: a dissector whose per-packet
//! outcomes are queued up front, so tests can drive exact sequences of
//! matches, misses, and decode failures without real protocol data.

use std::cell::RefCell;

use airfuzz_dissect::{Dissector, ElementTree};
use airfuzz_errors::dissect::DissectError;

/// One scripted decode outcome.
#[derive(Debug, Clone)]
pub enum DecodeOutcome {
    /// Decode succeeds and yields a tree containing exactly these paths.
    Elements(Vec<String>),
    /// Decode fails with the given reason.
    Malformed(String),
}

impl DecodeOutcome {
    /// Outcome with a single element path.
    pub fn element(path: &str) -> Self {
        Self::Elements(vec![path.to_owned()])
    }

    /// Outcome with an empty element tree (decode succeeds, nothing matches).
    pub fn empty() -> Self {
        Self::Elements(Vec::new())
    }
}

/// A dissector driven by a pre-recorded script of outcomes.
///
/// `knows_path` answers from a fixed vocabulary, independent of the script,
/// so filter compilation can be tested separately from packet decoding.
/// When the script runs dry, decode yields an empty tree.
#[derive(Debug, Default)]
pub struct ScriptedDissector {
    vocabulary: Vec<String>,
    script: RefCell<Vec<DecodeOutcome>>,
    decode_calls: RefCell<usize>,
}

impl ScriptedDissector {
    /// Creates a dissector that recognizes the given element paths.
    pub fn with_vocabulary<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: paths.into_iter().map(Into::into).collect(),
            script: RefCell::new(Vec::new()),
            decode_calls: RefCell::new(0),
        }
    }

    /// Queues one decode outcome; outcomes are consumed in push order.
    pub fn push_outcome(&self, outcome: DecodeOutcome) {
        self.script.borrow_mut().push(outcome);
    }

    /// Queues a successful decode containing the given paths.
    pub fn push_elements<I, S>(&self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_outcome(DecodeOutcome::Elements(
            paths.into_iter().map(Into::into).collect(),
        ));
    }

    /// Queues a decode failure.
    pub fn push_malformed(&self, reason: &str) {
        self.push_outcome(DecodeOutcome::Malformed(reason.to_owned()));
    }

    /// Number of times `dissect` has been called.
    pub fn decode_calls(&self) -> usize {
        *self.decode_calls.borrow()
    }
}

impl Dissector for ScriptedDissector {
    fn knows_path(&self, path: &str) -> bool {
        self.vocabulary.iter().any(|p| p == path)
    }

    fn dissect(&self, _buf: &[u8]) -> Result<ElementTree, DissectError> {
        *self.decode_calls.borrow_mut() += 1;
        let mut script = self.script.borrow_mut();
        if script.is_empty() {
            return Ok(ElementTree::from_paths(std::iter::empty::<String>()));
        }
        match script.remove(0) {
            DecodeOutcome::Elements(paths) => Ok(ElementTree::from_paths(paths)),
            DecodeOutcome::Malformed(reason) => Err(DissectError::decode_failed(reason)),
        }
    }
}
