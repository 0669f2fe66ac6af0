//! Convenience re-exports for test code.
//!
//! ```rust,ignore
//! use airfuzz_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some};

#[cfg(feature = "mock")]
pub use crate::mock::{DecodeOutcome, ScriptedDissector};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{paths, PacketBufferFixture};
