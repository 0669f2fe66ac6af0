//! Campaign validation logic
//!
//! Structural checks on a spec list before any module is constructed, so
//! load failures surface with the offending record named instead of halfway
//! through setup.

use std::collections::HashSet;

use airfuzz_errors::module::ModuleError;
use airfuzz_module::ModuleSpec;
use tracing::warn;

/// Validator for campaign spec lists.
#[derive(Debug, Clone, Default)]
pub struct CampaignValidator;

impl CampaignValidator {
    /// Create a new campaign validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a list of module specs.
    ///
    /// An empty campaign is legal (the executor just forwards packets) but
    /// logged, since it is almost always a mistake in the campaign file.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::SpecInvalid`] if:
    /// - Any spec fails its own structural validation
    /// - Two specs share a module name
    pub fn validate(&self, specs: &[ModuleSpec]) -> Result<(), ModuleError> {
        if specs.is_empty() {
            warn!("campaign contains no modules, packets will pass through unmodified");
        }

        let mut names = HashSet::with_capacity(specs.len());
        for spec in specs {
            spec.validate()?;
            if !names.insert(spec.name.as_str()) {
                return Err(ModuleError::spec_invalid(
                    &spec.name,
                    "duplicate module name in campaign",
                ));
            }
        }
        Ok(())
    }
}
