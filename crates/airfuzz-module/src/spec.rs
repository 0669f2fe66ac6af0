//! Declarative module specifications
//!
//! A [`ModuleSpec`] is the data a generated test case used to hard-code:
//! the filter name, the patch table, an optional offset base, and config
//! overrides. Campaign files carry lists of these records in JSON or YAML;
//! the loader turns each one into a [`crate::MutatorModule`].

use std::path::Path;

use airfuzz_errors::module::ModuleError;
use airfuzz_patch::PatchEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run configuration overrides a module may request during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverride {
    /// Disarm the run-wide watchdog timeout for the whole run.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable_global_timeout: bool,
}

/// One declarative test-case record.
///
/// Offsets in `patches` are expressed in the coordinate space named by
/// `offset_base`: generated specs carry capture-frame offsets that include
/// a link-layer prefix absent from the live buffer, and `offset_base` is
/// subtracted from every offset at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    /// Module identifier used in logs and status reports.
    pub name: String,
    /// Element path the module's filter watches, e.g. `"nr-rrc.rrcSetup_element"`.
    pub filter: String,
    /// Byte overwrites to apply on a filter match.
    pub patches: Vec<PatchEntry>,
    /// Prefix length subtracted from every patch offset at load time.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset_base: usize,
    /// One-time run configuration changes applied during setup.
    #[serde(default, skip_serializing_if = "ConfigOverride::is_empty")]
    pub config: ConfigOverride,
    /// Message logged when the mutation fires. A default is derived from the
    /// module name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl ConfigOverride {
    fn is_empty(&self) -> bool {
        !self.disable_global_timeout
    }
}

impl ModuleSpec {
    /// Validates the structural invariants a loader relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::SpecInvalid`] for an empty name, an empty
    /// filter expression, or a patch offset smaller than `offset_base`.
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.name.trim().is_empty() {
            return Err(ModuleError::spec_invalid("<unnamed>", "module name is empty"));
        }
        if self.filter.trim().is_empty() {
            return Err(ModuleError::spec_invalid(&self.name, "filter expression is empty"));
        }
        for entry in &self.patches {
            if entry.offset < self.offset_base {
                return Err(ModuleError::spec_invalid(
                    &self.name,
                    format!(
                        "patch offset {} is below offset base {}",
                        entry.offset, self.offset_base
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Failure while reading a campaign file of module specs.
#[derive(Debug, Error)]
pub enum SpecFileError {
    /// The file could not be read.
    #[error("failed to read spec file {path}: {source}")]
    Io {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file's contents were not valid JSON.
    #[error("failed to parse JSON spec: {0}")]
    Json(#[from] serde_json::Error),
    /// The file's contents were not valid YAML.
    #[error("failed to parse YAML spec: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension named no supported format.
    #[error("unsupported spec file extension: {path} (expected .json, .yaml or .yml)")]
    UnknownFormat {
        /// Path with the unrecognized extension.
        path: String,
    },
}

/// Parses a list of module specs from a JSON document.
///
/// # Errors
///
/// Returns [`SpecFileError::Json`] on malformed input.
pub fn specs_from_json(input: &str) -> Result<Vec<ModuleSpec>, SpecFileError> {
    Ok(serde_json::from_str(input)?)
}

/// Parses a list of module specs from a YAML document.
///
/// # Errors
///
/// Returns [`SpecFileError::Yaml`] on malformed input.
pub fn specs_from_yaml(input: &str) -> Result<Vec<ModuleSpec>, SpecFileError> {
    Ok(serde_yaml::from_str(input)?)
}

/// Loads module specs from a file, dispatching on its extension.
///
/// # Errors
///
/// Returns [`SpecFileError::Io`] when the file cannot be read,
/// [`SpecFileError::UnknownFormat`] for an unrecognized extension, or the
/// format-specific parse error.
pub fn specs_from_path(path: &Path) -> Result<Vec<ModuleSpec>, SpecFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SpecFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => specs_from_json(&contents),
        Some("yaml" | "yml") => specs_from_yaml(&contents),
        _ => Err(SpecFileError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}
