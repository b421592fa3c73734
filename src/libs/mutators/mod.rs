// Format-specific upsert engines. Each one reads the current file under the
// per-path lock, computes the new content in memory and hands it to
// `write_back`; nothing is written when the content would not change.

pub mod conf_append;
pub mod line_kv;
pub mod xml_property;

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::libs::errors::ConfigError;
use crate::schemas::agent_config::{AgentConfig, DuplicateKeyPolicy};
use crate::schemas::file_format::FileFormat;

/// What an upsert did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Inserted,
    Updated,
    /// The key already had this value; the file was not rewritten.
    Unchanged,
}

impl fmt::Display for UpsertAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpsertAction::Inserted => write!(f, "inserted"),
            UpsertAction::Updated => write!(f, "updated"),
            UpsertAction::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Knobs shared by all mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOptions {
    pub atomic_writes: bool,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for MutationOptions {
    fn default() -> Self {
        Self { atomic_writes: true, duplicate_keys: DuplicateKeyPolicy::default() }
    }
}

impl From<&AgentConfig> for MutationOptions {
    fn from(config: &AgentConfig) -> Self {
        Self { atomic_writes: config.atomic_writes, duplicate_keys: config.duplicate_keys }
    }
}

/// Upserts `key = value` into `path` using the engine for `format`.
///
/// `value` is written as given; list rendering for YAML files is the
/// caller's business.
pub fn upsert(
    format: FileFormat,
    path: &Path,
    key: &str,
    value: &str,
    options: &MutationOptions,
) -> Result<UpsertAction, ConfigError> {
    match format {
        FileFormat::PropertyXml => xml_property::upsert_xml_property(path, key, value, options),
        FileFormat::LineKv(separator) => line_kv::upsert_line_kv(path, key, value, separator, options),
        FileFormat::ConfAppend(separator) => conf_append::append_entry(path, key, value, separator, options),
    }
}
