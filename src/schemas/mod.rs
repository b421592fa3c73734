// Data types shared across the crate. No behaviour beyond small helpers
// lives here.

pub mod agent_config;
pub mod component;
/// Schema table rows and resolver output.
pub mod entry;
/// File grammars (`PropertyXml`, `LineKv`, `ConfAppend`).
pub mod file_format;
pub mod profile;
/// Validation rule vocabulary.
pub mod rules;
/// Closed status enums returned to callers.
pub mod status;
