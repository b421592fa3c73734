// The engine: resolution, validation, discovery and file mutation.
//
// Everything in here returns closed status values or `ConfigError`; only
// `config_loading` (used by the command layer) speaks `anyhow`.

/// Agent config file lookup and parsing.
pub mod config_loading;
/// Resolve → validate → locate → mutate, plus the generic entry points.
pub mod dispatcher;
/// `ConfigError` and its mapping onto `ConfigStatus`.
pub mod errors;
/// Finds a component's configuration files on disk.
pub mod file_locator;
/// Format-specific upsert engines.
pub mod mutators;
/// Raw parameter name → canonical key and target file.
pub mod resolver;
pub mod utilities;
/// Per-key value checks.
pub mod validator;
/// Locked, optionally atomic file writes.
pub mod write_back;
