// Small helpers shared by the engine.

// `~` and `$VAR` expansion for configured directories.
pub mod path_helpers;
// OS-family detection for default install locations.
pub mod platform;
// Pure string predicates used by the validator.
pub mod predicates;
