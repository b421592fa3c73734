// Path expansion for directories coming from the agent config or the
// command line.
use crate::log_debug;
use colored::Colorize;
use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// # Arguments
/// * `path`: A path that might start with `~`.
///
/// # Returns
/// * The expanded path, or the input unchanged if there is no `~` or no home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return PathBuf::from(path.replacen('~', &home.to_string_lossy(), 1));
        }
    }
    PathBuf::from(path)
}

/// Expands `~` and `$VAR`/`${VAR}` references. References to unset
/// variables leave the string as written (after `~` expansion) rather than
/// failing, since a directory that does not exist is simply skipped later.
pub fn expand_path(path: &str) -> PathBuf {
    let tilde_expanded = expand_tilde(path.trim());
    if !path.contains('$') {
        return tilde_expanded;
    }
    let as_string = tilde_expanded.to_string_lossy().to_string();
    match shellexpand::env(&as_string) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log_debug!("[Paths] Could not expand '{}': {}", path, e);
            tilde_expanded
        }
    }
}
