// Free-form files (spark-defaults.conf) where new settings are appended.
// Existing lines are never inspected, so an earlier entry for the same key
// stays in place and the last one wins when the component reads the file.

use colored::Colorize;
use std::path::Path;

use crate::libs::errors::ConfigError;
use crate::libs::mutators::{MutationOptions, UpsertAction};
use crate::libs::write_back;
use crate::log_debug;
use crate::schemas::file_format::Separator;

/// `content` with `key<sep>value` appended on its own line.
pub fn appended(content: &str, key: &str, value: &str, separator: Separator) -> String {
    let mut out = String::with_capacity(content.len() + key.len() + value.len() + 3);
    out.push_str(content);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(key);
    out.push_str(separator.as_str());
    out.push_str(value);
    out.push('\n');
    out
}

/// Appends `key<sep>value` to an existing file.
pub fn append_entry(
    path: &Path,
    key: &str,
    value: &str,
    separator: Separator,
    options: &MutationOptions,
) -> Result<UpsertAction, ConfigError> {
    write_back::with_path_lock(path, || {
        let content = write_back::read_text(path)?;
        write_back::write_text(path, &appended(&content, key, value, separator), options.atomic_writes)?;
        log_debug!("[ConfAppend] Appended '{}' to {}", key.bold(), path.display().to_string().cyan());
        Ok(UpsertAction::Inserted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn appends_after_existing_content() {
        let out = appended("# defaults\nspark.master yarn", "spark.executor.memory", "4g", Separator::Whitespace);
        assert_eq!(out, "# defaults\nspark.master yarn\nspark.executor.memory 4g\n");
    }

    #[test]
    fn repeated_keys_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spark-defaults.conf");
        fs::write(&path, "").unwrap();
        let options = MutationOptions::default();
        append_entry(&path, "spark.master", "yarn", Separator::Whitespace, &options).unwrap();
        append_entry(&path, "spark.master", "local[4]", Separator::Whitespace, &options).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "spark.master yarn\nspark.master local[4]\n");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spark-defaults.conf");
        let result = append_entry(&path, "spark.master", "yarn", Separator::Whitespace, &MutationOptions::default());
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }
}
