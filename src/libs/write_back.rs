// Reading and writing component configuration files.
//
// Every read-modify-write goes through `with_path_lock`, and every write
// through `write_text`, so that all three mutators share the same locking
// and atomic-rename behaviour.

use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tempfile::NamedTempFile;

use crate::libs::errors::ConfigError;
use crate::log_debug;

/// One mutex per absolute target path. Entries are never removed; an agent
/// only ever touches a handful of files.
type LockRegistry = Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>;

fn registry() -> &'static LockRegistry {
    static LOCKS: OnceLock<LockRegistry> = OnceLock::new();
    LOCKS.get_or_init(Default::default)
}

/// Absolute form of `path` used as the lock key. Falls back to the path as
/// given when the working directory cannot be determined.
fn lock_key(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Runs `f` while holding the in-process lock for `path`.
///
/// Locks are per absolute path and live for the rest of the process. A
/// poisoned lock is still taken: the protected data is the file on disk,
/// which the panicking holder either replaced whole or left alone.
///
/// # Arguments
/// * `path`: The file about to be read and rewritten. Relative paths are
///   made absolute first, so `conf/zoo.cfg` and `./conf/zoo.cfg` share a lock.
/// * `f`: The whole read-modify-write.
///
/// # Returns
/// * `T`: Whatever `f` returns. Other processes are not excluded.
pub fn with_path_lock<T>(path: &Path, f: impl FnOnce() -> T) -> T {
    let key = lock_key(path);
    let lock = {
        let mut locks = registry().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(key).or_default())
    };
    let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f()
}

/// Reads `path` as UTF-8 text.
///
/// # Returns
/// * `Ok(String)`: The whole file.
/// * `Err(ConfigError::NotFound)`: The file does not exist. The XML mutator
///   treats this as "start a new document", the line mutators as failure.
/// * `Err(ConfigError::Read)` / `Err(ConfigError::NotUtf8)`: Anything else.
pub fn read_text(path: &Path) -> Result<String, ConfigError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound { path: path.to_path_buf() });
        }
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };
    String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8 { path: path.to_path_buf() })
}

/// Creates the parent directory of `path` (and its ancestors) if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            log_debug!("[WriteBack] Creating directory {}", dir.display().to_string().cyan());
            fs::create_dir_all(dir).map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
        }
        _ => Ok(()),
    }
}

/// Replaces the content of `path` with `content`.
///
/// With `atomic` set, the content goes to a temporary file next to the
/// target which then replaces it by rename; the target keeps its previous
/// permission bits. Without it the file is truncated and rewritten in place.
///
/// # Arguments
/// * `path`: The target file. Its directory must exist.
/// * `content`: The complete new file content.
/// * `atomic`: `MutationOptions::atomic_writes`.
///
/// # Returns
/// * `Err(ConfigError::Write)`: Staging or the in-place write failed; the
///   target is untouched in atomic mode.
/// * `Err(ConfigError::Persist)`: The final rename failed.
pub fn write_text(path: &Path, content: &str, atomic: bool) -> Result<(), ConfigError> {
    if !atomic {
        log_debug!("[WriteBack] Rewriting {} in place", path.display());
        return fs::write(path, content).map_err(|source| ConfigError::Write { path: path.to_path_buf(), source });
    }

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let write_err = |source| ConfigError::Write { path: path.to_path_buf(), source };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(content.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(staged.path(), metadata.permissions()).map_err(write_err)?;
    }

    log_debug!(
        "[WriteBack] Moving {} over {}",
        staged.path().display(),
        path.display().to_string().cyan()
    );
    staged
        .persist(path)
        .map_err(|e| ConfigError::Persist { path: path.to_path_buf(), source: e.error })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn read_reports_missing_and_binary_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.xml");
        assert!(matches!(read_text(&missing), Err(ConfigError::NotFound { .. })));

        let binary = dir.path().join("bin.cfg");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&binary), Err(ConfigError::NotUtf8 { .. })));
    }

    #[test]
    fn atomic_write_replaces_content_and_keeps_mode() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("zoo.cfg");
        fs::write(&target, "tickTime=2000\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(0o640)).unwrap();
        }

        write_text(&target, "tickTime=3000\n", true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "tickTime=3000\n");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o640);
        }
        // No staging files left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn in_place_write() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("server.properties");
        write_text(&target, "a=1\n", false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "a=1\n");
    }

    #[test]
    fn parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("opt/hbase/conf/hbase-site.xml");
        ensure_parent_dir(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
    }

    #[test]
    fn path_lock_serializes_critical_sections() {
        let dir = tempfile::tempdir().unwrap();
        let target = Arc::new(dir.path().join("shared.cfg"));
        let inside = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let target = Arc::clone(&target);
                let inside = Arc::clone(&inside);
                thread::spawn(move || {
                    with_path_lock(&target, || {
                        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                        thread::yield_now();
                        inside.fetch_sub(1, Ordering::SeqCst);
                    })
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
