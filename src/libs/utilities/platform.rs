// Our custom logging macros.
use crate::log_debug;
use crate::schemas::agent_config::OsFamilyChoice;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Linux distribution family. Vendors lay out their packages differently on
/// each, so the file locator keeps one default directory per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// RHEL, CentOS, Fedora, Rocky, Alma, Oracle Linux, Amazon Linux, SUSE.
    RedHat,
    /// Debian, Ubuntu and derivatives.
    Debian,
    Unknown,
}

/// Maps a distribution ID (`ID=` / `ID_LIKE=` token from os-release) onto a family.
///
/// # Arguments
/// * `id`: A single distribution identifier, e.g. "ubuntu", "rhel", "centos".
///
/// # Returns
/// * `OsFamily::Unknown` if the identifier is not recognized.
pub fn normalize_distro_id(id: &str) -> OsFamily {
    match id.trim().trim_matches('"').to_lowercase().as_str() {
        "rhel" | "centos" | "fedora" | "rocky" | "almalinux" | "ol" | "amzn" | "suse"
        | "sles" | "opensuse" | "opensuse-leap" => OsFamily::RedHat,
        "debian" | "ubuntu" | "linuxmint" | "raspbian" | "pop" => OsFamily::Debian,
        _ => OsFamily::Unknown,
    }
}

/// Determines the family from the contents of an os-release file.
/// `ID` is consulted first, then every token of `ID_LIKE`.
pub fn os_family_from_release(contents: &str) -> OsFamily {
    let field = |name: &str| {
        contents.lines().find_map(|line| {
            let (key, value) = line.split_once('=')?;
            (key.trim() == name).then(|| value.trim().trim_matches('"').to_string())
        })
    };

    if let Some(id) = field("ID") {
        let family = normalize_distro_id(&id);
        if family != OsFamily::Unknown {
            return family;
        }
    }
    field("ID_LIKE")
        .map(|like| {
            like.split_whitespace()
                .map(normalize_distro_id)
                .find(|family| *family != OsFamily::Unknown)
                .unwrap_or(OsFamily::Unknown)
        })
        .unwrap_or(OsFamily::Unknown)
}

/// Detects the family of the running system, looking below `root`
/// (normally `/`).
///
/// Order: `etc/os-release`, then the marker files `etc/redhat-release` and
/// `etc/debian_version`.
pub fn detect_os_family_in(root: &Path) -> OsFamily {
    if let Ok(contents) = fs::read_to_string(root.join("etc/os-release")) {
        let family = os_family_from_release(&contents);
        if family != OsFamily::Unknown {
            log_debug!("[Platform] os-release reports family {:?}", family);
            return family;
        }
    }
    if root.join("etc/redhat-release").exists() {
        return OsFamily::RedHat;
    }
    if root.join("etc/debian_version").exists() {
        return OsFamily::Debian;
    }
    log_debug!(
        "[Platform] Could not determine the OS family under {}; both Red-Hat and Debian default paths will be tried.",
        root.display().to_string().yellow()
    );
    OsFamily::Unknown
}

/// Applies the agent config's choice, detecting only when asked to.
pub fn resolve_os_family(choice: OsFamilyChoice) -> OsFamily {
    match choice {
        OsFamilyChoice::Redhat => OsFamily::RedHat,
        OsFamilyChoice::Debian => OsFamily::Debian,
        OsFamilyChoice::Auto => detect_os_family_in(Path::new("/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_then_id_like() {
        let ubuntu = "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n";
        assert_eq!(os_family_from_release(ubuntu), OsFamily::Debian);

        let rocky = "ID=\"rocky\"\nID_LIKE=\"rhel centos fedora\"\n";
        assert_eq!(os_family_from_release(rocky), OsFamily::RedHat);

        let derivative = "ID=myos\nID_LIKE=\"unknownthing ubuntu\"\n";
        assert_eq!(os_family_from_release(derivative), OsFamily::Debian);

        assert_eq!(os_family_from_release("ID=alpine\n"), OsFamily::Unknown);
    }

    #[test]
    fn falls_back_to_marker_files() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("etc")).unwrap();
        assert_eq!(detect_os_family_in(root.path()), OsFamily::Unknown);

        std::fs::write(root.path().join("etc/redhat-release"), "CentOS release 7").unwrap();
        assert_eq!(detect_os_family_in(root.path()), OsFamily::RedHat);
    }

    #[test]
    fn explicit_choice_skips_detection() {
        assert_eq!(resolve_os_family(OsFamilyChoice::Debian), OsFamily::Debian);
        assert_eq!(resolve_os_family(OsFamilyChoice::Redhat), OsFamily::RedHat);
    }
}
