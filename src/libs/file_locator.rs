// Finds the on-disk configuration file for a component.
//
// Candidate directories, in order:
//   1. extra conf dirs (agent config, then --conf-dir)
//   2. $<COMPONENT>_HOME/<subdir>
//   3. component_homes[<component>]/<subdir> from the agent config
//   4. the OS-family default (/opt/... or /usr/local/...)
//   5. legacy distribution paths (/etc/<component>/conf)
// The first directory that already holds the file wins.

use colored::Colorize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::components;
use crate::libs::errors::ConfigError;
use crate::libs::utilities::path_helpers::expand_path;
use crate::libs::utilities::platform::{OsFamily, resolve_os_family};
use crate::log_debug;
use crate::schemas::agent_config::AgentConfig;
use crate::schemas::component::Component;
use crate::schemas::file_format::ConfigFileSpec;

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment. Blank values count as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.trim().is_empty()).cloned()
    }
}

pub struct ConfigLocator {
    env: Box<dyn EnvSource>,
    conf_dirs: Vec<PathBuf>,
    component_homes: HashMap<Component, PathBuf>,
    os_family: OsFamily,
    system_root: Option<PathBuf>,
}

impl ConfigLocator {
    /// Locator over the real environment, with the OS family taken from the
    /// agent config (detected when set to `auto`).
    pub fn new(config: &AgentConfig) -> Self {
        Self::with_env(config, Box::new(SystemEnv), resolve_os_family(config.os_family))
    }

    pub fn with_env(config: &AgentConfig, env: Box<dyn EnvSource>, os_family: OsFamily) -> Self {
        Self {
            env,
            conf_dirs: config.conf_dirs.iter().map(|d| expand_path(d)).collect(),
            component_homes: config.component_homes.iter().map(|(c, home)| (*c, expand_path(home))).collect(),
            os_family,
            system_root: None,
        }
    }

    /// Adds directories searched after the configured ones but before any
    /// component default.
    pub fn with_extra_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.conf_dirs.extend(dirs.into_iter().map(|d| expand_path(d.as_ref())));
        self
    }

    /// Looks for the OS-family and legacy directories under `root` instead
    /// of `/`, e.g. `/opt/kafka/config` becomes `<root>/opt/kafka/config`.
    pub fn with_system_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.system_root = Some(root.into());
        self
    }

    pub fn os_family(&self) -> OsFamily {
        self.os_family
    }

    fn system_dir(&self, dir: &str) -> PathBuf {
        match &self.system_root {
            Some(root) => root.join(dir.trim_start_matches('/')),
            None => PathBuf::from(dir),
        }
    }

    /// Every directory that may hold `component`'s files, in search order,
    /// without duplicates.
    pub fn candidate_dirs(&self, component: Component) -> Vec<PathBuf> {
        let profile = components::profile(component);
        let mut dirs: Vec<PathBuf> = self.conf_dirs.clone();

        if let Some(home) = self.env.var(profile.home_env) {
            dirs.push(expand_path(&home).join(profile.conf_subdir));
        }
        if let Some(home) = self.component_homes.get(&component) {
            dirs.push(home.join(profile.conf_subdir));
        }
        match self.os_family {
            OsFamily::RedHat => dirs.push(self.system_dir(profile.redhat_dir)),
            OsFamily::Debian => dirs.push(self.system_dir(profile.debian_dir)),
            OsFamily::Unknown => {
                dirs.push(self.system_dir(profile.redhat_dir));
                dirs.push(self.system_dir(profile.debian_dir));
            }
        }
        dirs.extend(profile.legacy_dirs.iter().map(|dir| self.system_dir(dir)));

        let mut unique = Vec::with_capacity(dirs.len());
        for dir in dirs {
            if !unique.contains(&dir) {
                unique.push(dir);
            }
        }
        unique
    }

    /// First existing `<dir>/<file_name>`.
    pub fn locate(&self, component: Component, file_name: &str) -> Option<PathBuf> {
        let found = self
            .candidate_dirs(component)
            .into_iter()
            .map(|dir| dir.join(file_name))
            .find(|candidate| candidate.is_file());
        log_debug!("[Locator] {} {} -> {:?}", component, file_name, found);
        found
    }

    /// First candidate directory that exists, for listings.
    pub fn discovered_dir(&self, component: Component) -> Option<PathBuf> {
        self.candidate_dirs(component).into_iter().find(|dir| dir.is_dir())
    }

    /// Path the mutator for `spec` should work on.
    ///
    /// An existing file always wins. Otherwise formats that can create their
    /// file get the path in the first candidate directory; the rest fail
    /// with [`ConfigError::NotLocated`].
    pub fn target_path(&self, component: Component, spec: &ConfigFileSpec) -> Result<PathBuf, ConfigError> {
        if let Some(found) = self.locate(component, spec.name) {
            return Ok(found);
        }
        if spec.format.can_create() {
            if let Some(first) = self.candidate_dirs(component).into_iter().next() {
                let path = first.join(spec.name);
                log_debug!(
                    "[Locator] No existing {} for {}; will create {}",
                    spec.name,
                    component,
                    path.display().to_string().cyan()
                );
                return Ok(path);
            }
        }
        Err(ConfigError::NotLocated { component, file: spec.name.to_string() })
    }
}
