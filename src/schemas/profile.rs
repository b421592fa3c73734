use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::ConfigFileSpec;
use crate::schemas::rules::{ConventionRule, ExactRule};

/// Everything the engine knows about one component, as static data.
///
/// Each module under `crate::components` exports one of these; the resolver,
/// validator and file locator are generic interpreters over it.
#[derive(Debug)]
pub struct ComponentProfile {
    pub component: Component,
    /// Environment variable pointing at the installation, e.g. `HBASE_HOME`.
    pub home_env: &'static str,
    /// Configuration directory relative to the installation home.
    pub conf_subdir: &'static str,
    /// Default configuration directory on Red-Hat-family systems.
    pub redhat_dir: &'static str,
    /// Default configuration directory on Debian-family systems.
    pub debian_dir: &'static str,
    /// Distribution-packaged locations tried last (`/etc/<component>/conf`).
    pub legacy_dirs: &'static [&'static str],
    pub normalization: NormalizationStyle,
    /// Files this component accepts; the first one is the default target.
    pub files: &'static [ConfigFileSpec],
    /// Ordered schema table. Order is precedence.
    pub schema: &'static [SchemaEntry],
    pub exact_rules: &'static [ExactRule],
    pub convention_rules: &'static [ConventionRule],
    /// Keys written as YAML flow sequences when the target file is YAML-like.
    pub list_keys: &'static [&'static str],
}

impl ComponentProfile {
    /// Looks up an accepted file by its exact name.
    pub fn file_spec(&self, file_name: &str) -> Option<&'static ConfigFileSpec> {
        self.files.iter().find(|spec| spec.name == file_name)
    }

    pub fn accepts_file(&self, file_name: &str) -> bool {
        self.file_spec(file_name).is_some()
    }

    pub fn is_list_key(&self, key: &str) -> bool {
        self.list_keys.contains(&key)
    }
}
