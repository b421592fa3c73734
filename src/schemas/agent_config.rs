// Shape of the agent's own configuration file (`~/.cluster-agent/config.yaml`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::schemas::component::Component;

/// Which OS-family default directories to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamilyChoice {
    /// Detect from `/etc/os-release` and friends.
    #[default]
    Auto,
    Redhat,
    Debian,
}

/// What the Line KV mutator does when the target key occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeyPolicy {
    /// Replace the first occurrence, pass later ones through unchanged.
    #[default]
    ReplaceFirst,
    /// Replace the first occurrence and drop the later ones.
    Collapse,
    /// Refuse to touch a file where the key is duplicated.
    Reject,
}

impl FromStr for DuplicateKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace-first" | "first" => Ok(DuplicateKeyPolicy::ReplaceFirst),
            "collapse" => Ok(DuplicateKeyPolicy::Collapse),
            "reject" => Ok(DuplicateKeyPolicy::Reject),
            _ => Err(format!(
                "Invalid duplicate-key policy '{s}'. Must be one of: replace-first, collapse, reject"
            )),
        }
    }
}

impl fmt::Display for DuplicateKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DuplicateKeyPolicy::ReplaceFirst => write!(f, "replace-first"),
            DuplicateKeyPolicy::Collapse => write!(f, "collapse"),
            DuplicateKeyPolicy::Reject => write!(f, "reject"),
        }
    }
}

fn default_atomic_writes() -> bool {
    true
}

/// The agent configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub os_family: OsFamilyChoice,
    /// Installation homes used when `<COMPONENT>_HOME` is not set.
    pub component_homes: HashMap<Component, String>,
    /// Directories searched before anything else.
    pub conf_dirs: Vec<String>,
    #[serde(default = "default_atomic_writes")]
    pub atomic_writes: bool,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            os_family: OsFamilyChoice::Auto,
            component_homes: HashMap::new(),
            conf_dirs: Vec::new(),
            atomic_writes: default_atomic_writes(),
            duplicate_keys: DuplicateKeyPolicy::ReplaceFirst,
        }
    }
}
