// Loads the agent's own configuration file.
//
// Lookup order: `--config <path>`, then $CLUSTER_AGENT_CONFIG, then
// `~/.cluster-agent/config.yaml`. A `.toml` extension selects TOML, anything
// else is read as YAML.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::libs::file_locator::{EnvSource, SystemEnv};
use crate::libs::utilities::path_helpers::expand_path;
use crate::log_debug;
use crate::schemas::agent_config::AgentConfig;

/// Environment variable naming the agent config file.
pub const CONFIG_ENV: &str = "CLUSTER_AGENT_CONFIG";

/// `~/.cluster-agent/config.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cluster-agent").join("config.yaml"))
}

/// Where the config was looked for, and whether the operator asked for that
/// path explicitly (flag or env var) rather than it being the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub explicit: bool,
}

pub fn config_source(cli_path: Option<&str>, env: &dyn EnvSource) -> Option<ConfigSource> {
    if let Some(path) = cli_path.filter(|p| !p.trim().is_empty()) {
        return Some(ConfigSource { path: expand_path(path), explicit: true });
    }
    if let Some(path) = env.var(CONFIG_ENV) {
        return Some(ConfigSource { path: expand_path(&path), explicit: true });
    }
    default_config_path().map(|path| ConfigSource { path, explicit: false })
}

/// Parses config text, picking the format from the file extension.
pub fn parse_agent_config(path: &Path, contents: &str) -> Result<AgentConfig> {
    if contents.trim().is_empty() {
        return Ok(AgentConfig::default());
    }
    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(contents).with_context(|| format!("Failed to parse TOML agent config {}", path.display()))
    } else {
        serde_yaml::from_str(contents)
            .with_context(|| format!("Failed to parse YAML agent config {}", path.display()))
    }
}

/// Loads the agent config using `env` for the `CLUSTER_AGENT_CONFIG` lookup.
///
/// The default location may be absent (defaults are used); a path given
/// explicitly must exist.
pub fn load_agent_config_with(cli_path: Option<&str>, env: &dyn EnvSource) -> Result<AgentConfig> {
    let Some(source) = config_source(cli_path, env) else {
        log_debug!("[Config] No home directory; using built-in defaults");
        return Ok(AgentConfig::default());
    };

    if !source.path.exists() {
        if source.explicit {
            bail!("Agent config {} does not exist", source.path.display());
        }
        log_debug!(
            "[Config] {} not found; using built-in defaults",
            source.path.display().to_string().yellow()
        );
        return Ok(AgentConfig::default());
    }

    let contents = fs::read_to_string(&source.path)
        .with_context(|| format!("Failed to read agent config {}", source.path.display()))?;
    let config = parse_agent_config(&source.path, &contents)?;
    log_debug!("[Config] Loaded {}: {:?}", source.path.display().to_string().green(), config);
    Ok(config)
}

/// Loads the agent config from the process environment.
pub fn load_agent_config(cli_path: Option<&str>) -> Result<AgentConfig> {
    load_agent_config_with(cli_path, &SystemEnv)
}
