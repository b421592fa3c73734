// Register application subcommands.
// Each module corresponds to one `cluster-agent` command-line action; they
// translate engine status values into operator messages and exit codes.

use colored::Colorize;

use cluster_agent::libs::config_loading::load_agent_config;
use cluster_agent::{AgentConfig, ConfigStatus, DispatchStatus, Dispatcher, ValidationOutcome, log_debug, log_error};

// Lists supported components and where their files were found.
pub mod components;
// Maps a raw parameter name onto its canonical key.
pub mod resolve;
// Prints a component's schema table.
pub mod schema;
// Full resolve → validate → write pipeline.
pub mod set;
// Checks a value without writing.
pub mod validate;
// Displays the version of cluster-agent
pub mod version;

/// Exit code when the agent config itself cannot be loaded (EX_CONFIG).
pub const AGENT_CONFIG_ERROR: i32 = 78;

/// Agent config with the command-line `--conf-dir` values appended.
pub struct CommandContext {
    pub config: AgentConfig,
}

impl CommandContext {
    pub fn load(config_path: Option<&str>, extra_dirs: &[String]) -> Result<Self, i32> {
        match load_agent_config(config_path) {
            Ok(mut config) => {
                config.conf_dirs.extend(extra_dirs.iter().cloned());
                log_debug!("[Agent] Effective config: {:?}", config);
                Ok(Self { config })
            }
            Err(e) => {
                log_error!("{:#}", e);
                Err(AGENT_CONFIG_ERROR)
            }
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(&self.config)
    }
}

/// Operator-facing explanation of a status value.
pub fn explain(status: DispatchStatus) -> &'static str {
    match status {
        DispatchStatus::Validation(outcome) => match outcome {
            ValidationOutcome::ValidationOk => "value accepted",
            ValidationOutcome::ParamNotFound => "parameter name is not known for this component",
            ValidationOutcome::ValueEmpty => "value is empty",
            ValidationOutcome::InvalidFormat => "value does not have the required format",
            ValidationOutcome::ConstraintViolated => "value is outside the allowed range or set",
        },
        DispatchStatus::Config(status) => match status {
            ConfigStatus::Success => "configuration saved",
            ConfigStatus::FileNotFound => "configuration file could not be found",
            ConfigStatus::XmlParseError => "configuration file is not well-formed XML",
            ConfigStatus::XmlInvalidRoot => "XML root element is not <configuration>",
            ConfigStatus::XmlUpdateError => "XML document could not be serialized",
            ConfigStatus::FileWriteError => "configuration file could not be written",
            ConfigStatus::FileReadError => "configuration file could not be read",
            ConfigStatus::InvalidConfigFile => "configuration file content is unusable for this change",
            ConfigStatus::SaveFailed => "change could not be saved",
        },
    }
}

/// Logs a failed status with its explanation and returns its exit code.
pub fn fail(context: &str, status: DispatchStatus) -> i32 {
    log_error!("{} {} ({})", context, status.to_string().red(), explain(status));
    status.code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_has_an_explanation() {
        for status in [ConfigStatus::FileNotFound, ConfigStatus::SaveFailed, ConfigStatus::XmlInvalidRoot] {
            assert!(!explain(status.into()).is_empty());
        }
        assert_eq!(explain(ValidationOutcome::ValueEmpty.into()), "value is empty");
    }
}
