// Closed status enumerations handed back to the external command layer.
// The command layer turns them into messages and exit codes; the engine
// itself never prints them.

use serde::Serialize;
use std::fmt;

/// Result of checking a parameter name/value pair before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationOutcome {
    /// Value accepted (also the default for keys without a rule).
    ValidationOk,
    /// The raw parameter name does not resolve against the component's schema.
    ParamNotFound,
    /// Value is empty or whitespace only.
    ValueEmpty,
    /// Value does not have the shape the key requires (e.g. `abc` for a port).
    InvalidFormat,
    /// Value is well-formed but outside the allowed range or set.
    ConstraintViolated,
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationOutcome::ValidationOk)
    }

    /// Numeric code, disjoint from [`ConfigStatus::code`] except for success.
    pub fn code(&self) -> i32 {
        match self {
            ValidationOutcome::ValidationOk => 0,
            ValidationOutcome::ParamNotFound => 10,
            ValidationOutcome::ValueEmpty => 11,
            ValidationOutcome::InvalidFormat => 12,
            ValidationOutcome::ConstraintViolated => 13,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            ValidationOutcome::ValidationOk => "VALIDATION_OK",
            ValidationOutcome::ParamNotFound => "ERROR_PARAM_NOT_FOUND",
            ValidationOutcome::ValueEmpty => "ERROR_VALUE_EMPTY",
            ValidationOutcome::InvalidFormat => "ERROR_INVALID_FORMAT",
            ValidationOutcome::ConstraintViolated => "ERROR_CONSTRAINT_VIOLATED",
        };
        write!(f, "{text}")
    }
}

/// Result of locating and mutating a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigStatus {
    Success,
    FileNotFound,
    XmlParseError,
    XmlInvalidRoot,
    XmlUpdateError,
    FileWriteError,
    FileReadError,
    InvalidConfigFile,
    SaveFailed,
}

impl ConfigStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ConfigStatus::Success)
    }

    pub fn code(&self) -> i32 {
        match self {
            ConfigStatus::Success => 0,
            ConfigStatus::FileNotFound => 1,
            ConfigStatus::XmlParseError => 2,
            ConfigStatus::XmlInvalidRoot => 3,
            ConfigStatus::XmlUpdateError => 4,
            ConfigStatus::FileWriteError => 5,
            ConfigStatus::FileReadError => 6,
            ConfigStatus::InvalidConfigFile => 7,
            ConfigStatus::SaveFailed => 8,
        }
    }
}

impl fmt::Display for ConfigStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            ConfigStatus::Success => "SUCCESS",
            ConfigStatus::FileNotFound => "FILE_NOT_FOUND",
            ConfigStatus::XmlParseError => "XML_PARSE_ERROR",
            ConfigStatus::XmlInvalidRoot => "XML_INVALID_ROOT",
            ConfigStatus::XmlUpdateError => "XML_UPDATE_ERROR",
            ConfigStatus::FileWriteError => "FILE_WRITE_ERROR",
            ConfigStatus::FileReadError => "FILE_READ_ERROR",
            ConfigStatus::InvalidConfigFile => "INVALID_CONFIG_FILE",
            ConfigStatus::SaveFailed => "SAVE_FAILED",
        };
        write!(f, "{text}")
    }
}

/// Outcome of a full resolve → validate → mutate request. Validation failures
/// and file failures stay distinguishable so the caller can tell "nothing was
/// attempted" from "the write failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DispatchStatus {
    Validation(ValidationOutcome),
    Config(ConfigStatus),
}

impl DispatchStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchStatus::Config(ConfigStatus::Success))
    }

    pub fn code(&self) -> i32 {
        match self {
            DispatchStatus::Validation(outcome) => outcome.code(),
            DispatchStatus::Config(status) => status.code(),
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DispatchStatus::Validation(outcome) => outcome.fmt(f),
            DispatchStatus::Config(status) => status.fmt(f),
        }
    }
}

impl From<ValidationOutcome> for DispatchStatus {
    fn from(outcome: ValidationOutcome) -> Self {
        DispatchStatus::Validation(outcome)
    }
}

impl From<ConfigStatus> for DispatchStatus {
    fn from(status: ConfigStatus) -> Self {
        DispatchStatus::Config(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_codes_are_distinct() {
        let mut codes: Vec<i32> = [
            ConfigStatus::FileNotFound,
            ConfigStatus::XmlParseError,
            ConfigStatus::XmlInvalidRoot,
            ConfigStatus::XmlUpdateError,
            ConfigStatus::FileWriteError,
            ConfigStatus::FileReadError,
            ConfigStatus::InvalidConfigFile,
            ConfigStatus::SaveFailed,
        ]
        .iter()
        .map(ConfigStatus::code)
        .chain(
            [
                ValidationOutcome::ParamNotFound,
                ValidationOutcome::ValueEmpty,
                ValidationOutcome::InvalidFormat,
                ValidationOutcome::ConstraintViolated,
            ]
            .iter()
            .map(ValidationOutcome::code),
        )
        .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert!(!codes.contains(&0));
    }

    #[test]
    fn dispatch_status_success_only_for_config_success() {
        assert!(DispatchStatus::from(ConfigStatus::Success).is_success());
        assert!(!DispatchStatus::from(ValidationOutcome::ValidationOk).is_success());
        assert_eq!(
            DispatchStatus::from(ValidationOutcome::InvalidFormat).to_string(),
            "ERROR_INVALID_FORMAT"
        );
    }
}
