use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::schemas::component::Component;
use crate::schemas::status::ConfigStatus;

/// Everything that can go wrong between locating a configuration file and
/// writing it back. Each variant collapses onto exactly one [`ConfigStatus`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("no {file} found for {component} in any known configuration directory")]
    NotLocated { component: Component, file: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("failed to parse XML in {}: {message}", path.display())]
    XmlParse { path: PathBuf, message: String },

    #[error("root element of {} is <{found}>, expected <configuration>", path.display())]
    XmlRoot { path: PathBuf, found: String },

    #[error("failed to serialize XML for {}: {message}", path.display())]
    XmlEmit { path: PathBuf, message: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move new content over {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{component} does not accept '{file}' (expected one of: {accepted})")]
    UnacceptedFile { component: Component, file: String, accepted: String },

    #[error("key '{key}' appears {count} times in {}", path.display())]
    DuplicateKey { path: PathBuf, key: String, count: usize },

    #[error("rewriting {} would leave it unparseable as YAML: {source}", path.display())]
    YamlBroken {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("'{key}' in {} would not read back as the value written", path.display())]
    YamlReadBack { path: PathBuf, key: String },
}

impl ConfigError {
    /// The closed status this error is reported as.
    pub fn status(&self) -> ConfigStatus {
        match self {
            ConfigError::NotFound { .. } | ConfigError::NotLocated { .. } => ConfigStatus::FileNotFound,
            ConfigError::Read { .. } => ConfigStatus::FileReadError,
            ConfigError::NotUtf8 { .. }
            | ConfigError::DuplicateKey { .. }
            | ConfigError::YamlBroken { .. }
            | ConfigError::YamlReadBack { .. } => ConfigStatus::InvalidConfigFile,
            ConfigError::XmlParse { .. } => ConfigStatus::XmlParseError,
            ConfigError::XmlRoot { .. } => ConfigStatus::XmlInvalidRoot,
            ConfigError::XmlEmit { .. } => ConfigStatus::XmlUpdateError,
            ConfigError::Write { .. } => ConfigStatus::FileWriteError,
            ConfigError::Persist { .. } | ConfigError::UnacceptedFile { .. } => ConfigStatus::SaveFailed,
        }
    }
}

impl From<ConfigError> for ConfigStatus {
    fn from(err: ConfigError) -> Self {
        err.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_failure_stage() {
        let path = PathBuf::from("/tmp/x");
        let io_err = || io::Error::other("boom");
        assert_eq!(ConfigError::NotFound { path: path.clone() }.status(), ConfigStatus::FileNotFound);
        assert_eq!(
            ConfigError::Read { path: path.clone(), source: io_err() }.status(),
            ConfigStatus::FileReadError
        );
        assert_eq!(
            ConfigError::Write { path: path.clone(), source: io_err() }.status(),
            ConfigStatus::FileWriteError
        );
        assert_eq!(
            ConfigError::Persist { path: path.clone(), source: io_err() }.status(),
            ConfigStatus::SaveFailed
        );
        assert_eq!(
            ConfigError::XmlRoot { path: path.clone(), found: "beans".into() }.status(),
            ConfigStatus::XmlInvalidRoot
        );
        assert_eq!(
            ConfigError::YamlReadBack { path: path.clone(), key: "storm.local.dir".into() }.status(),
            ConfigStatus::InvalidConfigFile
        );
        assert_eq!(
            ConfigError::DuplicateKey { path, key: "a".into(), count: 2 }.status(),
            ConfigStatus::InvalidConfigFile
        );
        assert_eq!(
            ConfigError::UnacceptedFile {
                component: Component::Storm,
                file: "nimbus.yaml".into(),
                accepted: "storm.yaml, defaults.yaml".into(),
            }
            .status(),
            ConfigStatus::SaveFailed
        );
    }

    #[test]
    fn messages_name_the_file() {
        let err = ConfigError::XmlRoot { path: PathBuf::from("/etc/hbase/conf/hbase-site.xml"), found: "beans".into() };
        let message = err.to_string();
        assert!(message.contains("hbase-site.xml"));
        assert!(message.contains("<beans>"));
    }
}
