// Resolve → validate → locate → mutate, for one parameter at a time.
//
// Validation always finishes before any file is opened, so a rejected value
// never causes a write. Every failure comes back as a closed status code;
// the error detail is only logged at debug level.

use colored::Colorize;
use std::path::PathBuf;

use crate::components;
use crate::libs::errors::ConfigError;
use crate::libs::file_locator::ConfigLocator;
use crate::libs::mutators::{self, MutationOptions, UpsertAction, line_kv};
use crate::libs::resolver::{self, NotFound};
use crate::libs::validator;
use crate::log_debug;
use crate::schemas::agent_config::AgentConfig;
use crate::schemas::component::Component;
use crate::schemas::entry::ResolvedParameter;
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::status::{ConfigStatus, DispatchStatus, ValidationOutcome};

/// A request that passed resolution and validation, with the file it will
/// be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    pub component: Component,
    pub parameter: ResolvedParameter,
    /// What actually goes after the separator (YAML lists rendered).
    pub rendered_value: String,
    pub path: PathBuf,
    pub format: FileFormat,
}

/// Looks up `file_name` among the files `component` accepts.
fn accepted_spec(component: Component, file_name: &str) -> Result<&'static ConfigFileSpec, ConfigError> {
    let profile = components::profile(component);
    profile.file_spec(file_name).ok_or_else(|| ConfigError::UnacceptedFile {
        component,
        file: file_name.to_string(),
        accepted: profile.files.iter().map(|f| f.name).collect::<Vec<_>>().join(", "),
    })
}

/// The text written for `key`: list keys in YAML files become flow
/// sequences, other YAML values are quoted when a bare scalar would be read
/// back differently, everything else is the trimmed value.
pub fn render_value(profile: &ComponentProfile, key: &str, value: &str, format: FileFormat) -> String {
    match format {
        FileFormat::LineKv(Separator::Colon) if profile.is_list_key(key) => line_kv::render_yaml_list(value),
        FileFormat::LineKv(Separator::Colon) => line_kv::render_yaml_scalar(value),
        _ => value.trim().to_string(),
    }
}

fn report(err: ConfigError) -> ConfigStatus {
    let status = err.status();
    log_debug!("[Dispatcher] {} ({})", err, status.to_string().red());
    status
}

pub struct Dispatcher {
    locator: ConfigLocator,
    options: MutationOptions,
}

impl Dispatcher {
    /// Dispatcher over the real environment, configured by `config`.
    pub fn new(config: &AgentConfig) -> Self {
        Self::with_parts(ConfigLocator::new(config), MutationOptions::from(config))
    }

    pub fn with_parts(locator: ConfigLocator, options: MutationOptions) -> Self {
        Self { locator, options }
    }

    pub fn locator(&self) -> &ConfigLocator {
        &self.locator
    }

    /// Runs every check a write needs without touching any file.
    ///
    /// An explicit `target_file` must be one the component accepts; it also
    /// steers resolution towards the schema slot in that file and overrides
    /// the resolved target.
    pub fn plan(
        &self,
        component: Component,
        param_name: &str,
        value: &str,
        target_file: Option<&str>,
    ) -> Result<WritePlan, DispatchStatus> {
        let explicit = match target_file {
            Some(file) => Some(accepted_spec(component, file).map_err(|e| DispatchStatus::from(report(e)))?),
            None => None,
        };

        let resolved = match explicit {
            Some(spec) => resolver::resolve_in_file(component, param_name, spec.name),
            None => resolver::resolve(component, param_name),
        }
        .map_err(|e| DispatchStatus::from(ValidationOutcome::from(e)))?;

        let outcome = validator::validate_value(component, &resolved.canonical_name, value);
        if !outcome.is_ok() {
            return Err(outcome.into());
        }

        let spec = match explicit {
            Some(spec) => spec,
            None => accepted_spec(component, resolved.target_file).map_err(|e| DispatchStatus::from(report(e)))?,
        };
        let path = self.locator.target_path(component, spec).map_err(|e| DispatchStatus::from(report(e)))?;

        let profile = components::profile(component);
        let rendered_value = render_value(profile, &resolved.canonical_name, value, spec.format);
        let mut parameter = resolved.with_value(value.trim());
        parameter.target_file = spec.name.to_string();

        Ok(WritePlan { component, parameter, rendered_value, path, format: spec.format })
    }

    /// Writes a planned change.
    pub fn execute(&self, plan: &WritePlan) -> Result<UpsertAction, ConfigStatus> {
        let action = mutators::upsert(
            plan.format,
            &plan.path,
            &plan.parameter.canonical_name,
            &plan.rendered_value,
            &self.options,
        )
        .map_err(report)?;
        log_debug!(
            "[Dispatcher] {} {} = {} ({}) in {}",
            plan.component,
            plan.parameter.canonical_name.bold(),
            plan.rendered_value,
            action,
            plan.path.display()
        );
        Ok(action)
    }

    /// Full pipeline for one parameter.
    pub fn apply(
        &self,
        component: Component,
        param_name: &str,
        value: &str,
        target_file: Option<&str>,
    ) -> DispatchStatus {
        let plan = match self.plan(component, param_name, value, target_file) {
            Ok(plan) => plan,
            Err(status) => return status,
        };
        match self.execute(&plan) {
            Ok(_) => ConfigStatus::Success.into(),
            Err(status) => status.into(),
        }
    }

    /// Resolves, validates and writes `key = value` into `target_file`.
    ///
    /// Runs the same checks as [`Dispatcher::plan`] with `target_file` as the
    /// explicit target, so aliases are written under their canonical key and
    /// a rejected value never reaches the file.
    ///
    /// # Returns
    /// * `SaveFailed` for a file the component does not accept, an unknown
    ///   key, or a value that fails validation.
    /// * The write status otherwise.
    pub fn modify_config(&self, component: Component, key: &str, value: &str, target_file: &str) -> ConfigStatus {
        let plan = match self.plan(component, key, value, Some(target_file)) {
            Ok(plan) => plan,
            Err(status) => return refused(component, key, status),
        };
        match self.execute(&plan) {
            Ok(_) => ConfigStatus::Success,
            Err(status) => status,
        }
    }
}

/// Narrows a planning failure to a `ConfigStatus`.
fn refused(component: Component, key: &str, status: DispatchStatus) -> ConfigStatus {
    match status {
        DispatchStatus::Config(status) => status,
        DispatchStatus::Validation(outcome) => {
            log_debug!("[Dispatcher] {} {} refused: {}", component, key.bold(), outcome.to_string().red());
            ConfigStatus::SaveFailed
        }
    }
}

/// Validates `value` for `param_name`, resolving the name first.
pub fn validate_config_param(component: Component, param_name: &str, value: &str) -> ValidationOutcome {
    validator::validate_param(component, param_name, value)
}

/// Canonical key and target file for `param_name`, paired with `value`.
pub fn resolve_config_param(
    component: Component,
    param_name: &str,
    value: &str,
) -> Result<ResolvedParameter, NotFound> {
    resolver::resolve(component, param_name).map(|resolved| resolved.with_value(value))
}

/// Resolves, validates and writes `param = value` into `target_file` using
/// the default agent configuration and the process environment.
pub fn modify_config(component: Component, param: &str, value: &str, target_file: &str) -> ConfigStatus {
    Dispatcher::new(&AgentConfig::default()).modify_config(component, param, value, target_file)
}

/// Resolve, validate and write `param_name = value` using the default agent
/// configuration and the process environment.
pub fn apply_config_param(
    component: Component,
    param_name: &str,
    value: &str,
    target_file: Option<&str>,
) -> DispatchStatus {
    Dispatcher::new(&AgentConfig::default()).apply(component, param_name, value, target_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::utilities::platform::OsFamily;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    fn dispatcher_for(dir: &Path) -> Dispatcher {
        let locator = ConfigLocator::with_env(
            &AgentConfig::default(),
            Box::new(HashMap::<String, String>::new()),
            OsFamily::RedHat,
        )
        .with_extra_dirs([dir.to_str().unwrap()])
        .with_system_root(dir.join("system"));
        Dispatcher::with_parts(locator, MutationOptions::default())
    }

    #[test]
    fn invalid_values_never_reach_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = dispatcher_for(dir.path());
        let status = dispatcher.apply(Component::Hbase, "hbase.zookeeper.property.clientPort", "70000", None);
        assert_eq!(status, DispatchStatus::Validation(ValidationOutcome::ConstraintViolated));
        assert!(!dir.path().join("hbase-site.xml").exists());
    }

    #[test]
    fn unknown_names_stop_before_validation() {
        let dir = tempfile::tempdir().unwrap();
        let status = dispatcher_for(dir.path()).apply(Component::Kafka, "no.such.key.anywhere", "", None);
        assert_eq!(status, DispatchStatus::Validation(ValidationOutcome::ParamNotFound));
    }

    #[test]
    fn unaccepted_target_file_is_save_failed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("storm.yaml"), "ui.port: 8080\n").unwrap();
        let dispatcher = dispatcher_for(dir.path());
        assert_eq!(
            dispatcher.modify_config(Component::Storm, "ui.port", "9090", "nimbus.yaml"),
            ConfigStatus::SaveFailed
        );
        assert_eq!(
            dispatcher.apply(Component::Storm, "ui.port", "9090", Some("storm.yml")),
            DispatchStatus::Config(ConfigStatus::SaveFailed)
        );
        assert_eq!(fs::read_to_string(dir.path().join("storm.yaml")).unwrap(), "ui.port: 8080\n");
        assert!(!dir.path().join("nimbus.yaml").exists());
    }

    #[test]
    fn explicit_file_steers_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dispatcher_for(dir.path())
            .plan(Component::Hive, "hive.server2.authentication", "KERBEROS", Some("hiveserver2-site.xml"))
            .unwrap();
        assert_eq!(plan.parameter.target_file, "hiveserver2-site.xml");
        assert_eq!(plan.path, dir.path().join("hiveserver2-site.xml"));
    }

    #[test]
    fn line_files_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let status = dispatcher_for(dir.path()).apply(Component::Zookeeper, "tickTime", "2000", None);
        assert_eq!(status, DispatchStatus::Config(ConfigStatus::FileNotFound));
        assert!(!dir.path().join("zoo.cfg").exists());
    }

    #[test]
    fn modify_checks_the_value_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoo.cfg");
        let original = "tickTime=2000\nclientPort=2181\n";
        fs::write(&path, original).unwrap();
        let dispatcher = dispatcher_for(dir.path());

        let rejected = [("clientPort", "70000"), ("clientPort", "  "), ("no.such.zk.key", "1"), ("tickTime", "soon")];
        for (key, value) in rejected {
            let status = dispatcher.modify_config(Component::Zookeeper, key, value, "zoo.cfg");
            assert_eq!(status, ConfigStatus::SaveFailed, "{key} = {value:?}");
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn modify_writes_the_canonical_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoo.cfg");
        fs::write(&path, "tickTime=2000\n").unwrap();
        let dispatcher = dispatcher_for(dir.path());

        let status = dispatcher.modify_config(Component::Zookeeper, "TICK_TIME", "3000", "zoo.cfg");
        assert_eq!(status, ConfigStatus::Success);
        let status = dispatcher.modify_config(Component::Zookeeper, "SERVER.1", "zk1:2888:3888", "zoo.cfg");
        assert_eq!(status, ConfigStatus::Success);
        assert_eq!(fs::read_to_string(&path).unwrap(), "tickTime=3000\nserver.1=zk1:2888:3888\n");
    }

    #[test]
    fn yaml_values_with_comment_marks_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storm.yaml");
        fs::write(&path, "ui.port: 8080\n").unwrap();
        let dispatcher = dispatcher_for(dir.path());

        assert_eq!(
            dispatcher.apply(Component::Storm, "storm.local.dir", "/var/storm #primary", None),
            DispatchStatus::Config(ConfigStatus::Success)
        );
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "ui.port: 8080\nstorm.local.dir: \"/var/storm #primary\"\n");
        let document: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(document.get("storm.local.dir").and_then(|v| v.as_str()), Some("/var/storm #primary"));
    }

    #[test]
    fn storm_lists_are_rendered_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storm.yaml");
        fs::write(&path, "storm.local.dir: \"/var/storm\"\n").unwrap();
        let status = dispatcher_for(dir.path()).apply(Component::Storm, "STORM_ZOOKEEPER_SERVERS", "zk1,zk2", None);
        assert_eq!(status, DispatchStatus::Config(ConfigStatus::Success));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "storm.local.dir: \"/var/storm\"\nstorm.zookeeper.servers: [\"zk1\", \"zk2\"]\n"
        );
    }

    #[test]
    fn resolve_attaches_value() {
        let resolved = resolve_config_param(Component::Hbase, "HBASE_ROOT_DIR", "hdfs://nn:8020/hbase").unwrap();
        assert_eq!(resolved.canonical_name, "hbase.rootdir");
        assert_eq!(resolved.target_file, "hbase-site.xml");
        assert_eq!(resolved.value, "hdfs://nn:8020/hbase");
        assert_eq!(
            validate_config_param(Component::Kafka, "bootstrap.servers", "host1:9092,host2"),
            ValidationOutcome::InvalidFormat
        );
    }
}
