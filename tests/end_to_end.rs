// Drives the public API end to end against temporary directories.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cluster_agent::libs::file_locator::ConfigLocator;
use cluster_agent::libs::mutators::MutationOptions;
use cluster_agent::libs::utilities::platform::OsFamily;
use cluster_agent::schemas::agent_config::DuplicateKeyPolicy;
use cluster_agent::{AgentConfig, Component, ConfigStatus, DispatchStatus, Dispatcher, ValidationOutcome};

fn env(pairs: &[(&str, &Path)]) -> Box<HashMap<String, String>> {
    Box::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string_lossy().to_string())).collect())
}

fn dispatcher(conf_dir: &Path, options: MutationOptions) -> Dispatcher {
    let locator = ConfigLocator::with_env(&AgentConfig::default(), env(&[]), OsFamily::RedHat)
        .with_extra_dirs([conf_dir.to_string_lossy()])
        .with_system_root(conf_dir.join("system"));
    Dispatcher::with_parts(locator, options)
}

const SUCCESS: DispatchStatus = DispatchStatus::Config(ConfigStatus::Success);

#[test]
fn hbase_rootdir_is_created_then_updated_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbase-site.xml");
    let d = dispatcher(dir.path(), MutationOptions::default());

    assert_eq!(d.apply(Component::Hbase, "HBASE_ROOT_DIR", "hdfs://nn:8020/hbase", None), SUCCESS);
    let first = fs::read_to_string(&path).unwrap();
    assert!(first.contains("<configuration>"));
    assert_eq!(first.matches("<name>hbase.rootdir</name>").count(), 1);

    assert_eq!(d.apply(Component::Hbase, "hbase.rootdir", "hdfs://nn2:8020/hbase", None), SUCCESS);
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(second.matches("<name>hbase.rootdir</name>").count(), 1);
    assert!(second.contains("hdfs://nn2:8020/hbase"));
    assert!(!second.contains("hdfs://nn:8020/hbase"));
}

#[test]
fn kafka_partitions_replace_keeps_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "num.partitions=1\n#comment\n").unwrap();

    let status = dispatcher(dir.path(), MutationOptions::default()).apply(Component::Kafka, "NUM_PARTITIONS", "8", None);
    assert_eq!(status, SUCCESS);
    assert_eq!(fs::read_to_string(&path).unwrap(), "num.partitions=8\n#comment\n");
}

#[test]
fn kafka_needs_an_existing_properties_file() {
    let dir = tempfile::tempdir().unwrap();
    let locator = ConfigLocator::with_env(
        &AgentConfig::default(),
        env(&[("KAFKA_HOME", dir.path())]),
        OsFamily::RedHat,
    )
    .with_system_root(dir.path().join("system"));
    let d = Dispatcher::with_parts(locator, MutationOptions::default());
    assert_eq!(
        d.apply(Component::Kafka, "num.partitions", "8", None),
        DispatchStatus::Config(ConfigStatus::FileNotFound)
    );
    assert!(!dir.path().join("config").exists());
}

#[test]
fn storm_rejects_unknown_file_without_touching_anything() {
    let dir = tempfile::tempdir().unwrap();
    let storm_yaml = dir.path().join("storm.yaml");
    fs::write(&storm_yaml, "nimbus.seeds: [\"n1\"]\n").unwrap();
    let before: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();

    let d = dispatcher(dir.path(), MutationOptions::default());
    assert_eq!(d.modify_config(Component::Storm, "nimbus.seeds", "n2", "storm-site.yaml"), ConfigStatus::SaveFailed);

    let after: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(before, after);
    assert_eq!(fs::read_to_string(&storm_yaml).unwrap(), "nimbus.seeds: [\"n1\"]\n");
}

#[test]
fn modify_refuses_invalid_values_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hbase-site.xml");
    let original = r#"<?xml version="1.0"?>
<configuration>
  <property>
    <name>hbase.zookeeper.property.clientPort</name>
    <value>2181</value>
  </property>
</configuration>
"#;
    fs::write(&path, original).unwrap();

    let d = dispatcher(dir.path(), MutationOptions::default());
    for value in ["70000", "", "port"] {
        let status = d.modify_config(Component::Hbase, "hbase.zookeeper.property.clientPort", value, "hbase-site.xml");
        assert_eq!(status, ConfigStatus::SaveFailed);
    }
    let status = d.modify_config(Component::Hbase, "not.an.hbase.key", "1", "hbase-site.xml");
    assert_eq!(status, ConfigStatus::SaveFailed);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    let status = d.modify_config(Component::Hbase, "HBASE_ROOT_DIR", "hdfs://nn:8020/hbase", "hbase-site.xml");
    assert_eq!(status, ConfigStatus::Success);
    let updated = fs::read_to_string(&path).unwrap();
    assert!(updated.contains("<name>hbase.rootdir</name>"));
    assert!(!updated.contains("HBASE_ROOT_DIR"));
}

#[test]
fn zookeeper_home_locates_zoo_cfg() {
    let home = tempfile::tempdir().unwrap();
    let conf = home.path().join("conf");
    fs::create_dir_all(&conf).unwrap();
    let zoo_cfg = conf.join("zoo.cfg");
    fs::write(&zoo_cfg, "# ensemble\ntickTime=2000\ndataDir=/var/zk\n").unwrap();

    let locator = ConfigLocator::with_env(
        &AgentConfig::default(),
        env(&[("ZOOKEEPER_HOME", home.path())]),
        OsFamily::Debian,
    )
    .with_system_root(home.path().join("system"));
    let d = Dispatcher::with_parts(locator, MutationOptions::default());

    assert_eq!(d.apply(Component::Zookeeper, "TICK_TIME", "3000", None), SUCCESS);
    assert_eq!(d.apply(Component::Zookeeper, "server.1", "zk1:2888:3888", None), SUCCESS);
    assert_eq!(
        fs::read_to_string(&zoo_cfg).unwrap(),
        "# ensemble\ntickTime=3000\ndataDir=/var/zk\nserver.1=zk1:2888:3888\n"
    );
}

#[test]
fn validation_failures_leave_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "bootstrap.servers=host1:9092\n").unwrap();

    let status = dispatcher(dir.path(), MutationOptions::default()).apply(
        Component::Kafka,
        "bootstrap.servers",
        "host1:9092,host2",
        Some("producer.properties"),
    );
    assert_eq!(status, DispatchStatus::Validation(ValidationOutcome::InvalidFormat));
    assert_eq!(fs::read_to_string(&path).unwrap(), "bootstrap.servers=host1:9092\n");
    assert!(!dir.path().join("producer.properties").exists());
}

#[test]
fn reject_policy_refuses_duplicated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoo.cfg");
    let original = "tickTime=2000\ntickTime=2500\n";
    fs::write(&path, original).unwrap();

    let options = MutationOptions { duplicate_keys: DuplicateKeyPolicy::Reject, ..MutationOptions::default() };
    let status = dispatcher(dir.path(), options).apply(Component::Zookeeper, "tickTime", "3000", None);
    assert_eq!(status, DispatchStatus::Config(ConfigStatus::InvalidConfigFile));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn spark_settings_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spark-defaults.conf");
    fs::write(&path, "spark.master yarn\n").unwrap();

    let d = dispatcher(dir.path(), MutationOptions::default());
    assert_eq!(d.apply(Component::Spark, "executor_memory", "4g", None), SUCCESS);
    assert_eq!(fs::read_to_string(&path).unwrap(), "spark.master yarn\nspark.executor.memory 4g\n");
}

#[test]
fn flink_alias_writes_canonical_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flink-conf.yaml");
    fs::write(&path, "jobmanager.rpc.address: localhost\n").unwrap();

    let d = dispatcher(dir.path(), MutationOptions::default());
    assert_eq!(d.apply(Component::Flink, "taskmanager.number-of-task-slots", "4", None), SUCCESS);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "jobmanager.rpc.address: localhost\ntaskmanager.numberOfTaskSlots: 4\n"
    );
}

#[test]
fn plan_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let d = dispatcher(dir.path(), MutationOptions::default());
    let plan = d.plan(Component::Hadoop, "fs.defaultFS", "hdfs://nn:8020", None).unwrap();
    assert_eq!(plan.parameter.target_file, "core-site.xml");
    assert_eq!(plan.path, dir.path().join("core-site.xml"));
    assert!(!plan.path.exists());
}
