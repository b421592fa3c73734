// The per-component entry points the remote-command layer calls.

use cluster_agent::facade::{hbase, hive, kafka, storm, zookeeper};
use cluster_agent::{ConfigStatus, ValidationOutcome};

#[test]
fn hbase_client_port() {
    assert_eq!(
        hbase::validate_config_param("hbase.zookeeper.property.clientPort", "2181"),
        ValidationOutcome::ValidationOk
    );
    assert_eq!(
        hbase::validate_config_param("hbase.zookeeper.property.clientPort", "70000"),
        ValidationOutcome::ConstraintViolated
    );
}

#[test]
fn hbase_root_dir_resolves() {
    let resolved = hbase::resolve_config_param("HBASE_ROOT_DIR", "hdfs://nn:8020/hbase").unwrap();
    assert_eq!(resolved.canonical_name, "hbase.rootdir");
    assert_eq!(resolved.target_file, "hbase-site.xml");
}

#[test]
fn kafka_bootstrap_servers_need_ports() {
    assert_eq!(
        kafka::validate_config_param("bootstrap.servers", "host1:9092,host2"),
        ValidationOutcome::InvalidFormat
    );
    assert_eq!(
        kafka::validate_config_param("bootstrap.servers", "host1:9092,host2:9092"),
        ValidationOutcome::ValidationOk
    );
}

#[test]
fn unknown_names_and_empty_values() {
    assert_eq!(
        zookeeper::validate_config_param("definitely.not.a.zk.key", "1"),
        ValidationOutcome::ParamNotFound
    );
    assert_eq!(zookeeper::validate_config_param("tickTime", "   "), ValidationOutcome::ValueEmpty);
    assert!(hive::resolve_config_param("no_such_hive_setting", "x").is_err());
}

#[test]
fn storm_only_accepts_its_own_files() {
    for name in ["storm.yml", "nimbus.yaml", "../storm.yaml"] {
        assert_eq!(storm::modify_config("ui.port", "8080", name), ConfigStatus::SaveFailed);
    }
}

#[test]
fn modify_refuses_before_looking_for_files() {
    // Refused during planning, so the host's own configuration is never read.
    assert_eq!(zookeeper::modify_config("clientPort", "70000", "zoo.cfg"), ConfigStatus::SaveFailed);
    assert_eq!(zookeeper::modify_config("clientPort", "", "zoo.cfg"), ConfigStatus::SaveFailed);
    assert_eq!(kafka::modify_config("no.such.kafka.key", "1", "server.properties"), ConfigStatus::SaveFailed);
}

#[test]
fn resolution_is_deterministic() {
    let first = hive::resolve_config_param("hive.server2.authentication", "KERBEROS").unwrap();
    for _ in 0..3 {
        assert_eq!(hive::resolve_config_param("hive.server2.authentication", "KERBEROS").unwrap(), first);
    }
    assert_eq!(first.target_file, "hive-site.xml");
}
