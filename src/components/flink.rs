// Flink: flink-conf.yaml, flat `key: value` lines.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_YAML, ConventionRule, DURATION_UNITS_LONG, ExactRule, ValueRule, contains, exact, suffix,
};

const FLINK_CONF: &str = "flink-conf.yaml";

const HA_MODES: &[&str] = &["NONE", "zookeeper", "kubernetes"];

const FILES: &[ConfigFileSpec] = &[ConfigFileSpec::new(FLINK_CONF, FileFormat::LineKv(Separator::Colon))];

const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::key("jobmanager.rpc.address", FLINK_CONF),
    SchemaEntry::key("jobmanager.rpc.port", FLINK_CONF),
    SchemaEntry::key("jobmanager.memory.process.size", FLINK_CONF),
    SchemaEntry::key("jobmanager.memory.heap.size", FLINK_CONF),
    SchemaEntry::key("taskmanager.memory.process.size", FLINK_CONF),
    SchemaEntry::key("taskmanager.memory.flink.size", FLINK_CONF),
    SchemaEntry::key("taskmanager.memory.managed.fraction", FLINK_CONF),
    SchemaEntry::key("taskmanager.numberOfTaskSlots", FLINK_CONF),
    SchemaEntry::alias("taskmanager.numberOfTaskSlots", "taskmanager.number-of-task-slots", FLINK_CONF),
    SchemaEntry::pattern("taskmanager.numberOfTaskSlots", r"^(task[._-]?)?slots$", FLINK_CONF),
    SchemaEntry::key("parallelism.default", FLINK_CONF),
    SchemaEntry::alias("parallelism.default", "default.parallelism", FLINK_CONF),
    SchemaEntry::key("rest.address", FLINK_CONF),
    SchemaEntry::key("rest.bind-address", FLINK_CONF),
    SchemaEntry::key("rest.port", FLINK_CONF),
    SchemaEntry::key("web.upload.dir", FLINK_CONF),
    SchemaEntry::key("io.tmp.dirs", FLINK_CONF),
    SchemaEntry::key("env.java.opts", FLINK_CONF),
    SchemaEntry::key("classloader.resolve-order", FLINK_CONF),
    SchemaEntry::key("state.backend", FLINK_CONF),
    SchemaEntry::alias("state.backend", "state.backend.type", FLINK_CONF),
    SchemaEntry::key("state.backend.incremental", FLINK_CONF),
    SchemaEntry::key("state.checkpoints.dir", FLINK_CONF),
    SchemaEntry::key("state.savepoints.dir", FLINK_CONF),
    SchemaEntry::key("execution.checkpointing.interval", FLINK_CONF),
    SchemaEntry::key("execution.checkpointing.mode", FLINK_CONF),
    SchemaEntry::key("execution.checkpointing.timeout", FLINK_CONF),
    SchemaEntry::key("restart-strategy", FLINK_CONF),
    SchemaEntry::key("restart-strategy.fixed-delay.attempts", FLINK_CONF),
    SchemaEntry::key("restart-strategy.fixed-delay.delay", FLINK_CONF),
    SchemaEntry::key("high-availability", FLINK_CONF),
    SchemaEntry::key("high-availability.type", FLINK_CONF),
    SchemaEntry::key("high-availability.storageDir", FLINK_CONF),
    SchemaEntry::alias("high-availability.storageDir", "high-availability.storage-dir", FLINK_CONF),
    SchemaEntry::key("high-availability.zookeeper.quorum", FLINK_CONF),
    SchemaEntry::key("high-availability.cluster-id", FLINK_CONF),
    SchemaEntry::key("security.kerberos.login.principal", FLINK_CONF),
    SchemaEntry::key("security.kerberos.login.keytab", FLINK_CONF),
    SchemaEntry::key("security.ssl.internal.enabled", FLINK_CONF),
    SchemaEntry::key("security.ssl.rest.enabled", FLINK_CONF),
    SchemaEntry::key("metrics.reporters", FLINK_CONF),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("jobmanager.rpc.address", ValueRule::HostList),
    exact("rest.address", ValueRule::HostList),
    exact("rest.bind-address", ValueRule::HostList),
    exact("taskmanager.numberOfTaskSlots", ValueRule::PositiveInt),
    exact("taskmanager.memory.managed.fraction", ValueRule::Ratio),
    exact("parallelism.default", ValueRule::PositiveInt),
    exact("state.backend", ValueRule::OneOf(&["hashmap", "rocksdb", "filesystem", "jobmanager"])),
    exact("state.backend.incremental", ValueRule::Boolean(BOOL_YAML)),
    exact("state.checkpoints.dir", ValueRule::Url(&[])),
    exact("state.savepoints.dir", ValueRule::Url(&[])),
    exact("high-availability.storageDir", ValueRule::Url(&[])),
    exact("execution.checkpointing.mode", ValueRule::OneOf(&["EXACTLY_ONCE", "AT_LEAST_ONCE"])),
    exact("high-availability", ValueRule::OneOf(HA_MODES)),
    exact("high-availability.type", ValueRule::OneOf(HA_MODES)),
    exact("high-availability.zookeeper.quorum", ValueRule::HostList),
    exact(
        "restart-strategy",
        ValueRule::OneOf(&[
            "none",
            "off",
            "disable",
            "fixed-delay",
            "fixeddelay",
            "failure-rate",
            "failurerate",
            "exponential-delay",
            "exponentialdelay",
        ]),
    ),
    exact("classloader.resolve-order", ValueRule::OneOf(&["child-first", "parent-first"])),
    exact("io.tmp.dirs", ValueRule::Path),
    exact("metrics.reporters", ValueRule::NonEmpty),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".port", ValueRule::Port),
    suffix(".size", ValueRule::MemorySize),
    suffix(".enabled", ValueRule::Boolean(BOOL_YAML)),
    suffix(".interval", ValueRule::Duration(DURATION_UNITS_LONG)),
    suffix(".delay", ValueRule::Duration(DURATION_UNITS_LONG)),
    contains("timeout", ValueRule::Duration(DURATION_UNITS_LONG)),
    suffix(".attempts", ValueRule::NonNegativeInt),
    suffix(".principal", ValueRule::Principal),
    suffix(".keytab", ValueRule::Path),
    suffix(".dir", ValueRule::Path),
    suffix(".opts", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Flink,
    home_env: "FLINK_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/flink/conf",
    debian_dir: "/usr/local/flink/conf",
    legacy_dirs: &["/etc/flink/conf"],
    normalization: NormalizationStyle::Dotted,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
