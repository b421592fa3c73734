// Spark: everything goes to spark-defaults.conf as `key value` lines.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_STRICT, ConventionRule, DURATION_UNITS_LONG, ExactRule, ValueRule, contains, exact, suffix,
};

const DEFAULTS: &str = "spark-defaults.conf";

const FILES: &[ConfigFileSpec] =
    &[ConfigFileSpec::new(DEFAULTS, FileFormat::ConfAppend(Separator::Whitespace))];

const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::key("spark.master", DEFAULTS),
    SchemaEntry::pattern("spark.master", r"^master([._-]?url)?$", DEFAULTS),
    SchemaEntry::key("spark.app.name", DEFAULTS),
    SchemaEntry::key("spark.submit.deployMode", DEFAULTS),
    SchemaEntry::pattern("spark.submit.deployMode", r"^deploy[._-]?mode$", DEFAULTS),
    // driver
    SchemaEntry::key("spark.driver.memory", DEFAULTS),
    SchemaEntry::pattern("spark.driver.memory", r"^driver[._-]?mem(ory)?$", DEFAULTS),
    SchemaEntry::key("spark.driver.cores", DEFAULTS),
    SchemaEntry::key("spark.driver.maxResultSize", DEFAULTS),
    SchemaEntry::key("spark.driver.host", DEFAULTS),
    SchemaEntry::key("spark.driver.port", DEFAULTS),
    SchemaEntry::key("spark.driver.extraJavaOptions", DEFAULTS),
    SchemaEntry::key("spark.driver.extraClassPath", DEFAULTS),
    // executors
    SchemaEntry::key("spark.executor.memory", DEFAULTS),
    SchemaEntry::pattern("spark.executor.memory", r"^executor[._-]?mem(ory)?$", DEFAULTS),
    SchemaEntry::key("spark.executor.memoryOverhead", DEFAULTS),
    SchemaEntry::key("spark.executor.cores", DEFAULTS),
    SchemaEntry::pattern("spark.executor.cores", r"^executor[._-]?cores$", DEFAULTS),
    SchemaEntry::key("spark.executor.instances", DEFAULTS),
    SchemaEntry::pattern("spark.executor.instances", r"^(num[._-]?executors|executor[._-]?instances)$", DEFAULTS),
    SchemaEntry::key("spark.executor.extraJavaOptions", DEFAULTS),
    SchemaEntry::key("spark.executor.extraClassPath", DEFAULTS),
    SchemaEntry::key("spark.executor.heartbeatInterval", DEFAULTS),
    SchemaEntry::key("spark.default.parallelism", DEFAULTS),
    SchemaEntry::key("spark.sql.shuffle.partitions", DEFAULTS),
    SchemaEntry::key("spark.serializer", DEFAULTS),
    SchemaEntry::key("spark.kryoserializer.buffer.max", DEFAULTS),
    SchemaEntry::key("spark.memory.fraction", DEFAULTS),
    SchemaEntry::key("spark.memory.storageFraction", DEFAULTS),
    SchemaEntry::key("spark.local.dir", DEFAULTS),
    SchemaEntry::key("spark.io.compression.codec", DEFAULTS),
    SchemaEntry::key("spark.network.timeout", DEFAULTS),
    SchemaEntry::key("spark.speculation", DEFAULTS),
    // dynamic allocation and shuffle service
    SchemaEntry::key("spark.dynamicAllocation.enabled", DEFAULTS),
    SchemaEntry::key("spark.dynamicAllocation.minExecutors", DEFAULTS),
    SchemaEntry::key("spark.dynamicAllocation.maxExecutors", DEFAULTS),
    SchemaEntry::key("spark.dynamicAllocation.initialExecutors", DEFAULTS),
    SchemaEntry::key("spark.dynamicAllocation.executorIdleTimeout", DEFAULTS),
    SchemaEntry::key("spark.shuffle.service.enabled", DEFAULTS),
    SchemaEntry::key("spark.shuffle.service.port", DEFAULTS),
    // event log, history, UI
    SchemaEntry::key("spark.eventLog.enabled", DEFAULTS),
    SchemaEntry::key("spark.eventLog.dir", DEFAULTS),
    SchemaEntry::key("spark.eventLog.compress", DEFAULTS),
    SchemaEntry::key("spark.history.fs.logDirectory", DEFAULTS),
    SchemaEntry::key("spark.history.ui.port", DEFAULTS),
    SchemaEntry::key("spark.ui.enabled", DEFAULTS),
    SchemaEntry::key("spark.ui.port", DEFAULTS),
    // SQL
    SchemaEntry::key("spark.sql.warehouse.dir", DEFAULTS),
    SchemaEntry::key("spark.sql.catalogImplementation", DEFAULTS),
    SchemaEntry::key("spark.sql.adaptive.enabled", DEFAULTS),
    // YARN
    SchemaEntry::key("spark.yarn.queue", DEFAULTS),
    SchemaEntry::pattern("spark.yarn.queue", r"^(yarn[._-]?)?queue$", DEFAULTS),
    SchemaEntry::key("spark.yarn.jars", DEFAULTS),
    SchemaEntry::key("spark.yarn.archive", DEFAULTS),
    // security
    SchemaEntry::key("spark.authenticate", DEFAULTS),
    SchemaEntry::key("spark.ssl.enabled", DEFAULTS),
    SchemaEntry::key("spark.kerberos.principal", DEFAULTS),
    SchemaEntry::key("spark.kerberos.keytab", DEFAULTS),
    // Spark's key space is open-ended; any other spark.* key is passed through.
    SchemaEntry::family("spark.<key>", r"^spark\.[a-z0-9_.-]+$", DEFAULTS),
];

const EXACT_RULES: &[ExactRule] = &[
    exact(
        "spark.master",
        ValueRule::Pattern(r"^(local(\[(\*|\d+)(,\s*\d+)?\])?|yarn|(spark|mesos|k8s)://\S+)$"),
    ),
    exact("spark.submit.deployMode", ValueRule::OneOf(&["client", "cluster"])),
    exact("spark.app.name", ValueRule::NonEmpty),
    exact("spark.driver.host", ValueRule::HostList),
    exact("spark.executor.instances", ValueRule::PositiveInt),
    exact("spark.default.parallelism", ValueRule::PositiveInt),
    exact("spark.sql.shuffle.partitions", ValueRule::PositiveInt),
    exact("spark.serializer", ValueRule::ClassName),
    exact("spark.memory.fraction", ValueRule::Ratio),
    exact("spark.memory.storageFraction", ValueRule::Ratio),
    exact("spark.io.compression.codec", ValueRule::OneOf(&["lz4", "lzf", "snappy", "zstd"])),
    exact("spark.sql.catalogImplementation", ValueRule::OneOf(&["hive", "in-memory"])),
    exact("spark.authenticate", ValueRule::Boolean(BOOL_STRICT)),
    exact("spark.speculation", ValueRule::Boolean(BOOL_STRICT)),
    exact("spark.eventLog.dir", ValueRule::Path),
    exact("spark.history.fs.logDirectory", ValueRule::Path),
    exact("spark.local.dir", ValueRule::PathList),
    exact("spark.yarn.queue", ValueRule::NonEmpty),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".compress", ValueRule::Boolean(BOOL_STRICT)),
    // Spark treats port 0 as "pick a free one".
    suffix(".port", ValueRule::IntRange(0, 65535)),
    suffix(".memory", ValueRule::MemorySize),
    suffix(".memoryOverhead", ValueRule::MemorySize),
    suffix(".maxResultSize", ValueRule::MemorySize),
    suffix(".buffer.max", ValueRule::MemorySize),
    suffix(".cores", ValueRule::PositiveInt),
    suffix("Executors", ValueRule::NonNegativeInt),
    contains("Timeout", ValueRule::Duration(DURATION_UNITS_LONG)),
    contains(".timeout", ValueRule::Duration(DURATION_UNITS_LONG)),
    suffix("Interval", ValueRule::Duration(DURATION_UNITS_LONG)),
    suffix(".principal", ValueRule::Principal),
    suffix(".keytab", ValueRule::Path),
    suffix(".dir", ValueRule::Path),
    suffix("JavaOptions", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Spark,
    home_env: "SPARK_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/spark/conf",
    debian_dir: "/usr/local/spark/conf",
    legacy_dirs: &["/etc/spark/conf"],
    normalization: NormalizationStyle::Alphanumeric,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
