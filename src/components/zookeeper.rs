// ZooKeeper: a single zoo.cfg. Keys are camelCase, so names are folded
// alphanumerically (`TICK_TIME` finds `tickTime`).

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_LOOSE, BOOL_STRICT, ConventionRule, ExactRule, ValueRule, contains, exact, prefix, suffix,
};

const ZOO_CFG: &str = "zoo.cfg";

const FILES: &[ConfigFileSpec] = &[ConfigFileSpec::new(ZOO_CFG, FileFormat::LineKv(Separator::Equals))];

const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::key("tickTime", ZOO_CFG),
    SchemaEntry::key("initLimit", ZOO_CFG),
    SchemaEntry::key("syncLimit", ZOO_CFG),
    SchemaEntry::key("dataDir", ZOO_CFG),
    SchemaEntry::key("dataLogDir", ZOO_CFG),
    SchemaEntry::key("clientPort", ZOO_CFG),
    SchemaEntry::alias("clientPort", "port", ZOO_CFG),
    SchemaEntry::key("secureClientPort", ZOO_CFG),
    SchemaEntry::key("clientPortAddress", ZOO_CFG),
    SchemaEntry::key("maxClientCnxns", ZOO_CFG),
    SchemaEntry::pattern("maxClientCnxns", r"^max[._-]?client[._-]?conn(ection)?s$", ZOO_CFG),
    SchemaEntry::key("minSessionTimeout", ZOO_CFG),
    SchemaEntry::key("maxSessionTimeout", ZOO_CFG),
    SchemaEntry::key("autopurge.snapRetainCount", ZOO_CFG),
    SchemaEntry::key("autopurge.purgeInterval", ZOO_CFG),
    SchemaEntry::key("snapCount", ZOO_CFG),
    SchemaEntry::key("preAllocSize", ZOO_CFG),
    SchemaEntry::key("globalOutstandingLimit", ZOO_CFG),
    SchemaEntry::key("jute.maxbuffer", ZOO_CFG),
    SchemaEntry::key("forceSync", ZOO_CFG),
    SchemaEntry::key("skipACL", ZOO_CFG),
    SchemaEntry::key("standaloneEnabled", ZOO_CFG),
    SchemaEntry::key("reconfigEnabled", ZOO_CFG),
    SchemaEntry::key("dynamicConfigFile", ZOO_CFG),
    SchemaEntry::key("quorumListenOnAllIPs", ZOO_CFG),
    SchemaEntry::key("4lw.commands.whitelist", ZOO_CFG),
    SchemaEntry::key("admin.enableServer", ZOO_CFG),
    SchemaEntry::key("admin.serverPort", ZOO_CFG),
    SchemaEntry::key("metricsProvider.className", ZOO_CFG),
    SchemaEntry::key("metricsProvider.httpPort", ZOO_CFG),
    SchemaEntry::key("serverCnxnFactory", ZOO_CFG),
    SchemaEntry::key("sslQuorum", ZOO_CFG),
    SchemaEntry::key("ssl.keyStore.location", ZOO_CFG),
    SchemaEntry::key("ssl.keyStore.password", ZOO_CFG),
    SchemaEntry::key("ssl.trustStore.location", ZOO_CFG),
    SchemaEntry::key("ssl.trustStore.password", ZOO_CFG),
    SchemaEntry::key("ssl.quorum.keyStore.location", ZOO_CFG),
    SchemaEntry::key("ssl.quorum.trustStore.location", ZOO_CFG),
    // Ensemble membership and hierarchical quorums.
    SchemaEntry::family("server.<N>", r"^server\.\d+$", ZOO_CFG),
    SchemaEntry::family("group.<N>", r"^group\.\d+$", ZOO_CFG),
    SchemaEntry::family("weight.<N>", r"^weight\.\d+$", ZOO_CFG),
    SchemaEntry::family("authProvider.<N>", r"^authProvider\.\d+$", ZOO_CFG),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("tickTime", ValueRule::PositiveInt),
    exact("initLimit", ValueRule::PositiveInt),
    exact("syncLimit", ValueRule::PositiveInt),
    exact("clientPortAddress", ValueRule::HostList),
    exact("maxClientCnxns", ValueRule::NonNegativeInt),
    exact("minSessionTimeout", ValueRule::IntRange(-1, i64::MAX)),
    exact("maxSessionTimeout", ValueRule::IntRange(-1, i64::MAX)),
    // ZooKeeper refuses to keep fewer than three snapshots.
    exact("autopurge.snapRetainCount", ValueRule::IntRange(3, i64::MAX)),
    exact("autopurge.purgeInterval", ValueRule::NonNegativeInt),
    exact("snapCount", ValueRule::PositiveInt),
    exact("preAllocSize", ValueRule::PositiveInt),
    exact("globalOutstandingLimit", ValueRule::PositiveInt),
    exact("jute.maxbuffer", ValueRule::PositiveInt),
    exact("forceSync", ValueRule::Boolean(BOOL_LOOSE)),
    exact("skipACL", ValueRule::Boolean(BOOL_LOOSE)),
    exact("quorumListenOnAllIPs", ValueRule::Boolean(BOOL_STRICT)),
    exact("sslQuorum", ValueRule::Boolean(BOOL_STRICT)),
    exact("admin.enableServer", ValueRule::Boolean(BOOL_STRICT)),
    exact("4lw.commands.whitelist", ValueRule::NonEmpty),
    exact("dynamicConfigFile", ValueRule::Path),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    prefix("server.", ValueRule::ZkServer),
    prefix("weight.", ValueRule::NonNegativeInt),
    prefix("group.", ValueRule::Pattern(r"^\d+(:\d+)*$")),
    suffix("Enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix("Port", ValueRule::Port),
    suffix("Dir", ValueRule::Path),
    suffix("className", ValueRule::ClassName),
    suffix("Factory", ValueRule::ClassName),
    prefix("authProvider.", ValueRule::ClassName),
    contains("keyStore", ValueRule::Path),
    contains("trustStore", ValueRule::Path),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Zookeeper,
    home_env: "ZOOKEEPER_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/zookeeper/conf",
    debian_dir: "/usr/local/zookeeper/conf",
    legacy_dirs: &["/etc/zookeeper/conf", "/etc/zookeeper"],
    normalization: NormalizationStyle::Alphanumeric,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
