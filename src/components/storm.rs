// Storm: storm.yaml for site settings. defaults.yaml is accepted as an
// explicit target but nothing resolves there by default.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{BOOL_YAML, ConventionRule, ExactRule, ValueRule, exact, suffix};

const STORM_YAML: &str = "storm.yaml";
const DEFAULTS_YAML: &str = "defaults.yaml";

const HOST: ValueRule = ValueRule::HostList;
const PORT: ValueRule = ValueRule::Port;

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new(STORM_YAML, FileFormat::LineKv(Separator::Colon)),
    ConfigFileSpec::new(DEFAULTS_YAML, FileFormat::LineKv(Separator::Colon)),
];

const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::key("storm.zookeeper.servers", STORM_YAML),
    SchemaEntry::alias("storm.zookeeper.servers", "zookeeper.servers", STORM_YAML),
    SchemaEntry::key("storm.zookeeper.port", STORM_YAML),
    SchemaEntry::key("storm.zookeeper.root", STORM_YAML),
    SchemaEntry::key("storm.zookeeper.session.timeout", STORM_YAML),
    SchemaEntry::key("storm.zookeeper.connection.timeout", STORM_YAML),
    SchemaEntry::key("storm.local.dir", STORM_YAML),
    SchemaEntry::key("storm.log.dir", STORM_YAML),
    SchemaEntry::key("storm.health.check.dir", STORM_YAML),
    SchemaEntry::key("storm.cluster.mode", STORM_YAML),
    SchemaEntry::key("storm.messaging.transport", STORM_YAML),
    SchemaEntry::key("nimbus.seeds", STORM_YAML),
    // Storm < 1.0 spelled the single leader host this way.
    SchemaEntry::alias("nimbus.seeds", "nimbus.host", STORM_YAML),
    SchemaEntry::key("nimbus.thrift.port", STORM_YAML),
    SchemaEntry::key("nimbus.childopts", STORM_YAML),
    SchemaEntry::key("nimbus.task.timeout.secs", STORM_YAML),
    SchemaEntry::key("supervisor.slots.ports", STORM_YAML),
    SchemaEntry::alias("supervisor.slots.ports", "slots.ports", STORM_YAML),
    SchemaEntry::key("supervisor.childopts", STORM_YAML),
    SchemaEntry::key("supervisor.worker.timeout.secs", STORM_YAML),
    SchemaEntry::key("supervisor.memory.capacity.mb", STORM_YAML),
    SchemaEntry::key("supervisor.cpu.capacity", STORM_YAML),
    SchemaEntry::key("worker.childopts", STORM_YAML),
    SchemaEntry::key("worker.heap.memory.mb", STORM_YAML),
    SchemaEntry::key("ui.port", STORM_YAML),
    SchemaEntry::key("ui.childopts", STORM_YAML),
    SchemaEntry::key("logviewer.port", STORM_YAML),
    SchemaEntry::key("drpc.servers", STORM_YAML),
    SchemaEntry::key("drpc.port", STORM_YAML),
    SchemaEntry::key("topology.workers", STORM_YAML),
    SchemaEntry::key("topology.acker.executors", STORM_YAML),
    SchemaEntry::key("topology.max.spout.pending", STORM_YAML),
    SchemaEntry::key("topology.message.timeout.secs", STORM_YAML),
    SchemaEntry::key("topology.debug", STORM_YAML),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("storm.zookeeper.servers", ValueRule::YamlList(&HOST)),
    exact("nimbus.seeds", ValueRule::YamlList(&HOST)),
    exact("drpc.servers", ValueRule::YamlList(&HOST)),
    exact("supervisor.slots.ports", ValueRule::YamlList(&PORT)),
    exact("storm.zookeeper.root", ValueRule::Path),
    exact("storm.cluster.mode", ValueRule::OneOf(&["distributed", "local"])),
    exact("storm.messaging.transport", ValueRule::ClassName),
    exact("supervisor.cpu.capacity", ValueRule::PositiveNumber),
    exact("topology.debug", ValueRule::Boolean(BOOL_YAML)),
    exact("topology.acker.executors", ValueRule::NonNegativeInt),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".port", ValueRule::Port),
    suffix(".secs", ValueRule::PositiveInt),
    suffix(".timeout", ValueRule::NonNegativeInt),
    suffix(".mb", ValueRule::PositiveNumber),
    suffix(".workers", ValueRule::PositiveInt),
    suffix(".pending", ValueRule::PositiveInt),
    suffix(".dir", ValueRule::Path),
    suffix(".childopts", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Storm,
    home_env: "STORM_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/storm/conf",
    debian_dir: "/usr/local/storm/conf",
    legacy_dirs: &["/etc/storm/conf"],
    normalization: NormalizationStyle::Dotted,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &["storm.zookeeper.servers", "nimbus.seeds", "supervisor.slots.ports", "drpc.servers"],
};
