// Kafka: broker settings in server.properties, client defaults in the
// producer/consumer property files shipped under config/.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat, Separator};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_STRICT, ConventionRule, ExactRule, ValueRule, contains, exact, prefix, suffix,
};

const SERVER: &str = "server.properties";
const PRODUCER: &str = "producer.properties";
const CONSUMER: &str = "consumer.properties";

const SECURITY_PROTOCOLS: &[&str] = &["PLAINTEXT", "SSL", "SASL_PLAINTEXT", "SASL_SSL"];
const SASL_MECHANISMS: &[&str] = &["PLAIN", "GSSAPI", "SCRAM-SHA-256", "SCRAM-SHA-512", "OAUTHBEARER"];

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new(SERVER, FileFormat::LineKv(Separator::Equals)),
    ConfigFileSpec::new(PRODUCER, FileFormat::LineKv(Separator::Equals)),
    ConfigFileSpec::new(CONSUMER, FileFormat::LineKv(Separator::Equals)),
];

const SCHEMA: &[SchemaEntry] = &[
    // server.properties: identity and networking
    SchemaEntry::key("broker.id", SERVER),
    SchemaEntry::key("node.id", SERVER),
    SchemaEntry::key("process.roles", SERVER),
    SchemaEntry::key("controller.quorum.voters", SERVER),
    SchemaEntry::key("controller.listener.names", SERVER),
    SchemaEntry::key("listeners", SERVER),
    SchemaEntry::key("advertised.listeners", SERVER),
    SchemaEntry::alias("advertised.listeners", "advertised.listener", SERVER),
    SchemaEntry::key("listener.security.protocol.map", SERVER),
    SchemaEntry::key("inter.broker.listener.name", SERVER),
    SchemaEntry::key("num.network.threads", SERVER),
    SchemaEntry::key("num.io.threads", SERVER),
    SchemaEntry::key("num.replica.fetchers", SERVER),
    SchemaEntry::key("socket.send.buffer.bytes", SERVER),
    SchemaEntry::key("socket.receive.buffer.bytes", SERVER),
    SchemaEntry::key("socket.request.max.bytes", SERVER),
    // server.properties: log storage
    SchemaEntry::key("log.dirs", SERVER),
    SchemaEntry::alias("log.dirs", "data.dirs", SERVER),
    SchemaEntry::key("log.dir", SERVER),
    SchemaEntry::key("num.partitions", SERVER),
    SchemaEntry::alias("num.partitions", "partitions", SERVER),
    SchemaEntry::key("num.recovery.threads.per.data.dir", SERVER),
    SchemaEntry::key("log.retention.hours", SERVER),
    SchemaEntry::alias("log.retention.hours", "retention.hours", SERVER),
    SchemaEntry::key("log.retention.minutes", SERVER),
    SchemaEntry::key("log.retention.ms", SERVER),
    SchemaEntry::key("log.retention.bytes", SERVER),
    SchemaEntry::key("log.segment.bytes", SERVER),
    SchemaEntry::key("log.retention.check.interval.ms", SERVER),
    SchemaEntry::key("log.cleanup.policy", SERVER),
    SchemaEntry::key("log.cleaner.enable", SERVER),
    SchemaEntry::key("log.flush.interval.messages", SERVER),
    SchemaEntry::key("log.flush.interval.ms", SERVER),
    // server.properties: replication
    SchemaEntry::key("default.replication.factor", SERVER),
    SchemaEntry::alias("default.replication.factor", "replication.factor", SERVER),
    SchemaEntry::key("min.insync.replicas", SERVER),
    SchemaEntry::key("offsets.topic.replication.factor", SERVER),
    SchemaEntry::key("transaction.state.log.replication.factor", SERVER),
    SchemaEntry::key("transaction.state.log.min.isr", SERVER),
    SchemaEntry::key("unclean.leader.election.enable", SERVER),
    SchemaEntry::key("auto.leader.rebalance.enable", SERVER),
    SchemaEntry::key("auto.create.topics.enable", SERVER),
    SchemaEntry::key("delete.topic.enable", SERVER),
    SchemaEntry::key("group.initial.rebalance.delay.ms", SERVER),
    SchemaEntry::key("message.max.bytes", SERVER),
    SchemaEntry::key("replica.fetch.max.bytes", SERVER),
    // server.properties: ZooKeeper (pre-KRaft)
    SchemaEntry::key("zookeeper.connect", SERVER),
    SchemaEntry::pattern("zookeeper.connect", r"^(zk|zookeeper)[._-]?(connect|quorum|servers?)$", SERVER),
    SchemaEntry::key("zookeeper.connection.timeout.ms", SERVER),
    SchemaEntry::key("zookeeper.session.timeout.ms", SERVER),
    // server.properties: security
    SchemaEntry::key("security.inter.broker.protocol", SERVER),
    SchemaEntry::key("sasl.enabled.mechanisms", SERVER),
    SchemaEntry::key("sasl.mechanism.inter.broker.protocol", SERVER),
    SchemaEntry::key("ssl.keystore.location", SERVER),
    SchemaEntry::key("ssl.keystore.password", SERVER),
    SchemaEntry::key("ssl.key.password", SERVER),
    SchemaEntry::key("ssl.truststore.location", SERVER),
    SchemaEntry::key("ssl.truststore.password", SERVER),
    SchemaEntry::key("ssl.client.auth", SERVER),
    SchemaEntry::key("ssl.endpoint.identification.algorithm", SERVER),
    SchemaEntry::key("authorizer.class.name", SERVER),
    SchemaEntry::key("super.users", SERVER),
    SchemaEntry::key("compression.type", SERVER),
    // producer.properties
    SchemaEntry::key("bootstrap.servers", PRODUCER),
    SchemaEntry::pattern("bootstrap.servers", r"^(kafka[._-]?)?(brokers|broker[._-]?list|bootstrap)$", PRODUCER),
    SchemaEntry::alias("bootstrap.servers", "metadata.broker.list", PRODUCER),
    SchemaEntry::key("acks", PRODUCER),
    SchemaEntry::key("retries", PRODUCER),
    SchemaEntry::key("batch.size", PRODUCER),
    SchemaEntry::key("linger.ms", PRODUCER),
    SchemaEntry::key("buffer.memory", PRODUCER),
    SchemaEntry::key("compression.type", PRODUCER),
    SchemaEntry::key("max.request.size", PRODUCER),
    SchemaEntry::key("request.timeout.ms", PRODUCER),
    SchemaEntry::key("delivery.timeout.ms", PRODUCER),
    SchemaEntry::key("enable.idempotence", PRODUCER),
    SchemaEntry::key("max.in.flight.requests.per.connection", PRODUCER),
    SchemaEntry::key("key.serializer", PRODUCER),
    SchemaEntry::key("value.serializer", PRODUCER),
    SchemaEntry::key("security.protocol", PRODUCER),
    SchemaEntry::key("sasl.mechanism", PRODUCER),
    // consumer.properties
    SchemaEntry::key("bootstrap.servers", CONSUMER),
    SchemaEntry::key("group.id", CONSUMER),
    SchemaEntry::alias("group.id", "consumer.group", CONSUMER),
    SchemaEntry::key("auto.offset.reset", CONSUMER),
    SchemaEntry::key("enable.auto.commit", CONSUMER),
    SchemaEntry::key("auto.commit.interval.ms", CONSUMER),
    SchemaEntry::key("key.deserializer", CONSUMER),
    SchemaEntry::key("value.deserializer", CONSUMER),
    SchemaEntry::key("max.poll.records", CONSUMER),
    SchemaEntry::key("max.poll.interval.ms", CONSUMER),
    SchemaEntry::key("session.timeout.ms", CONSUMER),
    SchemaEntry::key("heartbeat.interval.ms", CONSUMER),
    SchemaEntry::key("fetch.min.bytes", CONSUMER),
    SchemaEntry::key("fetch.max.wait.ms", CONSUMER),
    SchemaEntry::key("isolation.level", CONSUMER),
    SchemaEntry::key("security.protocol", CONSUMER),
    SchemaEntry::key("sasl.mechanism", CONSUMER),
    // Per-listener overrides: listener.name.<listener>.<key>
    SchemaEntry::family(
        "listener.name.<listener>.<key>",
        r"^listener\.name\.[a-z0-9_]+\.[a-z0-9._-]+$",
        SERVER,
    ),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("broker.id", ValueRule::IntRange(-1, i64::MAX)),
    exact("node.id", ValueRule::NonNegativeInt),
    exact(
        "process.roles",
        ValueRule::OneOf(&["broker", "controller", "broker,controller", "controller,broker"]),
    ),
    exact("controller.quorum.voters", ValueRule::Pattern(r"^\d+@[^:,\s]+:\d+(,\d+@[^:,\s]+:\d+)*$")),
    exact("listeners", ValueRule::Listeners),
    exact("advertised.listeners", ValueRule::Listeners),
    exact("zookeeper.connect", ValueRule::ZkConnect),
    exact("bootstrap.servers", ValueRule::HostPortList),
    exact("log.retention.ms", ValueRule::IntRange(-1, i64::MAX)),
    exact("log.retention.bytes", ValueRule::IntRange(-1, i64::MAX)),
    exact(
        "log.cleanup.policy",
        ValueRule::OneOf(&["delete", "compact", "compact,delete", "delete,compact"]),
    ),
    exact("min.insync.replicas", ValueRule::PositiveInt),
    exact("transaction.state.log.min.isr", ValueRule::PositiveInt),
    exact("acks", ValueRule::OneOf(&["all", "-1", "0", "1"])),
    exact("retries", ValueRule::NonNegativeInt),
    exact(
        "compression.type",
        ValueRule::OneOf(&["none", "gzip", "snappy", "lz4", "zstd", "producer", "uncompressed"]),
    ),
    exact("auto.offset.reset", ValueRule::OneOf(&["earliest", "latest", "none"])),
    exact("isolation.level", ValueRule::OneOf(&["read_uncommitted", "read_committed"])),
    exact("security.protocol", ValueRule::OneOf(SECURITY_PROTOCOLS)),
    exact("security.inter.broker.protocol", ValueRule::OneOf(SECURITY_PROTOCOLS)),
    exact("sasl.mechanism", ValueRule::OneOf(SASL_MECHANISMS)),
    exact("sasl.mechanism.inter.broker.protocol", ValueRule::OneOf(SASL_MECHANISMS)),
    exact("ssl.client.auth", ValueRule::OneOf(&["required", "requested", "none"])),
    exact("group.id", ValueRule::NonEmpty),
    exact("super.users", ValueRule::NonEmpty),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".enable", ValueRule::Boolean(BOOL_STRICT)),
    prefix("enable.", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".replication.factor", ValueRule::PositiveInt),
    prefix("num.", ValueRule::PositiveInt),
    contains(".keystore", ValueRule::Path),
    contains(".truststore", ValueRule::Path),
    contains(".timeout", ValueRule::NonNegativeInt),
    contains(".interval.ms", ValueRule::NonNegativeInt),
    suffix(".ms", ValueRule::NonNegativeInt),
    suffix(".hours", ValueRule::PositiveInt),
    suffix(".minutes", ValueRule::PositiveInt),
    suffix(".bytes", ValueRule::IntRange(-1, i64::MAX)),
    suffix(".messages", ValueRule::PositiveInt),
    suffix(".size", ValueRule::PositiveInt),
    suffix(".memory", ValueRule::PositiveInt),
    suffix(".records", ValueRule::PositiveInt),
    suffix(".per.connection", ValueRule::PositiveInt),
    suffix(".serializer", ValueRule::ClassName),
    suffix(".deserializer", ValueRule::ClassName),
    suffix(".class.name", ValueRule::ClassName),
    suffix(".dirs", ValueRule::PathList),
    suffix(".dir", ValueRule::Path),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Kafka,
    home_env: "KAFKA_HOME",
    conf_subdir: "config",
    redhat_dir: "/opt/kafka/config",
    debian_dir: "/usr/local/kafka/config",
    legacy_dirs: &["/etc/kafka/conf", "/etc/kafka"],
    normalization: NormalizationStyle::Dotted,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
