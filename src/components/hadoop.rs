// Hadoop core: HDFS, YARN and MapReduce share one configuration directory
// ($HADOOP_HOME/etc/hadoop) with one XML file per subsystem.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_STRICT, ConventionRule, DURATION_UNITS, ExactRule, ValueRule, contains, exact, suffix,
};

const CORE_SITE: &str = "core-site.xml";
const HDFS_SITE: &str = "hdfs-site.xml";
const YARN_SITE: &str = "yarn-site.xml";
const MAPRED_SITE: &str = "mapred-site.xml";

const FILESYSTEM_SCHEMES: &[&str] =
    &["hdfs", "viewfs", "file", "s3a", "abfs", "abfss", "wasb", "wasbs", "gs", "o3fs", "ofs"];

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new(CORE_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(HDFS_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(YARN_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(MAPRED_SITE, FileFormat::PropertyXml),
];

const SCHEMA: &[SchemaEntry] = &[
    // core-site.xml
    SchemaEntry::key("fs.defaultFS", CORE_SITE),
    SchemaEntry::alias("fs.defaultFS", "fs.default.name", CORE_SITE),
    SchemaEntry::pattern("fs.defaultFS", r"^(default[._-]?fs|namenode[._-]?uri)$", CORE_SITE),
    SchemaEntry::key("hadoop.tmp.dir", CORE_SITE),
    SchemaEntry::key("io.file.buffer.size", CORE_SITE),
    SchemaEntry::key("io.compression.codecs", CORE_SITE),
    SchemaEntry::key("fs.trash.interval", CORE_SITE),
    SchemaEntry::key("fs.trash.checkpoint.interval", CORE_SITE),
    SchemaEntry::key("ha.zookeeper.quorum", CORE_SITE),
    SchemaEntry::key("hadoop.security.authentication", CORE_SITE),
    SchemaEntry::key("hadoop.security.authorization", CORE_SITE),
    SchemaEntry::key("hadoop.security.auth_to_local", CORE_SITE),
    SchemaEntry::key("hadoop.rpc.protection", CORE_SITE),
    SchemaEntry::key("hadoop.http.staticuser.user", CORE_SITE),
    SchemaEntry::key("net.topology.script.file.name", CORE_SITE),
    SchemaEntry::key("ipc.client.connect.max.retries", CORE_SITE),
    SchemaEntry::key("ipc.client.connect.timeout", CORE_SITE),
    SchemaEntry::key("fs.s3a.endpoint", CORE_SITE),
    SchemaEntry::key("fs.s3a.access.key", CORE_SITE),
    SchemaEntry::key("fs.s3a.secret.key", CORE_SITE),
    // hdfs-site.xml
    SchemaEntry::key("dfs.replication", HDFS_SITE),
    SchemaEntry::pattern("dfs.replication", r"^(hdfs[._-]?)?replication([._-]?factor)?$", HDFS_SITE),
    SchemaEntry::key("dfs.blocksize", HDFS_SITE),
    SchemaEntry::alias("dfs.blocksize", "dfs.block.size", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.name.dir", HDFS_SITE),
    SchemaEntry::alias("dfs.namenode.name.dir", "dfs.name.dir", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.data.dir", HDFS_SITE),
    SchemaEntry::alias("dfs.datanode.data.dir", "dfs.data.dir", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.checkpoint.dir", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.rpc-address", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.http-address", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.https-address", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.secondary.http-address", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.address", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.http.address", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.ipc.address", HDFS_SITE),
    SchemaEntry::key("dfs.permissions.enabled", HDFS_SITE),
    SchemaEntry::alias("dfs.permissions.enabled", "dfs.permissions", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.acls.enabled", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.handler.count", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.handler.count", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.max.transfer.threads", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.du.reserved", HDFS_SITE),
    SchemaEntry::key("dfs.heartbeat.interval", HDFS_SITE),
    SchemaEntry::key("dfs.webhdfs.enabled", HDFS_SITE),
    SchemaEntry::key("dfs.hosts", HDFS_SITE),
    SchemaEntry::key("dfs.hosts.exclude", HDFS_SITE),
    SchemaEntry::key("dfs.nameservices", HDFS_SITE),
    SchemaEntry::key("dfs.ha.automatic-failover.enabled", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.shared.edits.dir", HDFS_SITE),
    SchemaEntry::key("dfs.journalnode.edits.dir", HDFS_SITE),
    SchemaEntry::key("dfs.client.read.shortcircuit", HDFS_SITE),
    SchemaEntry::key("dfs.domain.socket.path", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.kerberos.principal", HDFS_SITE),
    SchemaEntry::key("dfs.namenode.keytab.file", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.kerberos.principal", HDFS_SITE),
    SchemaEntry::key("dfs.datanode.keytab.file", HDFS_SITE),
    // yarn-site.xml
    SchemaEntry::key("yarn.resourcemanager.hostname", YARN_SITE),
    SchemaEntry::pattern("yarn.resourcemanager.hostname", r"^(rm|resource[._-]?manager)[._-]?host(name)?$", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.scheduler.address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.resource-tracker.address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.admin.address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.webapp.address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.scheduler.class", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.ha.enabled", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.ha.rm-ids", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.zk-address", YARN_SITE),
    SchemaEntry::key("yarn.resourcemanager.recovery.enabled", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.resource.memory-mb", YARN_SITE),
    SchemaEntry::pattern(
        "yarn.nodemanager.resource.memory-mb",
        r"^(yarn[._-]?)?(nm|node[._-]?manager)[._-]?(memory|mem)([._-]?mb)?$",
        YARN_SITE,
    ),
    SchemaEntry::key("yarn.nodemanager.resource.cpu-vcores", YARN_SITE),
    SchemaEntry::pattern(
        "yarn.nodemanager.resource.cpu-vcores",
        r"^(yarn[._-]?)?(nm|node[._-]?manager)[._-]?(v?cores|vcpus?)$",
        YARN_SITE,
    ),
    SchemaEntry::key("yarn.nodemanager.local-dirs", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.log-dirs", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.aux-services", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.aux-services.mapreduce_shuffle.class", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.vmem-check-enabled", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.pmem-check-enabled", YARN_SITE),
    SchemaEntry::key("yarn.nodemanager.vmem-pmem-ratio", YARN_SITE),
    SchemaEntry::key("yarn.scheduler.minimum-allocation-mb", YARN_SITE),
    SchemaEntry::key("yarn.scheduler.maximum-allocation-mb", YARN_SITE),
    SchemaEntry::key("yarn.scheduler.minimum-allocation-vcores", YARN_SITE),
    SchemaEntry::key("yarn.scheduler.maximum-allocation-vcores", YARN_SITE),
    SchemaEntry::key("yarn.log-aggregation-enable", YARN_SITE),
    SchemaEntry::key("yarn.log-aggregation.retain-seconds", YARN_SITE),
    SchemaEntry::key("yarn.log.server.url", YARN_SITE),
    SchemaEntry::key("yarn.timeline-service.enabled", YARN_SITE),
    // mapred-site.xml
    SchemaEntry::key("mapreduce.framework.name", MAPRED_SITE),
    SchemaEntry::key("mapreduce.jobhistory.address", MAPRED_SITE),
    SchemaEntry::key("mapreduce.jobhistory.webapp.address", MAPRED_SITE),
    SchemaEntry::key("mapreduce.map.memory.mb", MAPRED_SITE),
    SchemaEntry::key("mapreduce.reduce.memory.mb", MAPRED_SITE),
    SchemaEntry::key("mapreduce.map.java.opts", MAPRED_SITE),
    SchemaEntry::key("mapreduce.reduce.java.opts", MAPRED_SITE),
    SchemaEntry::key("mapreduce.task.io.sort.mb", MAPRED_SITE),
    SchemaEntry::key("mapreduce.job.reduces", MAPRED_SITE),
    SchemaEntry::key("mapreduce.map.output.compress", MAPRED_SITE),
    SchemaEntry::key("mapreduce.map.output.compress.codec", MAPRED_SITE),
    SchemaEntry::key("mapreduce.application.classpath", MAPRED_SITE),
    SchemaEntry::key("yarn.app.mapreduce.am.resource.mb", MAPRED_SITE),
    // Parameterized families last: they swallow anything shaped like them.
    SchemaEntry::family(
        "hadoop.proxyuser.<user>.<hosts|groups|users>",
        r"^hadoop\.proxyuser\.[^.\s]+\.(hosts|groups|users)$",
        CORE_SITE,
    ),
    SchemaEntry::family("dfs.ha.namenodes.<nameservice>", r"^dfs\.ha\.namenodes\.[^.\s]+$", HDFS_SITE),
    SchemaEntry::family(
        "dfs.namenode.<rpc|http|https>-address.<nameservice>.<namenode>",
        r"^dfs\.namenode\.(rpc|http|https)-address\.[^.\s]+\.[^.\s]+$",
        HDFS_SITE,
    ),
    SchemaEntry::family(
        "dfs.client.failover.proxy.provider.<nameservice>",
        r"^dfs\.client\.failover\.proxy\.provider\.[^.\s]+$",
        HDFS_SITE,
    ),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("fs.defaultFS", ValueRule::Url(FILESYSTEM_SCHEMES)),
    exact("hadoop.tmp.dir", ValueRule::Path),
    exact("io.file.buffer.size", ValueRule::PositiveInt),
    exact("io.compression.codecs", ValueRule::ClassList),
    exact("fs.trash.interval", ValueRule::NonNegativeInt),
    exact("ha.zookeeper.quorum", ValueRule::HostPortList),
    exact("hadoop.security.authentication", ValueRule::OneOf(&["simple", "kerberos"])),
    exact("hadoop.rpc.protection", ValueRule::OneOf(&["authentication", "integrity", "privacy"])),
    exact("hadoop.http.staticuser.user", ValueRule::NonEmpty),
    exact("ipc.client.connect.max.retries", ValueRule::NonNegativeInt),
    exact("dfs.replication", ValueRule::IntRange(1, 512)),
    exact("dfs.blocksize", ValueRule::MemorySize),
    exact("dfs.namenode.name.dir", ValueRule::PathList),
    exact("dfs.datanode.data.dir", ValueRule::PathList),
    exact("dfs.namenode.checkpoint.dir", ValueRule::PathList),
    exact("dfs.datanode.du.reserved", ValueRule::NonNegativeInt),
    exact("dfs.datanode.max.transfer.threads", ValueRule::PositiveInt),
    exact("dfs.nameservices", ValueRule::NonEmpty),
    exact("dfs.namenode.shared.edits.dir", ValueRule::Url(&["qjournal", "file"])),
    exact("yarn.resourcemanager.hostname", ValueRule::HostList),
    exact("yarn.resourcemanager.zk-address", ValueRule::HostPortList),
    exact("yarn.resourcemanager.ha.rm-ids", ValueRule::NonEmpty),
    exact("yarn.nodemanager.resource.memory-mb", ValueRule::IntRange(-1, i64::MAX)),
    exact("yarn.nodemanager.resource.cpu-vcores", ValueRule::IntRange(-1, i64::MAX)),
    exact("yarn.nodemanager.local-dirs", ValueRule::PathList),
    exact("yarn.nodemanager.log-dirs", ValueRule::PathList),
    exact("yarn.nodemanager.aux-services", ValueRule::NonEmpty),
    exact("yarn.nodemanager.vmem-pmem-ratio", ValueRule::PositiveNumber),
    exact("yarn.log-aggregation.retain-seconds", ValueRule::IntRange(-1, i64::MAX)),
    exact("yarn.log.server.url", ValueRule::Url(&["http", "https"])),
    exact("mapreduce.framework.name", ValueRule::OneOf(&["local", "classic", "yarn"])),
    exact("mapreduce.task.io.sort.mb", ValueRule::IntRange(1, 2047)),
    exact("mapreduce.job.reduces", ValueRule::NonNegativeInt),
    exact("mapreduce.application.classpath", ValueRule::NonEmpty),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix("-enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix("-enable", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".authorization", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".shortcircuit", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".compress", ValueRule::Boolean(BOOL_STRICT)),
    suffix("-address", ValueRule::HostPort),
    suffix(".address", ValueRule::HostPort),
    suffix(".principal", ValueRule::Principal),
    suffix(".keytab.file", ValueRule::Path),
    suffix("memory-mb", ValueRule::PositiveInt),
    suffix(".memory.mb", ValueRule::PositiveInt),
    suffix(".resource.mb", ValueRule::PositiveInt),
    suffix("allocation-mb", ValueRule::PositiveInt),
    suffix("vcores", ValueRule::PositiveInt),
    suffix(".handler.count", ValueRule::PositiveInt),
    contains(".timeout", ValueRule::Duration(DURATION_UNITS)),
    contains(".interval", ValueRule::Duration(DURATION_UNITS)),
    suffix(".dirs", ValueRule::PathList),
    suffix(".dir", ValueRule::Path),
    suffix(".path", ValueRule::Path),
    suffix(".file.name", ValueRule::Path),
    suffix(".class", ValueRule::ClassName),
    suffix(".codec", ValueRule::ClassName),
    suffix(".java.opts", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Hadoop,
    home_env: "HADOOP_HOME",
    conf_subdir: "etc/hadoop",
    redhat_dir: "/opt/hadoop/etc/hadoop",
    debian_dir: "/usr/local/hadoop/etc/hadoop",
    legacy_dirs: &["/etc/hadoop/conf"],
    normalization: NormalizationStyle::Alphanumeric,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
