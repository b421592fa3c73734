// HBase: hbase-site.xml plus the protocol ACLs in hbase-policy.xml.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{BOOL_STRICT, ConventionRule, ExactRule, ValueRule, contains, exact, suffix};

const HBASE_SITE: &str = "hbase-site.xml";
const HBASE_POLICY: &str = "hbase-policy.xml";

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new(HBASE_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(HBASE_POLICY, FileFormat::PropertyXml),
];

const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::key("hbase.rootdir", HBASE_SITE),
    SchemaEntry::pattern("hbase.rootdir", r"^(hbase[._-]?)?root[._-]?dir$", HBASE_SITE),
    SchemaEntry::key("hbase.cluster.distributed", HBASE_SITE),
    SchemaEntry::alias("hbase.cluster.distributed", "distributed", HBASE_SITE),
    SchemaEntry::key("hbase.tmp.dir", HBASE_SITE),
    SchemaEntry::key("hbase.zookeeper.quorum", HBASE_SITE),
    SchemaEntry::pattern("hbase.zookeeper.quorum", r"^(hbase[._-]?)?(zk|zookeeper)[._-]?quorum$", HBASE_SITE),
    SchemaEntry::key("hbase.zookeeper.property.clientPort", HBASE_SITE),
    SchemaEntry::pattern(
        "hbase.zookeeper.property.clientPort",
        r"^(hbase[._-]?)?(zk|zookeeper)[._-]?(client[._-]?)?port$",
        HBASE_SITE,
    ),
    SchemaEntry::key("hbase.zookeeper.property.dataDir", HBASE_SITE),
    SchemaEntry::key("zookeeper.znode.parent", HBASE_SITE),
    SchemaEntry::key("zookeeper.session.timeout", HBASE_SITE),
    SchemaEntry::key("hbase.master.port", HBASE_SITE),
    SchemaEntry::key("hbase.master.info.port", HBASE_SITE),
    SchemaEntry::key("hbase.master.info.bindAddress", HBASE_SITE),
    SchemaEntry::key("hbase.master.loadbalancer.class", HBASE_SITE),
    SchemaEntry::key("hbase.balancer.period", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.port", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.info.port", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.handler.count", HBASE_SITE),
    SchemaEntry::pattern(
        "hbase.regionserver.handler.count",
        r"^(rs|region[._-]?server)[._-]?handlers?([._-]?count)?$",
        HBASE_SITE,
    ),
    SchemaEntry::key("hbase.regionserver.global.memstore.size", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.wal.codec", HBASE_SITE),
    SchemaEntry::key("hbase.wal.provider", HBASE_SITE),
    SchemaEntry::key("hbase.hregion.max.filesize", HBASE_SITE),
    SchemaEntry::key("hbase.hregion.memstore.flush.size", HBASE_SITE),
    SchemaEntry::key("hbase.hregion.memstore.block.multiplier", HBASE_SITE),
    SchemaEntry::key("hbase.hregion.majorcompaction", HBASE_SITE),
    SchemaEntry::key("hbase.hstore.blockingStoreFiles", HBASE_SITE),
    SchemaEntry::key("hbase.hstore.compactionThreshold", HBASE_SITE),
    SchemaEntry::key("hfile.block.cache.size", HBASE_SITE),
    SchemaEntry::alias("hfile.block.cache.size", "block.cache.size", HBASE_SITE),
    SchemaEntry::key("hbase.bucketcache.ioengine", HBASE_SITE),
    SchemaEntry::key("hbase.bucketcache.size", HBASE_SITE),
    SchemaEntry::key("hbase.client.write.buffer", HBASE_SITE),
    SchemaEntry::key("hbase.client.scanner.caching", HBASE_SITE),
    SchemaEntry::key("hbase.client.retries.number", HBASE_SITE),
    SchemaEntry::key("hbase.client.operation.timeout", HBASE_SITE),
    SchemaEntry::key("hbase.rpc.timeout", HBASE_SITE),
    SchemaEntry::key("hbase.security.authentication", HBASE_SITE),
    SchemaEntry::key("hbase.security.authorization", HBASE_SITE),
    SchemaEntry::key("hbase.superuser", HBASE_SITE),
    SchemaEntry::key("hbase.master.kerberos.principal", HBASE_SITE),
    SchemaEntry::key("hbase.master.keytab.file", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.kerberos.principal", HBASE_SITE),
    SchemaEntry::key("hbase.regionserver.keytab.file", HBASE_SITE),
    SchemaEntry::key("hbase.coprocessor.region.classes", HBASE_SITE),
    SchemaEntry::key("hbase.coprocessor.master.classes", HBASE_SITE),
    SchemaEntry::key("hbase.replication", HBASE_SITE),
    SchemaEntry::key("hbase.unsafe.stream.capability.enforce", HBASE_SITE),
    // hbase-policy.xml
    SchemaEntry::key("security.client.protocol.acl", HBASE_POLICY),
    SchemaEntry::key("security.admin.protocol.acl", HBASE_POLICY),
    SchemaEntry::key("security.masterregion.protocol.acl", HBASE_POLICY),
];

const EXACT_RULES: &[ExactRule] = &[
    exact(
        "hbase.rootdir",
        ValueRule::Url(&["hdfs", "viewfs", "file", "s3a", "abfs", "abfss", "wasb", "wasbs", "gs"]),
    ),
    exact("hbase.zookeeper.quorum", ValueRule::HostList),
    exact("hbase.zookeeper.property.clientPort", ValueRule::Port),
    exact("zookeeper.znode.parent", ValueRule::Path),
    exact("hbase.master.info.bindAddress", ValueRule::HostList),
    exact("hbase.regionserver.global.memstore.size", ValueRule::Ratio),
    exact("hfile.block.cache.size", ValueRule::Ratio),
    exact("hbase.hregion.max.filesize", ValueRule::PositiveInt),
    exact("hbase.hregion.memstore.flush.size", ValueRule::PositiveInt),
    exact("hbase.hregion.memstore.block.multiplier", ValueRule::PositiveInt),
    exact("hbase.hregion.majorcompaction", ValueRule::NonNegativeInt),
    exact("hbase.hstore.blockingStoreFiles", ValueRule::PositiveInt),
    exact("hbase.hstore.compactionThreshold", ValueRule::PositiveInt),
    exact("hbase.client.write.buffer", ValueRule::PositiveInt),
    exact("hbase.client.retries.number", ValueRule::NonNegativeInt),
    exact("hbase.security.authentication", ValueRule::OneOf(&["simple", "kerberos"])),
    exact("hbase.wal.provider", ValueRule::OneOf(&["filesystem", "multiwal", "asyncfs"])),
    exact("hbase.superuser", ValueRule::NonEmpty),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".distributed", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".authorization", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".replication", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".enforce", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".port", ValueRule::Port),
    contains(".timeout", ValueRule::NonNegativeInt),
    contains(".interval.ms", ValueRule::NonNegativeInt),
    suffix(".period", ValueRule::NonNegativeInt),
    suffix(".count", ValueRule::PositiveInt),
    suffix(".caching", ValueRule::PositiveInt),
    suffix(".principal", ValueRule::Principal),
    suffix(".keytab.file", ValueRule::Path),
    suffix(".dir", ValueRule::Path),
    suffix("dataDir", ValueRule::Path),
    suffix(".classes", ValueRule::ClassList),
    suffix(".class", ValueRule::ClassName),
    suffix(".codec", ValueRule::ClassName),
    suffix(".acl", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Hbase,
    home_env: "HBASE_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/hbase/conf",
    debian_dir: "/usr/local/hbase/conf",
    legacy_dirs: &["/etc/hbase/conf"],
    normalization: NormalizationStyle::Alphanumeric,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
