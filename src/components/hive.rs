// Hive: metastore and HiveServer2 settings, plus the Ranger plugin files
// that live next to them in the conf directory.

use crate::schemas::component::Component;
use crate::schemas::entry::{NormalizationStyle, SchemaEntry};
use crate::schemas::file_format::{ConfigFileSpec, FileFormat};
use crate::schemas::profile::ComponentProfile;
use crate::schemas::rules::{
    BOOL_STRICT, ConventionRule, DURATION_UNITS, ExactRule, ValueRule, contains, exact, suffix,
};

const HIVE_SITE: &str = "hive-site.xml";
const HIVESERVER2_SITE: &str = "hiveserver2-site.xml";
const RANGER_AUDIT: &str = "ranger-hive-audit.xml";
const RANGER_SECURITY: &str = "ranger-hive-security.xml";

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new(HIVE_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(HIVESERVER2_SITE, FileFormat::PropertyXml),
    ConfigFileSpec::new(RANGER_AUDIT, FileFormat::PropertyXml),
    ConfigFileSpec::new(RANGER_SECURITY, FileFormat::PropertyXml),
];

const SCHEMA: &[SchemaEntry] = &[
    // hive-site.xml: metastore
    SchemaEntry::key("javax.jdo.option.ConnectionURL", HIVE_SITE),
    SchemaEntry::pattern(
        "javax.jdo.option.ConnectionURL",
        r"^(hive[._-]?)?(metastore[._-]?)?(db|jdbc|connection)[._-]?url$",
        HIVE_SITE,
    ),
    SchemaEntry::key("javax.jdo.option.ConnectionDriverName", HIVE_SITE),
    SchemaEntry::pattern(
        "javax.jdo.option.ConnectionDriverName",
        r"^(hive[._-]?)?(metastore[._-]?)?(db|jdbc)[._-]?driver([._-]?name)?$",
        HIVE_SITE,
    ),
    SchemaEntry::key("javax.jdo.option.ConnectionUserName", HIVE_SITE),
    SchemaEntry::pattern(
        "javax.jdo.option.ConnectionUserName",
        r"^(hive[._-]?)?(metastore[._-]?)?(db|jdbc)[._-]?user([._-]?name)?$",
        HIVE_SITE,
    ),
    SchemaEntry::key("javax.jdo.option.ConnectionPassword", HIVE_SITE),
    SchemaEntry::pattern(
        "javax.jdo.option.ConnectionPassword",
        r"^(hive[._-]?)?(metastore[._-]?)?(db|jdbc)[._-]?password$",
        HIVE_SITE,
    ),
    SchemaEntry::key("hive.metastore.uris", HIVE_SITE),
    SchemaEntry::alias("hive.metastore.uris", "metastore.uris", HIVE_SITE),
    SchemaEntry::key("hive.metastore.warehouse.dir", HIVE_SITE),
    SchemaEntry::alias("hive.metastore.warehouse.dir", "warehouse.dir", HIVE_SITE),
    SchemaEntry::key("hive.metastore.schema.verification", HIVE_SITE),
    SchemaEntry::key("hive.metastore.sasl.enabled", HIVE_SITE),
    SchemaEntry::key("hive.metastore.kerberos.principal", HIVE_SITE),
    SchemaEntry::key("hive.metastore.kerberos.keytab.file", HIVE_SITE),
    // hive-site.xml: execution
    SchemaEntry::key("hive.execution.engine", HIVE_SITE),
    SchemaEntry::alias("hive.execution.engine", "execution.engine", HIVE_SITE),
    SchemaEntry::key("hive.exec.scratchdir", HIVE_SITE),
    SchemaEntry::key("hive.exec.dynamic.partition", HIVE_SITE),
    SchemaEntry::key("hive.exec.dynamic.partition.mode", HIVE_SITE),
    SchemaEntry::key("hive.exec.parallel", HIVE_SITE),
    SchemaEntry::key("hive.exec.parallel.thread.number", HIVE_SITE),
    SchemaEntry::key("hive.exec.compress.output", HIVE_SITE),
    SchemaEntry::key("hive.exec.compress.intermediate", HIVE_SITE),
    SchemaEntry::key("hive.exec.reducers.bytes.per.reducer", HIVE_SITE),
    SchemaEntry::key("hive.exec.reducers.max", HIVE_SITE),
    SchemaEntry::key("hive.auto.convert.join", HIVE_SITE),
    SchemaEntry::key("hive.auto.convert.join.noconditionaltask.size", HIVE_SITE),
    SchemaEntry::key("hive.vectorized.execution.enabled", HIVE_SITE),
    SchemaEntry::key("hive.cbo.enable", HIVE_SITE),
    SchemaEntry::key("hive.fetch.task.conversion", HIVE_SITE),
    SchemaEntry::key("hive.mapred.mode", HIVE_SITE),
    SchemaEntry::key("hive.stats.autogather", HIVE_SITE),
    SchemaEntry::key("hive.tez.container.size", HIVE_SITE),
    SchemaEntry::key("hive.tez.java.opts", HIVE_SITE),
    SchemaEntry::key("hive.querylog.location", HIVE_SITE),
    SchemaEntry::key("hive.support.concurrency", HIVE_SITE),
    SchemaEntry::key("hive.txn.manager", HIVE_SITE),
    SchemaEntry::key("hive.compactor.initiator.on", HIVE_SITE),
    SchemaEntry::key("hive.compactor.worker.threads", HIVE_SITE),
    // hive-site.xml: HiveServer2
    SchemaEntry::key("hive.server2.thrift.port", HIVE_SITE),
    SchemaEntry::pattern("hive.server2.thrift.port", r"^(hs2|hiveserver2?)[._-]?(thrift[._-]?)?port$", HIVE_SITE),
    SchemaEntry::key("hive.server2.thrift.bind.host", HIVE_SITE),
    SchemaEntry::key("hive.server2.thrift.http.port", HIVE_SITE),
    SchemaEntry::key("hive.server2.transport.mode", HIVE_SITE),
    SchemaEntry::key("hive.server2.webui.port", HIVE_SITE),
    SchemaEntry::key("hive.server2.authentication", HIVE_SITE),
    SchemaEntry::key("hive.server2.authentication.kerberos.principal", HIVE_SITE),
    SchemaEntry::key("hive.server2.authentication.kerberos.keytab", HIVE_SITE),
    SchemaEntry::key("hive.server2.enable.doAs", HIVE_SITE),
    SchemaEntry::key("hive.server2.support.dynamic.service.discovery", HIVE_SITE),
    SchemaEntry::key("hive.server2.zookeeper.namespace", HIVE_SITE),
    SchemaEntry::key("hive.server2.idle.session.timeout", HIVE_SITE),
    SchemaEntry::key("hive.zookeeper.quorum", HIVE_SITE),
    SchemaEntry::key("hive.zookeeper.client.port", HIVE_SITE),
    SchemaEntry::key("hive.security.authorization.enabled", HIVE_SITE),
    SchemaEntry::key("hive.security.authorization.manager", HIVE_SITE),
    // hiveserver2-site.xml: same keys, HS2-only overrides
    SchemaEntry::key("hive.server2.authentication", HIVESERVER2_SITE),
    SchemaEntry::key("hive.server2.enable.doAs", HIVESERVER2_SITE),
    SchemaEntry::key("hive.security.authorization.enabled", HIVESERVER2_SITE),
    SchemaEntry::key("hive.security.authorization.manager", HIVESERVER2_SITE),
    SchemaEntry::key("hive.security.authenticator.manager", HIVESERVER2_SITE),
    SchemaEntry::key("hive.conf.restricted.list", HIVESERVER2_SITE),
    // ranger-hive-audit.xml
    SchemaEntry::key("xasecure.audit.is.enabled", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.hdfs", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.hdfs.dir", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.hdfs.batch.filespool.dir", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.solr", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.solr.urls", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.solr.zookeepers", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.destination.solr.batch.filespool.dir", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.hdfs.is.async", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.solr.is.async", RANGER_AUDIT),
    SchemaEntry::key("xasecure.audit.provider.summary.enabled", RANGER_AUDIT),
    // ranger-hive-security.xml
    SchemaEntry::key("ranger.plugin.hive.service.name", RANGER_SECURITY),
    SchemaEntry::key("ranger.plugin.hive.policy.rest.url", RANGER_SECURITY),
    SchemaEntry::alias("ranger.plugin.hive.policy.rest.url", "ranger.admin.url", RANGER_SECURITY),
    SchemaEntry::key("ranger.plugin.hive.policy.source.impl", RANGER_SECURITY),
    SchemaEntry::key("ranger.plugin.hive.policy.pollIntervalMs", RANGER_SECURITY),
    SchemaEntry::key("ranger.plugin.hive.policy.cache.dir", RANGER_SECURITY),
    SchemaEntry::key("ranger.plugin.hive.policy.rest.ssl.config.file", RANGER_SECURITY),
    SchemaEntry::key("xasecure.hive.update.xapolicies.on.grant.revoke", RANGER_SECURITY),
    SchemaEntry::family(
        "ranger.plugin.hive.<key>",
        r"^ranger\.plugin\.hive\.[a-z0-9_.-]+$",
        RANGER_SECURITY,
    ),
];

const EXACT_RULES: &[ExactRule] = &[
    exact("javax.jdo.option.ConnectionURL", ValueRule::Pattern(r"^jdbc:[A-Za-z0-9]+:\S+$")),
    exact("javax.jdo.option.ConnectionDriverName", ValueRule::ClassName),
    exact("javax.jdo.option.ConnectionUserName", ValueRule::NonEmpty),
    exact("hive.metastore.uris", ValueRule::UrlList(&["thrift"])),
    exact("hive.execution.engine", ValueRule::OneOf(&["mr", "tez", "spark"])),
    exact("hive.exec.dynamic.partition", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.exec.dynamic.partition.mode", ValueRule::OneOf(&["strict", "nonstrict"])),
    exact("hive.exec.parallel", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.exec.reducers.bytes.per.reducer", ValueRule::PositiveInt),
    exact("hive.exec.reducers.max", ValueRule::PositiveInt),
    exact("hive.auto.convert.join", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.auto.convert.join.noconditionaltask.size", ValueRule::PositiveInt),
    exact("hive.fetch.task.conversion", ValueRule::OneOf(&["none", "minimal", "more"])),
    exact("hive.mapred.mode", ValueRule::OneOf(&["strict", "nonstrict"])),
    exact("hive.stats.autogather", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.tez.container.size", ValueRule::IntRange(-1, i64::MAX)),
    exact("hive.support.concurrency", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.txn.manager", ValueRule::ClassName),
    exact("hive.server2.thrift.bind.host", ValueRule::HostList),
    exact("hive.server2.transport.mode", ValueRule::OneOf(&["binary", "http", "all"])),
    exact(
        "hive.server2.authentication",
        ValueRule::OneOf(&["NONE", "NOSASL", "KERBEROS", "LDAP", "PAM", "CUSTOM", "SAML", "JWT"]),
    ),
    exact("hive.server2.support.dynamic.service.discovery", ValueRule::Boolean(BOOL_STRICT)),
    exact("hive.server2.zookeeper.namespace", ValueRule::NonEmpty),
    exact("hive.zookeeper.quorum", ValueRule::HostList),
    exact("hive.conf.restricted.list", ValueRule::NonEmpty),
    exact("xasecure.audit.destination.hdfs", ValueRule::Boolean(BOOL_STRICT)),
    exact("xasecure.audit.destination.solr", ValueRule::Boolean(BOOL_STRICT)),
    exact("xasecure.audit.destination.hdfs.dir", ValueRule::Url(&["hdfs", "viewfs", "s3a", "abfs", "file"])),
    exact("xasecure.audit.destination.solr.urls", ValueRule::UrlList(&["http", "https"])),
    exact("xasecure.audit.destination.solr.zookeepers", ValueRule::ZkConnect),
    exact("ranger.plugin.hive.service.name", ValueRule::NonEmpty),
    exact("ranger.plugin.hive.policy.rest.url", ValueRule::UrlList(&["http", "https"])),
    exact("xasecure.hive.update.xapolicies.on.grant.revoke", ValueRule::Boolean(BOOL_STRICT)),
];

const CONVENTION_RULES: &[ConventionRule] = &[
    suffix(".is.enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".is.async", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".enabled", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".enable", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".doAs", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".verification", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".compress.output", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".compress.intermediate", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".on", ValueRule::Boolean(BOOL_STRICT)),
    suffix(".port", ValueRule::Port),
    suffix(".principal", ValueRule::Principal),
    suffix(".keytab", ValueRule::Path),
    suffix(".keytab.file", ValueRule::Path),
    contains(".keystore", ValueRule::Path),
    contains(".truststore", ValueRule::Path),
    contains(".interval.ms", ValueRule::NonNegativeInt),
    suffix("IntervalMs", ValueRule::NonNegativeInt),
    contains(".timeout", ValueRule::Duration(DURATION_UNITS)),
    suffix(".threads", ValueRule::NonNegativeInt),
    suffix(".thread.number", ValueRule::PositiveInt),
    suffix(".manager", ValueRule::ClassName),
    suffix(".impl", ValueRule::ClassName),
    suffix(".dir", ValueRule::Path),
    suffix(".scratchdir", ValueRule::Path),
    suffix(".location", ValueRule::Path),
    suffix(".config.file", ValueRule::Path),
    suffix(".java.opts", ValueRule::NonEmpty),
];

pub static PROFILE: ComponentProfile = ComponentProfile {
    component: Component::Hive,
    home_env: "HIVE_HOME",
    conf_subdir: "conf",
    redhat_dir: "/opt/hive/conf",
    debian_dir: "/usr/local/hive/conf",
    legacy_dirs: &["/etc/hive/conf"],
    normalization: NormalizationStyle::Alphanumeric,
    files: FILES,
    schema: SCHEMA,
    exact_rules: EXACT_RULES,
    convention_rules: CONVENTION_RULES,
    list_keys: &[],
};
