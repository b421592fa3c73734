// Declarative validation rules. Each component lists exact-name rules and
// convention rules (suffix / substring / prefix on the canonical key); the
// validator interprets them in that order.
//
// Nothing in this file checks a value. The tables only say which shape a key
// expects; `libs::validator::check_rule` holds the one implementation of
// every shape.

/// `true`/`false` only (Hadoop-style XML flags).
pub const BOOL_STRICT: &[&str] = &["true", "false"];
/// The wider literal set some line-oriented files accept.
pub const BOOL_LOOSE: &[&str] = &["true", "false", "yes", "no", "0", "1"];
/// YAML 1.1 booleans as Storm's and Flink's loaders read them.
pub const BOOL_YAML: &[&str] = &["true", "false", "yes", "no", "on", "off"];

/// Duration units understood by Hadoop-family `*.timeout`/`*.interval` keys.
pub const DURATION_UNITS: &[&str] = &["ms", "s", "m", "h", "d"];
/// Spark and Flink spell units out as well.
pub const DURATION_UNITS_LONG: &[&str] = &[
    "ms", "s", "m", "min", "h", "d", "us", "milli", "millis", "sec", "secs", "second", "seconds",
    "minute", "minutes", "hour", "hours", "day", "days",
];

/// Shape/range a value must satisfy.
///
/// Variants carrying a slice (`Boolean`, `Duration`, `OneOf`, `Url`) take the
/// accepted literal set from the component table, so the same shape can be
/// strict for Hadoop XML and loose for a `.properties` file.
///
/// # Example
/// ```
/// use cluster_agent::schemas::rules::{ValueRule, BOOL_STRICT};
///
/// assert_eq!(ValueRule::Boolean(BOOL_STRICT).describe(), "boolean (true|false)");
/// assert_eq!(ValueRule::YamlList(&ValueRule::Port).describe(), "list of port");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRule {
    /// One of the given literals, compared case-insensitively.
    Boolean(&'static [&'static str]),
    /// Integer in `1..=65535`.
    Port,
    /// Integer `> 0`.
    PositiveInt,
    /// Integer `>= 0`.
    NonNegativeInt,
    /// Integer in the inclusive range.
    IntRange(i64, i64),
    /// Decimal in `0.0..=1.0`.
    Ratio,
    /// Decimal `> 0`.
    PositiveNumber,
    /// Non-negative integer with an optional unit from the set.
    Duration(&'static [&'static str]),
    /// Non-negative integer with an optional `b|k|m|g|t` unit (`kb`, `mb`... too).
    MemorySize,
    /// Member of the set, compared case-insensitively.
    OneOf(&'static [&'static str]),
    /// `host:port`.
    HostPort,
    /// Comma-separated `host:port` pairs.
    HostPortList,
    /// Comma-separated hosts, each with an optional port.
    HostList,
    /// `scheme://rest` with a scheme from the set.
    Url(&'static [&'static str]),
    /// Comma-separated URLs.
    UrlList(&'static [&'static str]),
    /// Filesystem path (absolute, relative, or `file://` URI).
    Path,
    /// Comma-separated paths; Hadoop storage tags like `[SSD]` are allowed.
    PathList,
    /// Kerberos principal `primary[/instance]@REALM`.
    Principal,
    /// Fully-qualified Java class name.
    ClassName,
    /// Comma-separated Java class names.
    ClassList,
    /// ZooKeeper ensemble member `host:peerPort:electionPort[:role][;[clientHost:]clientPort]`.
    ZkServer,
    /// Kafka listener list `NAME://[host]:port,...`.
    Listeners,
    /// ZooKeeper connect string `host[:port],...[/chroot]`.
    ZkConnect,
    /// YAML sequence, either `[a, b]` or `a,b`; every item must satisfy the
    /// inner rule (quotes around items are ignored).
    YamlList(&'static ValueRule),
    /// Whole value must match the regex.
    Pattern(&'static str),
    /// Anything non-blank.
    NonEmpty,
}

impl ValueRule {
    /// Short human-readable form for the `schema` listing.
    ///
    /// # Returns
    /// * `String`: one line, e.g. `port`, `duration [ms|s|m|h|d]`,
    ///   `url (hdfs|file)`. Nested list rules describe their inner rule.
    pub fn describe(&self) -> String {
        match self {
            ValueRule::Boolean(literals) => format!("boolean ({})", literals.join("|")),
            ValueRule::Port => "port".to_string(),
            ValueRule::PositiveInt => "integer > 0".to_string(),
            ValueRule::NonNegativeInt => "integer >= 0".to_string(),
            ValueRule::IntRange(min, max) => format!("integer {min}..={max}"),
            ValueRule::Ratio => "ratio 0..1".to_string(),
            ValueRule::PositiveNumber => "number > 0".to_string(),
            ValueRule::Duration(units) => format!("duration [{}]", units.join("|")),
            ValueRule::MemorySize => "memory size".to_string(),
            ValueRule::OneOf(allowed) => format!("one of {}", allowed.join("|")),
            ValueRule::HostPort => "host:port".to_string(),
            ValueRule::HostPortList => "host:port,...".to_string(),
            ValueRule::HostList => "host[:port],...".to_string(),
            ValueRule::Url(schemes) | ValueRule::UrlList(schemes) => {
                let list = if matches!(self, ValueRule::UrlList(_)) { " list" } else { "" };
                if schemes.is_empty() {
                    format!("url{list}")
                } else {
                    format!("url{list} ({})", schemes.join("|"))
                }
            }
            ValueRule::Path => "path".to_string(),
            ValueRule::PathList => "path,...".to_string(),
            ValueRule::Principal => "kerberos principal".to_string(),
            ValueRule::ClassName => "java class".to_string(),
            ValueRule::ClassList => "java class,...".to_string(),
            ValueRule::ZkServer => "zookeeper server".to_string(),
            ValueRule::Listeners => "listeners".to_string(),
            ValueRule::ZkConnect => "zookeeper connect string".to_string(),
            ValueRule::YamlList(inner) => format!("list of {}", inner.describe()),
            ValueRule::Pattern(regex) => format!("matches {regex}"),
            ValueRule::NonEmpty => "non-empty".to_string(),
        }
    }
}

/// Which part of a canonical key a convention rule looks at.
/// Comparisons are case-sensitive: canonical keys are already spelled the
/// way the component spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatcher {
    /// `Port` matches `clientPort`, `hbase.master.info.port` does not.
    Suffix(&'static str),
    Contains(&'static str),
    Prefix(&'static str),
}

impl KeyMatcher {
    /// True when `key` has the matcher's text in the matcher's position.
    ///
    /// # Arguments
    /// * `key`: A canonical key as produced by the resolver.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyMatcher::Suffix(s) => key.ends_with(s),
            KeyMatcher::Contains(s) => key.contains(s),
            KeyMatcher::Prefix(s) => key.starts_with(s),
        }
    }
}

/// Rule bound to one exact canonical key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactRule {
    pub key: &'static str,
    pub rule: ValueRule,
}

/// Rule shared by every key matching a naming convention.
///
/// Conventions are tried in table order after the exact rules, and the first
/// one whose matcher fits decides; put the narrow ones first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConventionRule {
    pub matcher: KeyMatcher,
    pub rule: ValueRule,
}

/// Table shorthand: `exact("tickTime", ValueRule::PositiveInt)`.
pub const fn exact(key: &'static str, rule: ValueRule) -> ExactRule {
    ExactRule { key, rule }
}

/// Convention on the end of the key (`.port`, `.dir`, `Enabled`).
pub const fn suffix(pattern: &'static str, rule: ValueRule) -> ConventionRule {
    ConventionRule { matcher: KeyMatcher::Suffix(pattern), rule }
}

pub const fn contains(pattern: &'static str, rule: ValueRule) -> ConventionRule {
    ConventionRule { matcher: KeyMatcher::Contains(pattern), rule }
}

pub const fn prefix(pattern: &'static str, rule: ValueRule) -> ConventionRule {
    ConventionRule { matcher: KeyMatcher::Prefix(pattern), rule }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_nest_for_lists() {
        assert_eq!(ValueRule::YamlList(&ValueRule::Port).describe(), "list of port");
        assert_eq!(ValueRule::Url(&[]).describe(), "url");
        assert_eq!(ValueRule::UrlList(&["hdfs"]).describe(), "url list (hdfs)");
        assert_eq!(ValueRule::IntRange(0, 65535).describe(), "integer 0..=65535");
    }

    #[test]
    fn key_matchers() {
        assert!(KeyMatcher::Suffix(".port").matches("ui.port"));
        assert!(KeyMatcher::Prefix("server.").matches("server.1"));
        assert!(!KeyMatcher::Contains(".timeout").matches("timeout"));
        assert!(KeyMatcher::Suffix("Port").matches("clientPort"));
        assert!(!KeyMatcher::Suffix("Port").matches("hbase.master.info.port"));
    }
}
