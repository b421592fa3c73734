//! Value validation.
//!
//! Precedence is fixed: empty value, then the component's exact-name rules,
//! then its convention rules (suffix/substring/prefix) in declared order,
//! then accept. Keys the tables do not mention are accepted as opaque
//! strings so that advanced vendor settings are never blocked.

use colored::Colorize;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::components;
use crate::libs::resolver;
use crate::libs::utilities::predicates::{
    MEMORY_UNITS, is_boolean_literal, is_hostname, is_java_class_name, is_one_of, is_path, is_principal,
    parse_decimal, parse_integer, split_amount_unit, split_host_port, url_scheme,
};
use crate::log_debug;
use crate::schemas::component::Component;
use crate::schemas::rules::ValueRule;
use crate::schemas::status::ValidationOutcome;

use ValidationOutcome::{ConstraintViolated, InvalidFormat, ValidationOk};

const ZK_ROLES: &[&str] = &["participant", "observer"];

fn integer_in(value: &str, min: i64, max: i64) -> ValidationOutcome {
    match parse_integer(value) {
        None => InvalidFormat,
        Some(n) if (min..=max).contains(&n) => ValidationOk,
        Some(_) => ConstraintViolated,
    }
}

fn port(value: &str) -> ValidationOutcome {
    integer_in(value, 1, 65535)
}

/// Amount with an optional unit. A leading minus sign on an otherwise
/// well-formed amount is a range problem, not a format problem.
fn amount_with_unit(value: &str, units: &[&str]) -> ValidationOutcome {
    match split_amount_unit(value) {
        Some((_, "")) => ValidationOk,
        Some((_, unit)) if is_one_of(unit, units) => ValidationOk,
        Some(_) => InvalidFormat,
        None => match value.trim().strip_prefix('-').and_then(split_amount_unit) {
            Some((_, unit)) if unit.is_empty() || is_one_of(unit, units) => ConstraintViolated,
            _ => InvalidFormat,
        },
    }
}

fn host_port(value: &str) -> ValidationOutcome {
    match split_host_port(value) {
        Some((host, p)) if is_hostname(host) => port(p),
        _ => InvalidFormat,
    }
}

fn host_optional_port(value: &str) -> ValidationOutcome {
    if is_hostname(value.trim()) { ValidationOk } else { host_port(value) }
}

fn url(value: &str, schemes: &[&str]) -> ValidationOutcome {
    match url_scheme(value) {
        None => InvalidFormat,
        Some(scheme) if schemes.is_empty() || is_one_of(scheme, schemes) => ValidationOk,
        Some(_) => ConstraintViolated,
    }
}

/// Hadoop storage-tagged directory (`[SSD]/data/1`) or plain path.
fn storage_path(value: &str) -> ValidationOutcome {
    let untagged = match value.strip_prefix('[') {
        Some(rest) => match rest.split_once(']') {
            Some((tag, path)) if !tag.is_empty() => path,
            _ => return InvalidFormat,
        },
        None => value,
    };
    if is_path(untagged) { ValidationOk } else { InvalidFormat }
}

/// `host:peerPort:electionPort[:role][;[clientHost:]clientPort]`
fn zk_server(value: &str) -> ValidationOutcome {
    let (server, client) = match value.trim().split_once(';') {
        Some((server, client)) => (server, Some(client)),
        None => (value.trim(), None),
    };

    let (host, rest) = if server.starts_with('[') {
        match server.find(']') {
            Some(close) => (&server[..=close], server[close + 1..].strip_prefix(':').unwrap_or("")),
            None => return InvalidFormat,
        }
    } else {
        server.split_once(':').unwrap_or((server, ""))
    };
    if !is_hostname(host) {
        return InvalidFormat;
    }
    let parts: Vec<&str> = rest.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return InvalidFormat;
    }
    for p in &parts[..2] {
        let outcome = port(p);
        if !outcome.is_ok() {
            return outcome;
        }
    }
    if let Some(role) = parts.get(2) {
        if !is_one_of(role, ZK_ROLES) {
            return ConstraintViolated;
        }
    }
    match client {
        None => ValidationOk,
        Some(client) if client.contains(':') => host_port(client),
        Some(client) => port(client),
    }
}

/// `NAME://[host]:port`
fn listener(value: &str) -> ValidationOutcome {
    let Some((name, address)) = value.split_once("://") else {
        return InvalidFormat;
    };
    let name_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !name_ok {
        return InvalidFormat;
    }
    match split_host_port(address) {
        Some(("", p)) => port(p),
        Some((host, p)) if is_hostname(host) || host == "0.0.0.0" => port(p),
        _ => InvalidFormat,
    }
}

/// `host[:port],...` optionally followed by a `/chroot` path.
fn zk_connect(value: &str) -> ValidationOutcome {
    let value = value.trim();
    let (hosts, chroot) = match value.find('/') {
        Some(idx) => (&value[..idx], Some(&value[idx..])),
        None => (value, None),
    };
    if chroot.is_some_and(|c| c.len() < 2 || c.ends_with('/') || c.contains("//")) {
        return InvalidFormat;
    }
    each_item(hosts, host_optional_port)
}

fn yaml_list(value: &str, inner: ValueRule) -> ValidationOutcome {
    let value = value.trim();
    let body = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    each_item(body, |item| {
        let unquoted = item.trim_matches(|c| c == '"' || c == '\'');
        if unquoted.is_empty() { InvalidFormat } else { check_rule(inner, unquoted) }
    })
}

/// Regexes used by `ValueRule::Pattern`, compiled on first use.
fn pattern(regex: &'static str, value: &str) -> ValidationOutcome {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, Option<Regex>>>> = OnceLock::new();
    let mut cache = CACHE
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let compiled = cache.entry(regex).or_insert_with(|| match Regex::new(regex) {
        Ok(re) => Some(re),
        Err(e) => {
            log_debug!("[Validator] Rule pattern '{}' does not compile: {}", regex.red(), e);
            None
        }
    });
    match compiled {
        Some(re) => predicate(re.is_match(value.trim())),
        // An unusable rule must not block the write.
        None => ValidationOk,
    }
}

/// Applies `element` to every comma-separated item; the first failure wins.
fn each_item(value: &str, element: impl Fn(&str) -> ValidationOutcome) -> ValidationOutcome {
    for item in value.split(',').map(str::trim) {
        if item.is_empty() {
            return InvalidFormat;
        }
        let outcome = element(item);
        if !outcome.is_ok() {
            return outcome;
        }
    }
    ValidationOk
}

fn predicate(ok: bool) -> ValidationOutcome {
    if ok { ValidationOk } else { InvalidFormat }
}

/// Checks `value` against one rule. `value` is assumed non-blank.
pub fn check_rule(rule: ValueRule, value: &str) -> ValidationOutcome {
    match rule {
        ValueRule::Boolean(literals) => predicate(is_boolean_literal(value, literals)),
        ValueRule::Port => port(value),
        ValueRule::PositiveInt => integer_in(value, 1, i64::MAX),
        ValueRule::NonNegativeInt => integer_in(value, 0, i64::MAX),
        ValueRule::IntRange(min, max) => integer_in(value, min, max),
        ValueRule::Ratio => match parse_decimal(value) {
            None => InvalidFormat,
            Some(n) if (0.0..=1.0).contains(&n) => ValidationOk,
            Some(_) => ConstraintViolated,
        },
        ValueRule::PositiveNumber => match parse_decimal(value) {
            None => InvalidFormat,
            Some(n) if n > 0.0 => ValidationOk,
            Some(_) => ConstraintViolated,
        },
        ValueRule::Duration(units) => amount_with_unit(value, units),
        ValueRule::MemorySize => amount_with_unit(value, MEMORY_UNITS),
        ValueRule::OneOf(allowed) => {
            if is_one_of(value, allowed) { ValidationOk } else { ConstraintViolated }
        }
        ValueRule::HostPort => host_port(value),
        ValueRule::HostPortList => each_item(value, host_port),
        ValueRule::HostList => each_item(value, host_optional_port),
        ValueRule::Url(schemes) => url(value, schemes),
        ValueRule::UrlList(schemes) => each_item(value, |item| url(item, schemes)),
        ValueRule::Path => predicate(is_path(value)),
        ValueRule::PathList => each_item(value, storage_path),
        ValueRule::Principal => predicate(is_principal(value)),
        ValueRule::ClassName => predicate(is_java_class_name(value)),
        ValueRule::ClassList => each_item(value, |item| predicate(is_java_class_name(item))),
        ValueRule::ZkServer => zk_server(value),
        ValueRule::Listeners => each_item(value, listener),
        ValueRule::ZkConnect => zk_connect(value),
        ValueRule::YamlList(inner) => yaml_list(value, *inner),
        ValueRule::Pattern(regex) => pattern(regex, value),
        ValueRule::NonEmpty => ValidationOk,
    }
}

/// Finds the rule that governs `canonical_name`, honoring precedence.
pub fn rule_for(component: Component, canonical_name: &str) -> Option<ValueRule> {
    let profile = components::profile(component);
    profile
        .exact_rules
        .iter()
        .find(|r| r.key == canonical_name)
        .map(|r| r.rule)
        .or_else(|| {
            profile
                .convention_rules
                .iter()
                .find(|r| r.matcher.matches(canonical_name))
                .map(|r| r.rule)
        })
}

/// Validates a value for an already-canonical key.
pub fn validate_value(component: Component, canonical_name: &str, value: &str) -> ValidationOutcome {
    if value.trim().is_empty() {
        return ValidationOutcome::ValueEmpty;
    }
    let outcome = match rule_for(component, canonical_name) {
        Some(rule) => check_rule(rule, value),
        None => ValidationOk,
    };
    log_debug!(
        "[Validator] {} {} = '{}' -> {}",
        component,
        canonical_name.cyan(),
        value,
        outcome
    );
    outcome
}

/// Resolves `param_name` and validates `value` for the resolved key.
/// Resolution failure short-circuits with `ParamNotFound`.
pub fn validate_param(component: Component, param_name: &str, value: &str) -> ValidationOutcome {
    match resolver::resolve(component, param_name) {
        Ok(resolved) => validate_value(component, &resolved.canonical_name, value),
        Err(not_found) => not_found.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::rules::{BOOL_STRICT, DURATION_UNITS};
    use proptest::prelude::*;

    #[test]
    fn zookeeper_client_port_in_hbase() {
        assert_eq!(
            validate_value(Component::Hbase, "hbase.zookeeper.property.clientPort", "2181"),
            ValidationOk
        );
        assert_eq!(
            validate_value(Component::Hbase, "hbase.zookeeper.property.clientPort", "70000"),
            ConstraintViolated
        );
        assert_eq!(
            validate_value(Component::Hbase, "hbase.zookeeper.property.clientPort", "port"),
            InvalidFormat
        );
    }

    #[test]
    fn bootstrap_servers_need_ports_everywhere() {
        assert_eq!(validate_value(Component::Kafka, "bootstrap.servers", "host1:9092,host2"), InvalidFormat);
        assert_eq!(validate_value(Component::Kafka, "bootstrap.servers", "host1:9092,host2:9093"), ValidationOk);
        assert_eq!(validate_value(Component::Kafka, "bootstrap.servers", "host1:90920"), ConstraintViolated);
    }

    #[test]
    fn empty_value_comes_first() {
        assert_eq!(validate_value(Component::Hive, "hive.execution.engine", "  "), ValidationOutcome::ValueEmpty);
        assert_eq!(validate_value(Component::Hive, "no.rule.for.this", ""), ValidationOutcome::ValueEmpty);
    }

    #[test]
    fn exact_rules_beat_conventions() {
        assert_eq!(validate_value(Component::Hive, "hive.execution.engine", "tez"), ValidationOk);
        assert_eq!(validate_value(Component::Hive, "hive.execution.engine", "flink"), ConstraintViolated);
    }

    #[test]
    fn unknown_keys_are_accepted() {
        assert_eq!(validate_value(Component::Kafka, "some.vendor.extension", "anything"), ValidationOk);
    }

    #[test]
    fn param_not_found_short_circuits() {
        assert_eq!(validate_param(Component::Hbase, "no.such.param", "x"), ValidationOutcome::ParamNotFound);
        assert_eq!(validate_param(Component::Hbase, "HBASE_ROOT_DIR", "hdfs://nn:8020/hbase"), ValidationOk);
    }

    #[test]
    fn rule_shapes() {
        assert_eq!(check_rule(ValueRule::Boolean(BOOL_STRICT), "TRUE"), ValidationOk);
        assert_eq!(check_rule(ValueRule::Boolean(BOOL_STRICT), "yes"), InvalidFormat);
        assert_eq!(check_rule(ValueRule::Duration(DURATION_UNITS), "30s"), ValidationOk);
        assert_eq!(check_rule(ValueRule::Duration(DURATION_UNITS), "-30s"), ConstraintViolated);
        assert_eq!(check_rule(ValueRule::Duration(DURATION_UNITS), "30 parsecs"), InvalidFormat);
        assert_eq!(check_rule(ValueRule::MemorySize, "4g"), ValidationOk);
        assert_eq!(check_rule(ValueRule::Ratio, "1.5"), ConstraintViolated);
        assert_eq!(check_rule(ValueRule::Url(&["hdfs"]), "s3a://b/p"), ConstraintViolated);
        assert_eq!(check_rule(ValueRule::Url(&["hdfs"]), "nn:8020"), InvalidFormat);
        assert_eq!(check_rule(ValueRule::PathList, "[SSD]/data/1,/data/2"), ValidationOk);
        assert_eq!(check_rule(ValueRule::PathList, "/data/1,,/data/2"), InvalidFormat);
        assert_eq!(check_rule(ValueRule::HostList, "zk1,zk2:2181"), ValidationOk);
    }

    #[test]
    fn zookeeper_server_specs() {
        assert_eq!(zk_server("zk1.example.com:2888:3888"), ValidationOk);
        assert_eq!(zk_server("zk1:2888:3888:observer;2181"), ValidationOk);
        assert_eq!(zk_server("zk1:2888:3888;0.0.0.0:2181"), ValidationOk);
        assert_eq!(zk_server("zk1:2888"), InvalidFormat);
        assert_eq!(zk_server("zk1:2888:99999"), ConstraintViolated);
        assert_eq!(zk_server("zk1:2888:3888:leader"), ConstraintViolated);
    }

    #[test]
    fn kafka_listeners() {
        assert_eq!(check_rule(ValueRule::Listeners, "PLAINTEXT://:9092,SSL://broker1:9093"), ValidationOk);
        assert_eq!(check_rule(ValueRule::Listeners, "PLAINTEXT://0.0.0.0:9092"), ValidationOk);
        assert_eq!(check_rule(ValueRule::Listeners, "broker1:9092"), InvalidFormat);
        assert_eq!(check_rule(ValueRule::Listeners, "PLAINTEXT://:0"), ConstraintViolated);
    }

    #[test]
    fn zk_connect_strings() {
        assert_eq!(zk_connect("zk1:2181,zk2:2181/kafka"), ValidationOk);
        assert_eq!(zk_connect("zk1,zk2"), ValidationOk);
        assert_eq!(zk_connect("zk1:2181/"), InvalidFormat);
        assert_eq!(zk_connect("zk1:99999"), ConstraintViolated);
    }

    #[test]
    fn yaml_lists() {
        const PORT: ValueRule = ValueRule::Port;
        assert_eq!(yaml_list("[6700, 6701]", PORT), ValidationOk);
        assert_eq!(yaml_list("6700,6701", PORT), ValidationOk);
        assert_eq!(yaml_list("[\"6700\", 70000]", PORT), ConstraintViolated);
        assert_eq!(yaml_list("[]", PORT), InvalidFormat);
    }

    #[test]
    fn every_pattern_rule_compiles() {
        for component in Component::ALL {
            let profile = components::profile(component);
            let rules = profile
                .exact_rules
                .iter()
                .map(|r| r.rule)
                .chain(profile.convention_rules.iter().map(|r| r.rule));
            for rule in rules {
                if let ValueRule::Pattern(re) = rule {
                    assert!(Regex::new(re).is_ok(), "{component}: bad rule pattern {re}");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn validation_is_pure(key in "[a-z.]{1,30}", value in "\\PC{0,20}") {
            for component in Component::ALL {
                prop_assert_eq!(
                    validate_value(component, &key, &value),
                    validate_value(component, &key, &value)
                );
            }
        }
    }
}
