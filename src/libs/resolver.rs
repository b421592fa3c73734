//! Name resolution: maps a free-form parameter name onto a canonical key and
//! the file it belongs in.
//!
//! Each component's schema table is compiled once (literals normalized,
//! regexes built) on first use and cached for the life of the process. The
//! walk over a table is first-match-wins in declared order.

use colored::Colorize;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;
use thiserror::Error;

use crate::components;
use crate::schemas::component::Component;
use crate::schemas::entry::{MatchPattern, NormalizationStyle, ResolvedName, SchemaEntry};
use crate::schemas::status::ValidationOutcome;
use crate::log_debug;

/// The raw name did not match any entry of the component's table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter '{name}' is not known for {component}")]
pub struct NotFound {
    pub component: Component,
    pub name: String,
}

impl From<NotFound> for ValidationOutcome {
    fn from(_: NotFound) -> Self {
        ValidationOutcome::ParamNotFound
    }
}

/// Folds a raw name according to `style`. Idempotent.
pub fn normalize(style: NormalizationStyle, raw: &str) -> String {
    match style {
        NormalizationStyle::Alphanumeric => raw
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        NormalizationStyle::Dotted => {
            let mut out = String::with_capacity(raw.len());
            let mut pending_dot = false;
            for c in raw.chars() {
                if matches!(c, '.' | '_' | '-') || c.is_whitespace() {
                    pending_dot = true;
                    continue;
                }
                if pending_dot && !out.is_empty() {
                    out.push('.');
                }
                pending_dot = false;
                out.push(c.to_ascii_lowercase());
            }
            out
        }
    }
}

/// Spells the fixed parts of a family member the way its label does:
/// with label `dfs.ha.namenodes.<nameservice>`, `DFS.HA.NAMENODES.ns1`
/// becomes `dfs.ha.namenodes.ns1`. The variable parts keep the raw spelling,
/// except a trailing `<a|b|c>` choice, which takes the listed spelling.
pub fn family_key(label: &str, raw: &str) -> String {
    let (Some(open), Some(close)) = (label.find('<'), label.rfind('>')) else {
        return raw.to_string();
    };
    let (prefix, suffix) = (&label[..open], &label[close + 1..]);
    let middle = raw
        .len()
        .checked_sub(suffix.len())
        .filter(|&end| end >= prefix.len())
        .and_then(|end| {
            let head = raw.get(..prefix.len())?;
            let tail = raw.get(end..)?;
            if head.eq_ignore_ascii_case(prefix) && tail.eq_ignore_ascii_case(suffix) {
                raw.get(prefix.len()..end)
            } else {
                None
            }
        });
    let Some(middle) = middle else {
        return raw.to_string();
    };

    let mut key = format!("{prefix}{middle}{suffix}");
    let last_choice = suffix
        .is_empty()
        .then(|| label.rsplit('.').next())
        .flatten()
        .and_then(|segment| segment.strip_prefix('<')?.strip_suffix('>'))
        .filter(|choice| choice.contains('|'));
    if let Some(choice) = last_choice {
        if let Some((head, last)) = key.rsplit_once('.') {
            if let Some(spelled) = choice.split('|').find(|c| c.eq_ignore_ascii_case(last)) {
                key = format!("{head}.{spelled}");
            }
        }
    }
    key
}

enum Matcher {
    Literal(String),
    Pattern(Regex),
    Family(Regex),
}

struct CompiledEntry {
    entry: &'static SchemaEntry,
    matcher: Matcher,
}

/// A component's schema table, ready for matching.
pub struct CompiledTable {
    component: Component,
    style: NormalizationStyle,
    entries: Vec<CompiledEntry>,
}

fn compile_regex(component: Component, pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            log_debug!(
                "[Resolver] {} schema pattern '{}' does not compile and is skipped: {}",
                component,
                pattern.red(),
                e
            );
            None
        }
    }
}

impl CompiledTable {
    fn build(component: Component) -> Self {
        let profile = components::profile(component);
        let style = profile.normalization;
        let entries = profile
            .schema
            .iter()
            .filter_map(|entry| {
                let matcher = match entry.pattern {
                    MatchPattern::Canonical => Matcher::Literal(normalize(style, entry.canonical_name)),
                    MatchPattern::Alias(alias) => Matcher::Literal(normalize(style, alias)),
                    MatchPattern::Regex(p) => Matcher::Pattern(compile_regex(component, p)?),
                    MatchPattern::Family(p) => Matcher::Family(compile_regex(component, p)?),
                };
                Some(CompiledEntry { entry, matcher })
            })
            .collect();
        Self { component, style, entries }
    }

    /// Number of usable entries (patterns that failed to compile are dropped).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn try_match(&self, compiled: &CompiledEntry, raw: &str, normalized: &str) -> Option<ResolvedName> {
        let canonical_name = match &compiled.matcher {
            Matcher::Literal(literal) if literal == normalized => compiled.entry.canonical_name.to_string(),
            Matcher::Pattern(re) if re.is_match(raw) => compiled.entry.canonical_name.to_string(),
            Matcher::Family(re) if re.is_match(raw) => family_key(compiled.entry.canonical_name, raw),
            _ => return None,
        };
        Some(ResolvedName { canonical_name, target_file: compiled.entry.target_file })
    }

    /// First positional match for `raw`, or `None`.
    pub fn resolve(&self, raw: &str) -> Option<ResolvedName> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let normalized = normalize(self.style, raw);
        let found = self.entries.iter().find_map(|e| self.try_match(e, raw, &normalized));
        log_debug!(
            "[Resolver] {} '{}' (normalized '{}') -> {:?}",
            self.component,
            raw,
            normalized,
            found
        );
        found
    }

    /// Like [`resolve`](Self::resolve) but prefers entries whose target file
    /// is `file`; falls back to the plain first match when none in that file
    /// matches.
    pub fn resolve_in_file(&self, raw: &str, file: &str) -> Option<ResolvedName> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = normalize(self.style, trimmed);
        self.entries
            .iter()
            .filter(|e| e.entry.target_file == file)
            .find_map(|e| self.try_match(e, trimmed, &normalized))
            .or_else(|| self.resolve(trimmed))
    }
}

/// The compiled table for `component`, built on first use.
pub fn compiled_table(component: Component) -> &'static CompiledTable {
    static TABLES: OnceLock<Vec<CompiledTable>> = OnceLock::new();
    let tables = TABLES.get_or_init(|| Component::ALL.iter().map(|c| CompiledTable::build(*c)).collect());
    &tables[component.index()]
}

/// Resolves `raw_name` for `component` by first-match-wins.
pub fn resolve(component: Component, raw_name: &str) -> Result<ResolvedName, NotFound> {
    compiled_table(component).resolve(raw_name).ok_or_else(|| NotFound {
        component,
        name: raw_name.to_string(),
    })
}

/// Resolves `raw_name`, preferring slots in `target_file`.
pub fn resolve_in_file(
    component: Component,
    raw_name: &str,
    target_file: &str,
) -> Result<ResolvedName, NotFound> {
    compiled_table(component)
        .resolve_in_file(raw_name, target_file)
        .ok_or_else(|| NotFound { component, name: raw_name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn alphanumeric_normalization() {
        assert_eq!(normalize(NormalizationStyle::Alphanumeric, "HBASE_ROOT_DIR"), "hbaserootdir");
        assert_eq!(normalize(NormalizationStyle::Alphanumeric, "hbase.rootdir"), "hbaserootdir");
        assert_eq!(normalize(NormalizationStyle::Alphanumeric, " a-b.c_d "), "abcd");
    }

    #[test]
    fn dotted_normalization() {
        assert_eq!(normalize(NormalizationStyle::Dotted, "LOG__RETENTION-hours"), "log.retention.hours");
        assert_eq!(normalize(NormalizationStyle::Dotted, "._num.partitions_."), "num.partitions");
        assert_eq!(normalize(NormalizationStyle::Dotted, "..."), "");
        assert_eq!(normalize(NormalizationStyle::Dotted, "log retention  hours"), "log.retention.hours");
    }

    #[test]
    fn hbase_root_dir_resolves_to_rootdir() {
        let resolved = resolve(Component::Hbase, "HBASE_ROOT_DIR").unwrap();
        assert_eq!(resolved.canonical_name, "hbase.rootdir");
        assert_eq!(resolved.target_file, "hbase-site.xml");
    }

    #[test]
    fn unknown_and_blank_names_are_not_found() {
        assert!(resolve(Component::Hbase, "definitely.not.a.key").is_err());
        assert!(resolve(Component::Kafka, "   ").is_err());
        let err = resolve(Component::Storm, "").unwrap_err();
        assert_eq!(ValidationOutcome::from(err), ValidationOutcome::ParamNotFound);
    }

    #[test]
    fn family_patterns_keep_the_member_name() {
        let resolved = resolve(Component::Zookeeper, "server.3").unwrap();
        assert_eq!(resolved.canonical_name, "server.3");
        assert_eq!(resolved.target_file, "zoo.cfg");
    }

    #[test]
    fn family_members_take_the_label_spelling() {
        let resolved = resolve(Component::Hadoop, "DFS.HA.NAMENODES.ns1").unwrap();
        assert_eq!(resolved.canonical_name, "dfs.ha.namenodes.ns1");
        assert_eq!(resolved.target_file, "hdfs-site.xml");

        let resolved = resolve(Component::Zookeeper, "AUTHPROVIDER.1").unwrap();
        assert_eq!(resolved.canonical_name, "authProvider.1");

        let resolved = resolve(Component::Hadoop, "Hadoop.ProxyUser.Hive.HOSTS").unwrap();
        assert_eq!(resolved.canonical_name, "hadoop.proxyuser.Hive.hosts");
    }

    #[test]
    fn family_key_spelling() {
        assert_eq!(family_key("server.<N>", "SERVER.12"), "server.12");
        assert_eq!(
            family_key("dfs.namenode.<rpc|http|https>-address.<nameservice>.<namenode>", "DFS.NameNode.rpc-address.ns1.nn1"),
            "dfs.namenode.rpc-address.ns1.nn1"
        );
        // Not shaped like the label: left alone.
        assert_eq!(family_key("server.<N>", "srv"), "srv");
        assert_eq!(family_key("no placeholders", "Raw.Name"), "Raw.Name");
    }

    #[test]
    fn file_hint_picks_the_slot_in_that_file() {
        let plain = resolve(Component::Hive, "hive.server2.authentication").unwrap();
        assert_eq!(plain.target_file, "hive-site.xml");
        let hinted =
            resolve_in_file(Component::Hive, "hive.server2.authentication", "hiveserver2-site.xml").unwrap();
        assert_eq!(hinted.canonical_name, "hive.server2.authentication");
        assert_eq!(hinted.target_file, "hiveserver2-site.xml");

        // No slot in the hinted file: falls back to first match.
        let fallback = resolve_in_file(Component::Hive, "hive.execution.engine", "ranger-hive-audit.xml").unwrap();
        assert_eq!(fallback.target_file, "hive-site.xml");
    }

    #[test]
    fn every_schema_pattern_compiles() {
        for component in Component::ALL {
            let profile = components::profile(component);
            assert_eq!(
                compiled_table(component).len(),
                profile.schema.len(),
                "{component} has a schema pattern that does not compile"
            );
        }
    }

    #[test]
    fn every_target_file_is_declared_by_its_component() {
        for component in Component::ALL {
            let profile = components::profile(component);
            for entry in profile.schema {
                assert!(
                    profile.accepts_file(entry.target_file),
                    "{component}: {} targets undeclared file {}",
                    entry.canonical_name,
                    entry.target_file
                );
            }
        }
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for component in Component::ALL {
            let profile = components::profile(component);
            for entry in profile.schema.iter().filter(|e| e.pattern == MatchPattern::Canonical) {
                let resolved = resolve(component, entry.canonical_name).unwrap();
                assert_eq!(
                    resolved.canonical_name, entry.canonical_name,
                    "{component}: '{}' is shadowed by an earlier entry",
                    entry.canonical_name
                );
            }
        }
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "\\PC{0,40}") {
            for style in [NormalizationStyle::Alphanumeric, NormalizationStyle::Dotted] {
                let once = normalize(style, &s);
                prop_assert_eq!(normalize(style, &once), once);
            }
        }

        #[test]
        fn resolution_is_deterministic(s in "[a-zA-Z0-9._ -]{0,30}") {
            for component in Component::ALL {
                prop_assert_eq!(resolve(component, &s).ok(), resolve(component, &s).ok());
            }
        }
    }
}
