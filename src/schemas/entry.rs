// Data model for the per-component schema tables and for what the resolver
// hands back. Tables are `const` data; nothing here is mutated at runtime.

use serde::Serialize;

/// How a raw parameter name is folded before literal comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationStyle {
    /// Lower-case and drop every non-alphanumeric character:
    /// `HBASE_ROOT_DIR` → `hbaserootdir`.
    Alphanumeric,
    /// Lower-case, collapse runs of `.`, `_`, `-` (and whitespace) into one
    /// `.`, trim dots:
    /// `LOG__RETENTION-hours` → `log.retention.hours`.
    Dotted,
}

/// How one schema entry recognizes user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPattern {
    /// The canonical name itself, normalized with the component's style.
    Canonical,
    /// An alternative spelling, normalized the same way.
    Alias(&'static str),
    /// A regex tried case-insensitively against the raw (non-normalized)
    /// name; resolves to the entry's canonical name.
    Regex(&'static str),
    /// A regex for a parameterized key family (`server.1`, `server.2`, ...).
    /// The trimmed raw name becomes the canonical name, with its fixed parts
    /// spelled as in the entry's label.
    Family(&'static str),
}

/// One row of a component's schema table.
///
/// `canonical_name` is not unique within a table: the same logical key can
/// live in two files. `(canonical_name, target_file)` identifies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub canonical_name: &'static str,
    pub pattern: MatchPattern,
    pub target_file: &'static str,
}

impl SchemaEntry {
    /// Entry matched by its own canonical name.
    pub const fn key(canonical_name: &'static str, target_file: &'static str) -> Self {
        Self { canonical_name, pattern: MatchPattern::Canonical, target_file }
    }

    /// Entry matched by an alternative literal spelling.
    pub const fn alias(
        canonical_name: &'static str,
        alias: &'static str,
        target_file: &'static str,
    ) -> Self {
        Self { canonical_name, pattern: MatchPattern::Alias(alias), target_file }
    }

    /// Entry matched by a case-insensitive regex over the raw name.
    pub const fn pattern(
        canonical_name: &'static str,
        regex: &'static str,
        target_file: &'static str,
    ) -> Self {
        Self { canonical_name, pattern: MatchPattern::Regex(regex), target_file }
    }

    /// Parameterized key family. `label` (e.g. `server.<N>`) is shown in
    /// listings and supplies the spelling of the fixed parts of a member.
    pub const fn family(
        label: &'static str,
        regex: &'static str,
        target_file: &'static str,
    ) -> Self {
        Self { canonical_name: label, pattern: MatchPattern::Family(regex), target_file }
    }

    /// Short matcher description for the `schema` listing.
    pub fn matcher_label(&self) -> String {
        match self.pattern {
            MatchPattern::Canonical => "canonical".to_string(),
            MatchPattern::Alias(alias) => format!("alias {alias}"),
            MatchPattern::Regex(regex) => format!("regex {regex}"),
            MatchPattern::Family(regex) => format!("family {regex}"),
        }
    }
}

/// Canonical key and target file for a raw name, before a value is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedName {
    pub canonical_name: String,
    pub target_file: &'static str,
}

impl ResolvedName {
    pub fn with_value(self, value: &str) -> ResolvedParameter {
        ResolvedParameter {
            canonical_name: self.canonical_name,
            value: value.to_string(),
            target_file: self.target_file.to_string(),
        }
    }
}

/// A parameter ready to be validated and written. Owned by the request that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameter {
    pub canonical_name: String,
    pub value: String,
    pub target_file: String,
}
