// The three on-disk grammars the mutators understand, and the per-file
// description components use to declare which files they accept.

use std::fmt;

/// Separator between key and value in line-oriented files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `key=value` (.properties, zoo.cfg)
    Equals,
    /// `key: value` (storm.yaml, flink-conf.yaml)
    Colon,
    /// `key value` (spark-defaults.conf)
    Whitespace,
}

impl Separator {
    /// Text written between key and value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Equals => "=",
            Separator::Colon => ": ",
            Separator::Whitespace => " ",
        }
    }

    /// Splits `line` at the first separator occurrence, returning the
    /// trimmed key and the untouched remainder. `None` if the line has no
    /// separator.
    pub fn split_key<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let trimmed = line.trim_start();
        let (idx, sep) = trimmed.char_indices().find(|(_, c)| match self {
            Separator::Equals => *c == '=',
            Separator::Colon => *c == ':',
            Separator::Whitespace => c.is_whitespace(),
        })?;
        Some((trimmed[..idx].trim(), &trimmed[idx + sep.len_utf8()..]))
    }

    /// Characters that start a comment line for this flavour of file.
    /// `.properties` files also treat `!` as a comment marker.
    pub fn comment_prefixes(&self) -> &'static [char] {
        match self {
            Separator::Equals => &['#', '!'],
            Separator::Colon | Separator::Whitespace => &['#'],
        }
    }
}

/// Grammar of one configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `<configuration><property><name/><value/></property>...</configuration>`
    PropertyXml,
    /// Line-oriented `key<sep>value`, updated in place.
    LineKv(Separator),
    /// Free-form text where new `key<sep>value` lines are appended.
    ConfAppend(Separator),
}

impl FileFormat {
    /// Only the XML mutator can fabricate a missing file; the minimal valid
    /// content of the line formats is owned by the vendor.
    pub fn can_create(&self) -> bool {
        matches!(self, FileFormat::PropertyXml)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileFormat::PropertyXml => write!(f, "property-xml"),
            FileFormat::LineKv(sep) => write!(f, "line-kv '{}'", sep.as_str()),
            FileFormat::ConfAppend(sep) => write!(f, "conf-append '{}'", sep.as_str()),
        }
    }
}

/// A file a component accepts, with its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFileSpec {
    pub name: &'static str,
    pub format: FileFormat,
}

impl ConfigFileSpec {
    pub const fn new(name: &'static str, format: FileFormat) -> Self {
        Self { name, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_key_uses_first_separator_only() {
        assert_eq!(
            Separator::Equals.split_key("  listeners = PLAINTEXT://a:9092=x"),
            Some(("listeners", " PLAINTEXT://a:9092=x"))
        );
        assert_eq!(
            Separator::Colon.split_key("nimbus.seeds: [\"a:1\"]"),
            Some(("nimbus.seeds", " [\"a:1\"]"))
        );
        assert_eq!(
            Separator::Whitespace.split_key("spark.master  yarn"),
            Some(("spark.master", " yarn"))
        );
        assert_eq!(Separator::Equals.split_key("no separator here"), None);
    }

    #[test]
    fn only_xml_is_creatable() {
        assert!(FileFormat::PropertyXml.can_create());
        assert!(!FileFormat::LineKv(Separator::Equals).can_create());
        assert!(!FileFormat::ConfAppend(Separator::Whitespace).can_create());
    }
}
