// Hadoop-style property documents:
//
//   <configuration>
//     <property><name>k</name><value>v</value></property>
//   </configuration>

use colored::Colorize;
use std::path::Path;

use xmltree::{Element, EmitterConfig, XMLNode};

use crate::libs::errors::ConfigError;
use crate::libs::mutators::{MutationOptions, UpsertAction};
use crate::libs::write_back;
use crate::log_debug;

const ROOT: &str = "configuration";
const PROPERTY: &str = "property";
const NAME: &str = "name";
const VALUE: &str = "value";
const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A parsed property file. `prolog` is the text in front of the root
/// element (declaration, license comment, stylesheet instruction), kept
/// verbatim so a rewrite does not lose it.
pub(crate) struct PropertyDocument {
    pub prolog: String,
    pub root: Element,
}

impl PropertyDocument {
    fn new() -> Self {
        Self { prolog: String::new(), root: Element::new(ROOT) }
    }
}

fn text_of(element: &Element) -> String {
    element.get_text().map(|t| t.trim().to_string()).unwrap_or_default()
}

fn is_property_named(node: &XMLNode, key: &str) -> bool {
    match node {
        XMLNode::Element(e) if e.name == PROPERTY => e.get_child(NAME).is_some_and(|n| text_of(n) == key),
        _ => false,
    }
}

fn text_element(name: &str, text: &str) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text.to_string()));
    element
}

/// Sets `key` to `value` on the in-memory document. Later `<property>`
/// nodes with the same name are removed so exactly one survives.
pub(crate) fn set_property(root: &mut Element, key: &str, value: &str) -> UpsertAction {
    let positions: Vec<usize> = root
        .children
        .iter()
        .enumerate()
        .filter(|(_, node)| is_property_named(node, key))
        .map(|(idx, _)| idx)
        .collect();

    let Some((&first, duplicates)) = positions.split_first() else {
        let mut property = Element::new(PROPERTY);
        property.children.push(XMLNode::Element(text_element(NAME, key)));
        property.children.push(XMLNode::Element(text_element(VALUE, value)));
        root.children.push(XMLNode::Element(property));
        return UpsertAction::Inserted;
    };

    let mut action = UpsertAction::Unchanged;
    if let Some(XMLNode::Element(property)) = root.children.get_mut(first) {
        match property.get_mut_child(VALUE) {
            Some(current) => {
                if text_of(current) != value {
                    current.children = vec![XMLNode::Text(value.to_string())];
                    action = UpsertAction::Updated;
                }
            }
            None => {
                property.children.push(XMLNode::Element(text_element(VALUE, value)));
                action = UpsertAction::Updated;
            }
        }
    }
    if !duplicates.is_empty() {
        log_debug!("[XmlProperty] Dropping {} duplicate <property> node(s) for '{}'", duplicates.len(), key);
        for &idx in duplicates.iter().rev() {
            root.children.remove(idx);
        }
        action = UpsertAction::Updated;
    }
    action
}

/// Whitespace-only text nodes would fight the emitter's own indentation.
fn drop_blank_text(element: &mut Element) {
    element.children.retain(|node| !matches!(node, XMLNode::Text(t) if t.trim().is_empty()));
    for child in element.children.iter_mut() {
        if let XMLNode::Element(e) = child {
            drop_blank_text(e);
        }
    }
}

/// Splits `text` before the root element's start tag.
fn split_prolog(text: &str) -> (&str, &str) {
    let mut offset = 0;
    loop {
        let rest = &text[offset..];
        let trimmed = rest.trim_start();
        let end = if trimmed.starts_with("<?") {
            trimmed.find("?>").map(|i| i + 2)
        } else if trimmed.starts_with("<!--") {
            trimmed.find("-->").map(|i| i + 3)
        } else if trimmed.starts_with("<!") {
            trimmed.find('>').map(|i| i + 1)
        } else {
            None
        };
        match end {
            Some(end) => offset += rest.len() - trimmed.len() + end,
            None => return text.split_at(offset),
        }
    }
}

pub(crate) fn parse_document(path: &Path, text: &str) -> Result<PropertyDocument, ConfigError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let root = Element::parse(text.as_bytes())
        .map_err(|e| ConfigError::XmlParse { path: path.to_path_buf(), message: e.to_string() })?;
    if root.name != ROOT {
        return Err(ConfigError::XmlRoot { path: path.to_path_buf(), found: root.name });
    }
    let (prolog, _) = split_prolog(text);
    Ok(PropertyDocument { prolog: prolog.trim().to_string(), root })
}

pub(crate) fn render_document(path: &Path, document: &mut PropertyDocument) -> Result<String, ConfigError> {
    drop_blank_text(&mut document.root);
    let emit_err = |message: String| ConfigError::XmlEmit { path: path.to_path_buf(), message };
    let mut buffer = Vec::new();
    let config = EmitterConfig::new().perform_indent(true).write_document_declaration(false);
    document.root.write_with_config(&mut buffer, config).map_err(|e| emit_err(e.to_string()))?;
    let body = String::from_utf8(buffer).map_err(|e| emit_err(e.to_string()))?;

    let declared = document
        .prolog
        .strip_prefix("<?xml")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace));
    let mut rendered = String::with_capacity(document.prolog.len() + body.len() + DECLARATION.len() + 2);
    if !declared {
        rendered.push_str(DECLARATION);
        rendered.push('\n');
    }
    if !document.prolog.is_empty() {
        rendered.push_str(&document.prolog);
        rendered.push('\n');
    }
    rendered.push_str(body.trim_start());
    rendered.push('\n');
    Ok(rendered)
}

/// Updates `<property>` `key` in `path`, or appends it.
///
/// A missing file (and its directory) is created with a fresh
/// `<configuration>` root. Untouched properties keep their order, and
/// whatever precedes the root element is written back unchanged.
pub fn upsert_xml_property(
    path: &Path,
    key: &str,
    value: &str,
    options: &MutationOptions,
) -> Result<UpsertAction, ConfigError> {
    write_back::with_path_lock(path, || {
        let mut document = match write_back::read_text(path) {
            Ok(text) => parse_document(path, &text)?,
            Err(ConfigError::NotFound { .. }) => {
                log_debug!("[XmlProperty] {} does not exist, starting a new document", path.display());
                write_back::ensure_parent_dir(path)?;
                PropertyDocument::new()
            }
            Err(e) => return Err(e),
        };

        let action = set_property(&mut document.root, key, value);
        if action == UpsertAction::Unchanged {
            log_debug!("[XmlProperty] '{}' already set in {}", key, path.display());
            return Ok(action);
        }

        let rendered = render_document(path, &mut document)?;
        write_back::write_text(path, &rendered, options.atomic_writes)?;
        log_debug!(
            "[XmlProperty] {} '{}' in {}",
            action,
            key.bold(),
            path.display().to_string().cyan()
        );
        Ok(action)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn count_named(root: &Element, key: &str) -> usize {
        root.children.iter().filter(|n| is_property_named(n, key)).count()
    }

    fn value_of(root: &Element, key: &str) -> Option<String> {
        root.children.iter().find(|n| is_property_named(n, key)).and_then(|n| match n {
            XMLNode::Element(p) => p.get_child(VALUE).map(text_of),
            _ => None,
        })
    }

    const SITE: &str = r#"<?xml version="1.0"?>
<configuration>
  <property>
    <name>hbase.cluster.distributed</name>
    <value>true</value>
  </property>
  <property>
    <name>hbase.tmp.dir</name>
    <value>/tmp/hbase</value>
  </property>
</configuration>
"#;

    #[test]
    fn creates_then_updates_without_duplicating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf/hbase-site.xml");
        let options = MutationOptions::default();

        let first = upsert_xml_property(&path, "hbase.rootdir", "hdfs://nn:8020/hbase", &options).unwrap();
        assert_eq!(first, UpsertAction::Inserted);
        let root = parse_document(&path, &fs::read_to_string(&path).unwrap()).unwrap().root;
        assert_eq!(count_named(&root, "hbase.rootdir"), 1);

        let second = upsert_xml_property(&path, "hbase.rootdir", "hdfs://nn2:8020/hbase", &options).unwrap();
        assert_eq!(second, UpsertAction::Updated);
        let root = parse_document(&path, &fs::read_to_string(&path).unwrap()).unwrap().root;
        assert_eq!(count_named(&root, "hbase.rootdir"), 1);
        assert_eq!(value_of(&root, "hbase.rootdir").as_deref(), Some("hdfs://nn2:8020/hbase"));
    }

    #[test]
    fn same_value_leaves_the_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hbase-site.xml");
        fs::write(&path, SITE).unwrap();
        let action =
            upsert_xml_property(&path, "hbase.tmp.dir", "/tmp/hbase", &MutationOptions::default()).unwrap();
        assert_eq!(action, UpsertAction::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), SITE);
    }

    #[test]
    fn untouched_properties_keep_their_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hbase-site.xml");
        fs::write(&path, SITE).unwrap();
        upsert_xml_property(&path, "hbase.cluster.distributed", "false", &MutationOptions::default()).unwrap();
        upsert_xml_property(&path, "hbase.rootdir", "file:///data/hbase", &MutationOptions::default()).unwrap();

        let root = parse_document(&path, &fs::read_to_string(&path).unwrap()).unwrap().root;
        let names: Vec<String> = root
            .children
            .iter()
            .filter_map(|n| match n {
                XMLNode::Element(p) => p.get_child(NAME).map(text_of),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["hbase.cluster.distributed", "hbase.tmp.dir", "hbase.rootdir"]);
        assert_eq!(value_of(&root, "hbase.cluster.distributed").as_deref(), Some("false"));
    }

    #[test]
    fn pre_existing_duplicates_collapse_to_one() {
        let mut root = Element::new(ROOT);
        for v in ["1", "2"] {
            let mut property = Element::new(PROPERTY);
            property.children.push(XMLNode::Element(text_element(NAME, "dfs.replication")));
            property.children.push(XMLNode::Element(text_element(VALUE, v)));
            root.children.push(XMLNode::Element(property));
        }
        assert_eq!(count_named(&root, "dfs.replication"), 2);
        assert_eq!(set_property(&mut root, "dfs.replication", "3"), UpsertAction::Updated);
        assert_eq!(count_named(&root, "dfs.replication"), 1);
        assert_eq!(value_of(&root, "dfs.replication").as_deref(), Some("3"));
    }

    #[test]
    fn property_without_value_gets_one() {
        let mut root = Element::new(ROOT);
        let mut property = Element::new(PROPERTY);
        property.children.push(XMLNode::Element(text_element(NAME, "hive.execution.engine")));
        root.children.push(XMLNode::Element(property));
        assert_eq!(set_property(&mut root, "hive.execution.engine", "tez"), UpsertAction::Updated);
        assert_eq!(value_of(&root, "hive.execution.engine").as_deref(), Some("tez"));
    }

    #[test]
    fn parse_and_root_errors() {
        let dir = tempfile::tempdir().unwrap();
        let options = MutationOptions::default();

        let broken = dir.path().join("broken.xml");
        fs::write(&broken, "<configuration><property>").unwrap();
        assert!(matches!(
            upsert_xml_property(&broken, "a", "b", &options),
            Err(ConfigError::XmlParse { .. })
        ));

        let wrong_root = dir.path().join("beans.xml");
        fs::write(&wrong_root, "<beans/>").unwrap();
        assert!(matches!(
            upsert_xml_property(&wrong_root, "a", "b", &options),
            Err(ConfigError::XmlRoot { .. })
        ));
        assert_eq!(fs::read_to_string(&wrong_root).unwrap(), "<beans/>");
    }

    const LICENSED_SITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="configuration.xsl"?>
<!--
  Licensed to the Apache Software Foundation (ASF) under one
  or more contributor license agreements.
-->
<configuration>
  <property>
    <name>fs.defaultFS</name>
    <value>hdfs://nn:8020</value>
  </property>
</configuration>
"#;

    #[test]
    fn prolog_survives_a_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core-site.xml");
        fs::write(&path, LICENSED_SITE).unwrap();

        let action = upsert_xml_property(&path, "fs.defaultFS", "hdfs://nn2:8020", &MutationOptions::default());
        assert_eq!(action.unwrap(), UpsertAction::Updated);
        let text = fs::read_to_string(&path).unwrap();
        let prolog_end = LICENSED_SITE.find("<configuration>").unwrap();
        assert!(text.starts_with(&LICENSED_SITE[..prolog_end]), "{text}");
        assert_eq!(text.matches("<?xml ").count(), 1);

        let document = parse_document(&path, &text).unwrap();
        assert_eq!(value_of(&document.root, "fs.defaultFS").as_deref(), Some("hdfs://nn2:8020"));
    }

    #[test]
    fn comment_without_declaration_gets_one_in_front() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarn-site.xml");
        fs::write(&path, "<!-- site overrides -->\n<configuration/>\n").unwrap();
        upsert_xml_property(&path, "yarn.nodemanager.resource.memory-mb", "8192", &MutationOptions::default())
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(&format!("{DECLARATION}\n<!-- site overrides -->\n<configuration>")), "{text}");
    }

    #[test]
    fn prolog_split() {
        assert_eq!(split_prolog("<configuration/>"), ("", "<configuration/>"));
        assert_eq!(split_prolog("<?xml version=\"1.0\"?>\n<c/>"), ("<?xml version=\"1.0\"?>", "\n<c/>"));
        assert_eq!(split_prolog("<!-- a > b -->\n<!DOCTYPE c>\n<c/>"), ("<!-- a > b -->\n<!DOCTYPE c>", "\n<c/>"));
        assert_eq!(split_prolog("<!-- open"), ("", "<!-- open"));
    }

    #[test]
    fn upsert_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core-site.xml");
        let options = MutationOptions::default();
        upsert_xml_property(&path, "fs.defaultFS", "hdfs://nn:8020", &options).unwrap();
        let once = fs::read_to_string(&path).unwrap();
        assert_eq!(
            upsert_xml_property(&path, "fs.defaultFS", "hdfs://nn:8020", &options).unwrap(),
            UpsertAction::Unchanged
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), once);
    }
}
