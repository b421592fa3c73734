// Line-oriented `key<sep>value` files: Kafka .properties, zoo.cfg,
// storm.yaml, flink-conf.yaml.
//
// Only the matched line is touched; every other line, its terminator
// included, is carried over byte for byte.

use colored::Colorize;
use std::path::Path;

use crate::libs::errors::ConfigError;
use crate::libs::mutators::{MutationOptions, UpsertAction};
use crate::libs::write_back;
use crate::log_debug;
use crate::schemas::agent_config::DuplicateKeyPolicy;
use crate::schemas::file_format::Separator;

/// Result of rewriting a document in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub content: String,
    pub action: UpsertAction,
}

/// True when `line` is an active (non-blank, non-comment) entry for `key`.
///
/// YAML-style files only match top-level keys: indented lines belong to a
/// nested mapping or a block sequence.
pub fn is_entry_for(line: &str, key: &str, separator: Separator) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(separator.comment_prefixes()) {
        return false;
    }
    if separator == Separator::Colon && line.starts_with(char::is_whitespace) {
        return false;
    }
    separator.split_key(line).is_some_and(|(found, _)| found == key)
}

fn terminator_of(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

/// Upserts `key<sep>value` into `content`.
///
/// Returns the number of active entries for `key` as the error when the
/// policy is [`DuplicateKeyPolicy::Reject`] and there is more than one.
pub fn apply(
    content: &str,
    key: &str,
    value: &str,
    separator: Separator,
    policy: DuplicateKeyPolicy,
) -> Result<LineEdit, usize> {
    let entry = format!("{key}{}{value}", separator.as_str());
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let matches: Vec<usize> =
        lines.iter().enumerate().filter(|(_, l)| is_entry_for(l, key, separator)).map(|(i, _)| i).collect();

    if policy == DuplicateKeyPolicy::Reject && matches.len() > 1 {
        return Err(matches.len());
    }

    let Some(&first) = matches.first() else {
        let mut out = String::with_capacity(content.len() + entry.len() + 2);
        out.push_str(content);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&entry);
        out.push('\n');
        return Ok(LineEdit { content: out, action: UpsertAction::Inserted });
    };

    let mut out = String::with_capacity(content.len() + entry.len());
    for (idx, line) in lines.iter().enumerate() {
        if idx == first {
            out.push_str(&entry);
            out.push_str(terminator_of(line));
        } else if policy == DuplicateKeyPolicy::Collapse && matches.contains(&idx) {
            continue;
        } else {
            out.push_str(line);
        }
    }
    let action = if out == content { UpsertAction::Unchanged } else { UpsertAction::Updated };
    Ok(LineEdit { content: out, action })
}

fn is_number(item: &str) -> bool {
    item.parse::<i64>().is_ok() || item.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Renders a comma-separated value as a YAML flow sequence:
/// `zk1, zk2` becomes `["zk1", "zk2"]`, numbers stay bare. A value that is
/// already bracketed is returned as is.
pub fn render_yaml_list(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return trimmed.to_string();
    }
    let items: Vec<String> = trimmed
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|item| !item.is_empty())
        .map(|item| {
            if is_number(item) {
                item.to_string()
            } else {
                format!("\"{}\"", item.replace('\\', "\\\\").replace('"', "\\\""))
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// True when `value` written bare would not load back as the same scalar:
/// comments, `key: value` shapes, indicator characters in front.
fn needs_quotes(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    let second = chars.next();
    if "#&*!|>'\"%@`{}[],".contains(first) {
        return true;
    }
    if "-?:".contains(first) && second.is_none_or(char::is_whitespace) {
        return true;
    }
    if value.contains(" #") || value.contains("\t#") || value.contains(": ") || value.contains(":\t") {
        return true;
    }
    if value.ends_with(':') || value.chars().any(char::is_control) {
        return true;
    }
    match serde_yaml::from_str::<serde_yaml::Value>(value) {
        Ok(serde_yaml::Value::String(s)) => s != value,
        Ok(_) => false,
        Err(_) => true,
    }
}

/// Renders a single YAML value. Plain scalars stay bare; anything a YAML
/// loader would truncate or reinterpret (`/var/storm #primary`, `a: b`,
/// `*ref`) is double-quoted. Values already quoted or written as a flow
/// collection are kept as is.
pub fn render_yaml_scalar(value: &str) -> String {
    let trimmed = value.trim();
    let wrapped = |open: char, close: char| trimmed.len() >= 2 && trimmed.starts_with(open) && trimmed.ends_with(close);
    if wrapped('"', '"') || wrapped('\'', '\'') || wrapped('[', ']') || wrapped('{', '}') {
        return trimmed.to_string();
    }
    if needs_quotes(trimmed) { double_quoted(trimmed) } else { trimmed.to_string() }
}

/// What a loader should see for `value` once it is written after `key: `.
///
/// Bare text means itself in full: a plain scalar that parses shorter
/// (a trailing comment, an anchor) is expected as the whole string.
fn intended_yaml(value: &str) -> Option<serde_yaml::Value> {
    let value = value.trim();
    let plain = !value.starts_with(['"', '\'', '[', '{']);
    if plain && (value.contains(" #") || value.contains("\t#")) {
        return Some(serde_yaml::Value::String(value.to_string()));
    }
    match serde_yaml::from_str::<serde_yaml::Value>(value).ok()? {
        serde_yaml::Value::String(_) if plain => Some(serde_yaml::Value::String(value.to_string())),
        parsed => Some(parsed),
    }
}

/// YAML-style files must stay loadable after the edit, and `key` must read
/// back as the value that was written.
fn check_yaml(path: &Path, before: &str, after: &str, key: &str, value: &str) -> Result<(), ConfigError> {
    if serde_yaml::from_str::<serde_yaml::Value>(before).is_err() {
        log_debug!("[LineKv] {} did not parse as YAML before the edit, skipping the check", path.display());
        return Ok(());
    }
    let document = serde_yaml::from_str::<serde_yaml::Value>(after)
        .map_err(|source| ConfigError::YamlBroken { path: path.to_path_buf(), source })?;
    let stored = document.get(key);
    if stored.is_none() || stored != intended_yaml(value).as_ref() {
        log_debug!("[LineKv] '{}' in {} reads back as {:?}", key, path.display(), stored);
        return Err(ConfigError::YamlReadBack { path: path.to_path_buf(), key: key.to_string() });
    }
    Ok(())
}

/// Replaces the line for `key` in `path`, or appends one.
///
/// The file must already exist. Comment and blank lines are never altered.
pub fn upsert_line_kv(
    path: &Path,
    key: &str,
    value: &str,
    separator: Separator,
    options: &MutationOptions,
) -> Result<UpsertAction, ConfigError> {
    write_back::with_path_lock(path, || {
        let content = write_back::read_text(path)?;
        let edit = apply(&content, key, value, separator, options.duplicate_keys).map_err(|count| {
            ConfigError::DuplicateKey { path: path.to_path_buf(), key: key.to_string(), count }
        })?;
        if edit.action == UpsertAction::Unchanged {
            log_debug!("[LineKv] '{}' already set in {}", key, path.display());
            return Ok(edit.action);
        }
        if separator == Separator::Colon {
            check_yaml(path, &content, &edit.content, key, value)?;
        }
        write_back::write_text(path, &edit.content, options.atomic_writes)?;
        log_debug!(
            "[LineKv] {} '{}' in {}",
            edit.action,
            key.bold(),
            path.display().to_string().cyan()
        );
        Ok(edit.action)
    })
}
