// `cluster-agent schema <component>`: prints the schema table in match
// order, with the value rule each key is checked against.

use colored::Colorize;
use prettytable::{Table, format, row};

use cluster_agent::components;
use cluster_agent::libs::validator;
use cluster_agent::schemas::entry::MatchPattern;
use cluster_agent::{Component, ConfigStatus, log_error};

pub fn run(component: Component, file: Option<&str>) -> i32 {
    let profile = components::profile(component);
    if let Some(file) = file {
        if !profile.accepts_file(file) {
            let accepted = profile.files.iter().map(|f| f.name).collect::<Vec<_>>().join(", ");
            log_error!("[Schema] {} does not use '{}' (accepted: {})", component, file.red(), accepted);
            return ConfigStatus::FileNotFound.code();
        }
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![b->"#", b->"Key", b->"Matcher", b->"File", b->"Rule"]);

    for (position, entry) in profile.schema.iter().enumerate() {
        if file.is_some_and(|f| f != entry.target_file) {
            continue;
        }
        // Families have no fixed key to look a rule up by.
        let rule = match entry.pattern {
            MatchPattern::Family(_) => None,
            _ => validator::rule_for(component, entry.canonical_name),
        };
        table.add_row(row![
            position + 1,
            entry.canonical_name,
            entry.matcher_label(),
            entry.target_file,
            rule.map(|r| r.describe()).unwrap_or_else(|| "-".to_string())
        ]);
    }

    table.printstd();
    0
}
