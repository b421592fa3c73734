// `cluster-agent validate <component> <name> <value>`: runs resolution and
// validation only. Nothing is read from or written to disk.

use colored::Colorize;
use serde_json::json;

use cluster_agent::libs::{resolver, validator};
use cluster_agent::{Component, ValidationOutcome};

use crate::commands::fail;

pub fn run(component: Component, name: &str, value: &str, json: bool) -> i32 {
    let (canonical, outcome) = match resolver::resolve(component, name) {
        Ok(resolved) => {
            let outcome = validator::validate_value(component, &resolved.canonical_name, value);
            (Some(resolved.canonical_name), outcome)
        }
        Err(e) => (None, ValidationOutcome::from(e)),
    };
    let rule = canonical
        .as_deref()
        .and_then(|key| validator::rule_for(component, key))
        .map(|rule| rule.describe());

    if json {
        let out = json!({
            "component": component,
            "name": name,
            "canonical_name": canonical,
            "value": value,
            "rule": rule,
            "outcome": outcome,
            "code": outcome.code(),
        });
        println!("{out:#}");
        return outcome.code();
    }

    let key = canonical.as_deref().unwrap_or(name);
    if outcome.is_ok() {
        let rule = rule.unwrap_or_else(|| "no rule".to_string());
        println!("{} = {}: {} [{}]", key, value, outcome.to_string().green(), rule.dimmed());
        0
    } else {
        let context = match rule {
            Some(rule) => format!("[Validate] {key} = '{value}' (expects {rule}):"),
            None => format!("[Validate] {key} = '{value}':"),
        };
        fail(&context, outcome.into())
    }
}
