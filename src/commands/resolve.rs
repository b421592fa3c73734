// `cluster-agent resolve <component> <name>`: shows which canonical key and
// file a raw parameter name maps to.

use colored::Colorize;
use serde_json::json;

use cluster_agent::components;
use cluster_agent::libs::resolver;
use cluster_agent::{Component, ValidationOutcome, log_warn};

use crate::commands::fail;

pub fn run(component: Component, name: &str, file: Option<&str>, json: bool) -> i32 {
    if let Some(file) = file {
        if !components::profile(component).accepts_file(file) {
            log_warn!("[Resolve] {} does not use '{}'; ignoring the file hint", component, file.yellow());
        }
    }

    let result = match file {
        Some(file) => resolver::resolve_in_file(component, name, file),
        None => resolver::resolve(component, name),
    };

    match result {
        Ok(resolved) => {
            if json {
                let out = json!({
                    "component": component,
                    "name": name,
                    "canonical_name": resolved.canonical_name,
                    "target_file": resolved.target_file,
                });
                println!("{out:#}");
            } else {
                println!("{} -> {} ({})", name, resolved.canonical_name.green(), resolved.target_file.cyan());
            }
            0
        }
        Err(e) => {
            let outcome = ValidationOutcome::from(e);
            if json {
                let out = json!({
                    "component": component,
                    "name": name,
                    "outcome": outcome,
                    "code": outcome.code(),
                });
                println!("{out:#}");
                outcome.code()
            } else {
                fail(&format!("[Resolve] {component} '{name}':"), outcome.into())
            }
        }
    }
}
