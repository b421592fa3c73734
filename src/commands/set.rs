// `cluster-agent set <component> <name> <value>`: resolves the name,
// validates the value, locates the target file and writes the change.
// With `--dry-run` it stops before the write and reports the plan.

use colored::Colorize;
use serde_json::json;

use cluster_agent::{Component, ConfigStatus, WritePlan, log_info};

use crate::commands::{CommandContext, fail};

fn plan_json(plan: &WritePlan, action: &str) -> serde_json::Value {
    json!({
        "component": plan.component,
        "canonical_name": plan.parameter.canonical_name,
        "value": plan.rendered_value,
        "target_file": plan.parameter.target_file,
        "path": plan.path.display().to_string(),
        "action": action,
    })
}

pub fn run(
    ctx: &CommandContext,
    component: Component,
    name: &str,
    value: &str,
    file: Option<&str>,
    dry_run: bool,
    json: bool,
) -> i32 {
    let dispatcher = ctx.dispatcher();
    let plan = match dispatcher.plan(component, name, value, file) {
        Ok(plan) => plan,
        Err(status) => return fail(&format!("[Set] {component} '{name}':"), status),
    };

    if dry_run {
        if json {
            println!("{:#}", plan_json(&plan, "dry-run"));
        } else {
            log_info!(
                "[Set] Dry run: would set {} = {} in {}",
                plan.parameter.canonical_name.bold(),
                plan.rendered_value,
                plan.path.display().to_string().cyan()
            );
        }
        return ConfigStatus::Success.code();
    }

    match dispatcher.execute(&plan) {
        Ok(action) => {
            if json {
                println!("{:#}", plan_json(&plan, &action.to_string()));
            } else {
                log_info!(
                    "[Set] {} {} = {} in {}",
                    action.to_string().green(),
                    plan.parameter.canonical_name.bold(),
                    plan.rendered_value,
                    plan.path.display().to_string().cyan()
                );
            }
            ConfigStatus::Success.code()
        }
        Err(status) => fail(&format!("[Set] {} in {}:", plan.parameter.canonical_name, plan.path.display()), status.into()),
    }
}
