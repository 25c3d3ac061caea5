//! Plan command implementation

use anyhow::Result;
use serde_json::json;
use taghook_core::{ExecutionContext, HookEvent, HookPlanner, ResolvedPlan};

use crate::console::CliConsole;

/// Resolve and print the run order for one event
pub fn show_plan(
    planner: &HookPlanner,
    event: HookEvent,
    spec_tags: &[String],
    scenario_tags: &[String],
    as_json: bool,
    console: &CliConsole,
) -> Result<()> {
    let ctx = ExecutionContext::for_step(spec_tags.iter().cloned(), scenario_tags.iter().cloned());
    let plan = planner.plan(event, &ctx);

    if as_json {
        println!("{}", render_json(event, &ctx, &plan)?);
        return Ok(());
    }

    console.print_header(&format!("{} plan", event));
    let active: Vec<&str> = ctx.active_tags().iter().map(String::as_str).collect();
    if active.is_empty() {
        console.info("Active tags: (none)");
    } else {
        console.info(&format!("Active tags: {}", active.join(", ")));
    }

    if plan.is_empty() {
        console.warn("No hooks are eligible for this context");
        return Ok(());
    }

    for (i, entry) in plan.entries().iter().enumerate() {
        console.print_plan_entry(
            i + 1,
            &entry.simple_name,
            &entry.identity,
            &entry.group.to_string(),
        );
    }

    Ok(())
}

/// JSON document handed to an execution pipeline
pub fn render_json(
    event: HookEvent,
    ctx: &ExecutionContext,
    plan: &ResolvedPlan,
) -> Result<String> {
    let document = json!({
        "event": event,
        "active_tags": ctx.active_tags(),
        "hooks": plan.entries(),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
