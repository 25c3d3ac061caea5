//! Manifest to plan integration test
//!
//! Loads hook manifests from disk and checks the plans a runner would get.

use pretty_assertions::assert_eq;
use std::fs;
use taghook::config::load_from_file;
use taghook::hooks::HookGroup;
use taghook::{ExecutionContext, HookEvent, HookPlanner, HookRegistry, TaghookError};
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_toml_manifest_plan() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "hooks.toml",
        r#"
[[before_step]]
identity = "com.shop.StepHooks.zeta"

[[before_step]]
identity = "com.shop.StepHooks.alpha"

[[before_step]]
identity = "com.shop.StepHooks.beta"
tags = ["x"]
tag_aggregation = "AND"

[[before_step]]
identity = "com.shop.StepHooks.delta"
tags = ["y"]
tag_aggregation = "OR"
"#,
    );

    let config = load_from_file(&path).unwrap();
    let planner = HookPlanner::new(HookRegistry::from_config(&config).unwrap());
    let plan = planner.plan(
        HookEvent::BeforeStep,
        &ExecutionContext::for_step(["x"], Vec::<String>::new()),
    );

    assert_eq!(plan.simple_names(), vec!["alpha", "zeta", "beta"]);
    let groups: Vec<HookGroup> = plan.entries().iter().map(|e| e.group).collect();
    assert_eq!(
        groups,
        vec![HookGroup::Global, HookGroup::Global, HookGroup::Tagged]
    );
}

#[test]
fn test_json_manifest_with_null_tags() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "hooks.json",
        r#"{
            "after_step": [
                {"identity": "Hooks.capture", "tags": null, "tag_aggregation": "or"},
                {"identity": "Hooks.audit", "tags": ["compliance"]}
            ]
        }"#,
    );

    let config = load_from_file(&path).unwrap();
    let planner = HookPlanner::new(HookRegistry::from_config(&config).unwrap());
    let plan = planner.plan(HookEvent::AfterStep, &ExecutionContext::for_suite());

    assert_eq!(plan.identities().collect::<Vec<_>>(), vec!["Hooks.capture"]);
}

#[test]
fn test_bad_aggregation_fails_at_load_not_plan() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "hooks.yaml",
        "before_scenario:\n  - identity: Hooks.seed\n    tags: [db]\n    tag_aggregation: ANY\n",
    );

    let config = load_from_file(&path).unwrap();
    let err = HookRegistry::from_config(&config).unwrap_err();
    assert!(err.is_config_error());
    assert!(matches!(err, TaghookError::Registration { .. }));
}

#[test]
fn test_plan_serializes_for_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "hooks.json",
        r#"{"before_spec": [{"identity": "Hooks.open"}]}"#,
    );

    let config = load_from_file(&path).unwrap();
    let planner = HookPlanner::new(HookRegistry::from_config(&config).unwrap());
    let plan = planner.plan(HookEvent::BeforeSpec, &ExecutionContext::new(["any"]));

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "entries": [
                {"identity": "Hooks.open", "simple_name": "open", "group": "global"}
            ]
        })
    );
}
