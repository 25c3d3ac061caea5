//! Integration tests for hook resolution and ordering
//!
//! Exercises the registry, resolver, orderer and planner together the way a
//! test runner drives them for each step.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use taghook_core::hooks::{
    ExecutionContext, HookDescriptor, HookEvent, HookGroup, HookPlanner, HookRegistry,
    TagAggregation, order, resolve,
};

fn planner_with(event: HookEvent, hooks: Vec<HookDescriptor>) -> HookPlanner {
    let registry = HookRegistry::new();
    registry.register_all(event, hooks).unwrap();
    HookPlanner::new(registry)
}

#[test]
fn test_untagged_group_runs_before_tagged_group() {
    let planner = planner_with(
        HookEvent::BeforeStep,
        vec![
            HookDescriptor::new("zeta"),
            HookDescriptor::new("alpha"),
            HookDescriptor::new("beta")
                .with_tag("x")
                .with_aggregation(TagAggregation::And),
        ],
    );

    let plan = planner.plan(HookEvent::BeforeStep, &ExecutionContext::new(["x"]));
    let ids: Vec<&str> = plan.identities().collect();
    assert_eq!(ids, vec!["alpha", "zeta", "beta"]);
}

#[test]
fn test_non_matching_or_hook_is_excluded() {
    let planner = planner_with(
        HookEvent::BeforeStep,
        vec![
            HookDescriptor::new("gamma")
                .with_tag("x")
                .with_aggregation(TagAggregation::Or),
            HookDescriptor::new("delta")
                .with_tag("y")
                .with_aggregation(TagAggregation::Or),
        ],
    );

    let plan = planner.plan(HookEvent::BeforeStep, &ExecutionContext::new(["x"]));
    let ids: Vec<&str> = plan.identities().collect();
    assert_eq!(ids, vec!["gamma"]);
}

#[test]
fn test_and_versus_or_on_partial_match() {
    let ctx = ExecutionContext::new(["x"]);

    let and_plan = planner_with(
        HookEvent::BeforeStep,
        vec![HookDescriptor::new("both").with_tags(["x", "y"])],
    )
    .plan(HookEvent::BeforeStep, &ctx);
    assert!(and_plan.is_empty());

    let or_plan = planner_with(
        HookEvent::BeforeStep,
        vec![
            HookDescriptor::new("both")
                .with_tags(["x", "y"])
                .with_aggregation(TagAggregation::Or),
        ],
    )
    .plan(HookEvent::BeforeStep, &ctx);
    assert_eq!(or_plan.len(), 1);
    assert_eq!(or_plan.entries()[0].group, HookGroup::Tagged);
}

#[test]
fn test_spec_and_scenario_tags_combine() {
    let planner = planner_with(
        HookEvent::AfterStep,
        vec![HookDescriptor::new("Hooks.checkout_cleanup").with_tags(["checkout", "db"])],
    );

    let only_spec = ExecutionContext::for_step(["checkout"], ["ui"]);
    assert!(planner.plan(HookEvent::AfterStep, &only_spec).is_empty());

    let both = ExecutionContext::for_step(["checkout"], ["db"]);
    assert_eq!(planner.plan(HookEvent::AfterStep, &both).len(), 1);
}

#[test]
fn test_manual_pipeline_matches_planner() {
    let hooks = vec![
        HookDescriptor::new("com.example.Hooks.takeScreenshot").with_tag("ui"),
        HookDescriptor::new("com.example.Hooks.resetDb"),
        HookDescriptor::new("com.example.Db.openConnection"),
        HookDescriptor::new("com.example.Hooks.login")
            .with_tags(["ui", "auth"])
            .with_aggregation(TagAggregation::Or),
    ];
    let ctx = ExecutionContext::new(["ui"]);

    let resolution = resolve(&hooks, &ctx);
    let manual = order(&resolution.unfiltered, &resolution.filtered);

    let planned = planner_with(HookEvent::BeforeScenario, hooks.clone())
        .plan(HookEvent::BeforeScenario, &ctx);

    assert_eq!(manual, planned);
    assert_eq!(
        planned.simple_names(),
        vec!["openConnection", "resetDb", "login", "takeScreenshot"]
    );
}

#[test]
fn test_repeated_planning_is_stable() {
    let planner = planner_with(
        HookEvent::BeforeStep,
        vec![
            HookDescriptor::new("c").with_tag("t"),
            HookDescriptor::new("b"),
            HookDescriptor::new("a").with_tag("t"),
            HookDescriptor::new("d"),
        ],
    );
    let ctx = ExecutionContext::new(["t"]);

    let first = planner.plan(HookEvent::BeforeStep, &ctx);
    for _ in 0..10 {
        assert_eq!(planner.plan(HookEvent::BeforeStep, &ctx), first);
    }
}

#[test]
fn test_concurrent_planning_against_shared_registry() {
    let registry = HookRegistry::new();
    for i in 0..50 {
        let hook = HookDescriptor::new(format!("Hooks.h{i:02}"));
        let hook = if i % 2 == 0 { hook.with_tag("even") } else { hook };
        registry.register(HookEvent::BeforeStep, hook).unwrap();
    }
    let planner = Arc::new(HookPlanner::new(registry));
    let expected = planner.plan(HookEvent::BeforeStep, &ExecutionContext::new(["even"]));
    assert_eq!(expected.len(), 50);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let planner = Arc::clone(&planner);
            thread::spawn(move || {
                (0..25)
                    .map(|_| planner.plan(HookEvent::BeforeStep, &ExecutionContext::new(["even"])))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for plan in handle.join().unwrap() {
            assert_eq!(plan, expected);
        }
    }
}
