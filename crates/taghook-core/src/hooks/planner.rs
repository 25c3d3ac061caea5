//! Hook planning
//!
//! Runs resolution and ordering against a frozen registry.

use super::events::HookEvent;
use super::orderer::order;
use super::plan::ResolvedPlan;
use super::registry::HookRegistry;
use super::resolver::resolve;
use super::types::ExecutionContext;

/// Before and after plans for a single step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepPlan {
    pub before: ResolvedPlan,
    pub after: ResolvedPlan,
}

/// Produces hook run orders from a registry
#[derive(Debug, Clone)]
pub struct HookPlanner {
    registry: HookRegistry,
}

impl HookPlanner {
    /// Create a planner, ending the registry's registration phase
    pub fn new(registry: HookRegistry) -> Self {
        registry.freeze();
        Self { registry }
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Resolve and order the hooks for an event in the given context
    pub fn plan(&self, event: HookEvent, ctx: &ExecutionContext) -> ResolvedPlan {
        let hooks = self.registry.hooks_for(event);
        let resolution = resolve(&hooks, ctx);
        let plan = order(&resolution.unfiltered, &resolution.filtered);

        tracing::debug!(
            "{} plan: {} registered, {} untagged, {} tagged matched, {} skipped",
            event,
            hooks.len(),
            resolution.unfiltered.len(),
            resolution.filtered.len(),
            hooks.len() - resolution.len()
        );

        plan
    }

    /// Plans for the hooks around one step
    pub fn plan_step(&self, ctx: &ExecutionContext) -> StepPlan {
        StepPlan {
            before: self.plan(HookEvent::BeforeStep, ctx),
            after: self.plan(HookEvent::AfterStep, ctx),
        }
    }
}
