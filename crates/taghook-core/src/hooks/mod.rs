//! Hook resolution for taghook
//!
//! Hooks are registered per event with an optional tag filter and an AND/OR
//! aggregation operator. For every execution context the engine decides which
//! hooks are eligible and in what order they run:
//!
//! 1. untagged hooks, alphabetically by method name
//! 2. tagged hooks whose filter matches, alphabetically by method name
//!
//! # Examples
//!
//! ```rust
//! use taghook_core::hooks::{
//!     ExecutionContext, HookDescriptor, HookEvent, HookPlanner, HookRegistry, TagAggregation,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = HookRegistry::new();
//! registry.register(HookEvent::BeforeStep, HookDescriptor::new("com.example.Hooks.zeta"))?;
//! registry.register(HookEvent::BeforeStep, HookDescriptor::new("com.example.Hooks.alpha"))?;
//! registry.register(
//!     HookEvent::BeforeStep,
//!     HookDescriptor::new("com.example.Hooks.beta")
//!         .with_tag("x")
//!         .with_aggregation(TagAggregation::And),
//! )?;
//!
//! let planner = HookPlanner::new(registry);
//! let ctx = ExecutionContext::for_step(["x"], Vec::<String>::new());
//! let plan = planner.plan(HookEvent::BeforeStep, &ctx);
//!
//! assert_eq!(plan.simple_names(), ["alpha", "zeta", "beta"]);
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod matcher;
pub mod orderer;
pub mod plan;
pub mod planner;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export main types
pub use events::HookEvent;
pub use matcher::{TagMatcher, matches};
pub use orderer::order;
pub use plan::{HookGroup, PlanEntry, ResolvedPlan};
pub use planner::{HookPlanner, StepPlan};
pub use registry::HookRegistry;
pub use resolver::{Resolution, resolve};
pub use types::{ExecutionContext, HookDescriptor, TagAggregation};
