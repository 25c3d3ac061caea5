//! Taghook Core Library
//!
//! This crate decides which registered hooks run for a step and in what order,
//! based on the tags of the running specification and scenario. It does not
//! invoke hooks itself; the host's execution pipeline runs the resolved plan.

pub mod config;
pub mod error;
pub mod hooks;

// Re-export commonly used types
pub use config::{HookEntry, HooksConfig, LoggingConfig};
pub use error::{TaghookError, TaghookResult};
pub use hooks::{
    ExecutionContext, HookDescriptor, HookEvent, HookPlanner, HookRegistry, ResolvedPlan,
    TagAggregation,
};
