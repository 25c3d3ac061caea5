//! Hook eligibility resolution
//!
//! Splits registered hooks into the untagged ones, which always run, and the
//! tagged ones whose filter accepts the current context. Tagged hooks that do
//! not match are dropped entirely.

use super::types::{ExecutionContext, HookDescriptor};

/// Eligible hooks for one execution context, each group in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Tagged hooks whose filter matched
    pub filtered: Vec<&'a HookDescriptor>,
    /// Hooks without a tag filter
    pub unfiltered: Vec<&'a HookDescriptor>,
}

impl<'a> Resolution<'a> {
    /// Number of eligible hooks
    pub fn len(&self) -> usize {
        self.filtered.len() + self.unfiltered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty() && self.unfiltered.is_empty()
    }

    /// Split into `(filtered, unfiltered)`
    pub fn into_parts(self) -> (Vec<&'a HookDescriptor>, Vec<&'a HookDescriptor>) {
        (self.filtered, self.unfiltered)
    }
}

/// Resolve which hooks are eligible for the given context
pub fn resolve<'a>(hooks: &'a [HookDescriptor], ctx: &ExecutionContext) -> Resolution<'a> {
    let mut resolution = Resolution::default();

    for hook in hooks {
        if hook.is_untagged() {
            resolution.unfiltered.push(hook);
        } else if hook.matches(ctx) {
            tracing::trace!("Hook '{}' matched active tags", hook.identity());
            resolution.filtered.push(hook);
        } else {
            tracing::trace!(
                "Hook '{}' skipped: {} filter not satisfied",
                hook.identity(),
                hook.aggregation()
            );
        }
    }

    resolution
}
