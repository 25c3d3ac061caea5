//! Execution ordering for eligible hooks
//!
//! Untagged hooks run before tagged ones. Within each group hooks are sorted
//! by simple method name, byte-wise and case-sensitive. The sort is stable, so
//! hooks sharing a name keep registry order.

use super::plan::{HookGroup, PlanEntry, ResolvedPlan};
use super::types::HookDescriptor;

/// Produce the run order for already-resolved hooks
pub fn order(unfiltered: &[&HookDescriptor], filtered: &[&HookDescriptor]) -> ResolvedPlan {
    let mut entries = Vec::with_capacity(unfiltered.len() + filtered.len());
    entries.extend(sorted_group(unfiltered, HookGroup::Global));
    entries.extend(sorted_group(filtered, HookGroup::Tagged));
    ResolvedPlan::from_entries(entries)
}

fn sorted_group(hooks: &[&HookDescriptor], group: HookGroup) -> Vec<PlanEntry> {
    let mut sorted = hooks.to_vec();
    sorted.sort_by(|a, b| a.simple_name().cmp(b.simple_name()));

    sorted
        .into_iter()
        .map(|hook| PlanEntry {
            identity: hook.identity().to_string(),
            simple_name: hook.simple_name().to_string(),
            group,
        })
        .collect()
}
