//! Resolved hook plans

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ordering group a planned hook came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookGroup {
    /// Untagged hooks, run first
    Global,
    /// Tag-filtered hooks that matched the context
    Tagged,
}

impl fmt::Display for HookGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookGroup::Global => write!(f, "global"),
            HookGroup::Tagged => write!(f, "tagged"),
        }
    }
}

/// One hook in a resolved plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub identity: String,
    pub simple_name: String,
    pub group: HookGroup,
}

/// Ordered hooks to run for one execution context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlan {
    entries: Vec<PlanEntry>,
}

impl ResolvedPlan {
    pub(crate) fn from_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Hook identities in run order
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.identity.as_str())
    }

    /// Simple method names in run order
    pub fn simple_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.simple_name.as_str()).collect()
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ResolvedPlan {
    type Item = PlanEntry;
    type IntoIter = std::vec::IntoIter<PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for ResolvedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.identities().collect();
        write!(f, "[{}]", names.join(", "))
    }
}
