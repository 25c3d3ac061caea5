//! Tag matching for hooks
//!
//! Decides whether a hook's declared tag filter is satisfied by the tags of
//! the running specification and scenario.

use std::collections::BTreeSet;

use super::types::TagAggregation;

/// Match a tag filter against the active tags
///
/// # Rules
///
/// - Empty filter: always matches, whatever the aggregation
/// - `And`: every filter tag must be active
/// - `Or`: at least one filter tag must be active
///
/// Tags compare case-sensitively.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use taghook_core::hooks::{matches, TagAggregation};
///
/// let set = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>();
///
/// // Untagged hooks always run
/// assert!(matches(&set(&[]), TagAggregation::And, &set(&[])));
///
/// // AND needs every tag
/// assert!(matches(&set(&["x", "y"]), TagAggregation::And, &set(&["x", "y", "z"])));
/// assert!(!matches(&set(&["x", "y"]), TagAggregation::And, &set(&["x"])));
///
/// // OR needs any tag
/// assert!(matches(&set(&["x", "y"]), TagAggregation::Or, &set(&["x"])));
/// assert!(!matches(&set(&["x", "y"]), TagAggregation::Or, &set(&["z"])));
/// ```
pub fn matches(
    filter: &BTreeSet<String>,
    aggregation: TagAggregation,
    active: &BTreeSet<String>,
) -> bool {
    if filter.is_empty() {
        return true;
    }

    match aggregation {
        TagAggregation::And => filter.is_subset(active),
        TagAggregation::Or => !filter.is_disjoint(active),
    }
}

/// A reusable tag filter with its aggregation operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMatcher {
    filter: BTreeSet<String>,
    aggregation: TagAggregation,
}

impl TagMatcher {
    /// Create a new tag matcher
    pub fn new<I, S>(filter: I, aggregation: TagAggregation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: filter.into_iter().map(Into::into).collect(),
            aggregation,
        }
    }

    /// Check if this matcher accepts the given active tags
    pub fn matches(&self, active: &BTreeSet<String>) -> bool {
        matches(&self.filter, self.aggregation, active)
    }

    pub fn filter(&self) -> &BTreeSet<String> {
        &self.filter
    }

    pub fn aggregation(&self) -> TagAggregation {
        self.aggregation
    }

    /// Check if this matcher accepts everything
    pub fn is_unconditional(&self) -> bool {
        self.filter.is_empty()
    }
}
