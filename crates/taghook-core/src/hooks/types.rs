//! Hook type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{TaghookError, TaghookResult};

/// How a hook's declared tags combine against the active tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagAggregation {
    /// Every declared tag must be active
    #[default]
    And,
    /// At least one declared tag must be active
    Or,
}

impl TagAggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagAggregation::And => "AND",
            TagAggregation::Or => "OR",
        }
    }
}

impl fmt::Display for TagAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagAggregation {
    type Err = TaghookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(TagAggregation::And),
            "OR" => Ok(TagAggregation::Or),
            _ => Err(TaghookError::invalid_field(
                "tag_aggregation",
                format!("unknown tag aggregation '{}', expected AND or OR", s.trim()),
            )),
        }
    }
}

/// Decoded metadata for one hook-bearing method.
///
/// Immutable once built: the registry stores descriptors by value and the
/// engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookDescriptor {
    identity: String,
    tags: BTreeSet<String>,
    aggregation: TagAggregation,
}

impl HookDescriptor {
    /// Create an untagged descriptor with AND aggregation
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            tags: BTreeSet::new(),
            aggregation: TagAggregation::default(),
        }
    }

    /// Replace the tag filter; tags are trimmed and blank ones dropped
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    /// Add a single tag to the filter
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.extend(normalize_tags([tag]));
        self
    }

    /// Set the aggregation operator
    pub fn with_aggregation(mut self, aggregation: TagAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Build a descriptor from raw discovery metadata.
    ///
    /// Absent tags become the empty filter; blank tags are dropped. An
    /// aggregation value other than AND/OR fails here so a bad declaration is
    /// reported at registration time instead of during a run.
    pub fn decode(
        identity: impl Into<String>,
        tags: Option<Vec<String>>,
        aggregation: Option<&str>,
    ) -> TaghookResult<Self> {
        let identity = identity.into();

        let aggregation = match aggregation {
            Some(raw) => raw
                .parse::<TagAggregation>()
                .map_err(|e| TaghookError::registration(&identity, e.to_string()))?,
            None => TagAggregation::default(),
        };

        let raw_tags = tags.unwrap_or_default();
        let declared = raw_tags.len();
        let tags = normalize_tags(raw_tags);

        if tags.is_empty() && declared > 0 {
            tracing::warn!(
                "Hook '{}' declared only blank tags; treating it as untagged",
                identity
            );
        }

        Ok(Self {
            identity,
            tags,
            aggregation,
        })
    }

    /// Fully-qualified identity of the declaring method
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Declared tag filter
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn aggregation(&self) -> TagAggregation {
        self.aggregation
    }

    /// Whether the hook runs regardless of context tags
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }

    /// The method's simple name: the last segment of the identity.
    ///
    /// Segments are separated by `::`, `.` or `#`; a trailing parameter list
    /// such as `(java.lang.String)` is ignored.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.identity)
    }

    /// Check whether this hook is eligible for the given context
    pub fn matches(&self, ctx: &ExecutionContext) -> bool {
        super::matcher::matches(&self.tags, self.aggregation, ctx.active_tags())
    }
}

impl fmt::Display for HookDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{} (untagged)", self.identity)
        } else {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            write!(
                f,
                "{} [{}: {}]",
                self.identity,
                self.aggregation,
                tags.join(", ")
            )
        }
    }
}

/// Trim every tag and drop the ones left blank.
///
/// Filters and contexts both pass through here so that a declared `x`
/// always meets an active `" x"`.
fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .map(|tag: String| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub(crate) fn simple_name(identity: &str) -> &str {
    let path = identity.split('(').next().unwrap_or(identity).trim_end();
    let cut = [
        path.rfind("::").map(|i| i + 2),
        path.rfind('.').map(|i| i + 1),
        path.rfind('#').map(|i| i + 1),
    ]
    .into_iter()
    .flatten()
    .max()
    .unwrap_or(0);
    &path[cut..]
}

/// Active tags for one step execution: the union of the running
/// specification's and scenario's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    active_tags: BTreeSet<String>,
}

impl ExecutionContext {
    /// Create a context from an arbitrary tag collection
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_tags: normalize_tags(tags),
        }
    }

    /// Context for a step inside the given spec and scenario
    pub fn for_step<I, J, S, T>(spec_tags: I, scenario_tags: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut active_tags = normalize_tags(spec_tags);
        active_tags.extend(normalize_tags(scenario_tags));
        Self { active_tags }
    }

    /// Context with no active tags, as seen by suite-level hooks
    pub fn for_suite() -> Self {
        Self::default()
    }

    pub fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.active_tags.is_empty()
    }
}
