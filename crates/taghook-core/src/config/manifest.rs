//! Hook manifest types
//!
//! A manifest is the host's decoded view of every hook-bearing method it
//! discovered, grouped by event.

use serde::{Deserialize, Serialize};

use super::logging_config::LoggingConfig;
use crate::error::TaghookResult;
use crate::hooks::{HookDescriptor, HookEvent};

/// One discovered hook as written in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntry {
    /// Fully-qualified identity of the declaring method
    pub identity: String,

    /// Tag filter; absent or null means untagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// "and" / "or", case-insensitive; absent means AND
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_aggregation: Option<String>,
}

impl HookEntry {
    /// Create an untagged entry
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            tags: None,
            tag_aggregation: None,
        }
    }

    /// Decode this entry into an immutable descriptor
    pub fn to_descriptor(&self) -> TaghookResult<HookDescriptor> {
        HookDescriptor::decode(
            self.identity.clone(),
            self.tags.clone(),
            self.tag_aggregation.as_deref(),
        )
    }
}

/// Configuration structure for hooks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Hooks run once before the suite
    #[serde(default)]
    pub before_suite: Vec<HookEntry>,

    /// Hooks run once after the suite
    #[serde(default)]
    pub after_suite: Vec<HookEntry>,

    /// Hooks run before each specification
    #[serde(default)]
    pub before_spec: Vec<HookEntry>,

    /// Hooks run after each specification
    #[serde(default)]
    pub after_spec: Vec<HookEntry>,

    /// Hooks run before each scenario
    #[serde(default)]
    pub before_scenario: Vec<HookEntry>,

    /// Hooks run after each scenario
    #[serde(default)]
    pub after_scenario: Vec<HookEntry>,

    /// Hooks run before each step
    #[serde(default)]
    pub before_step: Vec<HookEntry>,

    /// Hooks run after each step
    #[serde(default)]
    pub after_step: Vec<HookEntry>,

    /// Logging preferences for the host
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HooksConfig {
    /// Entries declared for an event, in manifest order
    pub fn entries_for(&self, event: HookEvent) -> &[HookEntry] {
        match event {
            HookEvent::BeforeSuite => &self.before_suite,
            HookEvent::AfterSuite => &self.after_suite,
            HookEvent::BeforeSpec => &self.before_spec,
            HookEvent::AfterSpec => &self.after_spec,
            HookEvent::BeforeScenario => &self.before_scenario,
            HookEvent::AfterScenario => &self.after_scenario,
            HookEvent::BeforeStep => &self.before_step,
            HookEvent::AfterStep => &self.after_step,
        }
    }

    /// Mutable access to the entries for an event
    pub fn entries_for_mut(&mut self, event: HookEvent) -> &mut Vec<HookEntry> {
        match event {
            HookEvent::BeforeSuite => &mut self.before_suite,
            HookEvent::AfterSuite => &mut self.after_suite,
            HookEvent::BeforeSpec => &mut self.before_spec,
            HookEvent::AfterSpec => &mut self.after_spec,
            HookEvent::BeforeScenario => &mut self.before_scenario,
            HookEvent::AfterScenario => &mut self.after_scenario,
            HookEvent::BeforeStep => &mut self.before_step,
            HookEvent::AfterStep => &mut self.after_step,
        }
    }

    /// Total number of declared hooks
    pub fn hook_count(&self) -> usize {
        HookEvent::all()
            .iter()
            .map(|event| self.entries_for(*event).len())
            .sum()
    }

    /// Check that every entry decodes and registers cleanly
    pub fn validate(&self) -> TaghookResult<()> {
        crate::hooks::HookRegistry::from_config(self).map(|_| ())
    }
}
