//! Hook event types
//!
//! Defines the execution points a hook can be attached to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution points that hooks are registered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookEvent {
    /// Before the whole suite runs
    BeforeSuite,
    /// After the whole suite completes
    AfterSuite,
    /// Before each specification
    BeforeSpec,
    /// After each specification
    AfterSpec,
    /// Before each scenario
    BeforeScenario,
    /// After each scenario
    AfterScenario,
    /// Before each step
    BeforeStep,
    /// After each step
    AfterStep,
}

impl HookEvent {
    /// Key used for this event in hook manifests
    pub fn manifest_key(&self) -> &'static str {
        match self {
            HookEvent::BeforeSuite => "before_suite",
            HookEvent::AfterSuite => "after_suite",
            HookEvent::BeforeSpec => "before_spec",
            HookEvent::AfterSpec => "after_spec",
            HookEvent::BeforeScenario => "before_scenario",
            HookEvent::AfterScenario => "after_scenario",
            HookEvent::BeforeStep => "before_step",
            HookEvent::AfterStep => "after_step",
        }
    }

    /// Get a human-readable description of this event
    pub fn description(&self) -> &'static str {
        match self {
            HookEvent::BeforeSuite => "Before the suite runs",
            HookEvent::AfterSuite => "After the suite completes",
            HookEvent::BeforeSpec => "Before every specification",
            HookEvent::AfterSpec => "After every specification",
            HookEvent::BeforeScenario => "Before every scenario",
            HookEvent::AfterScenario => "After every scenario",
            HookEvent::BeforeStep => "Before every step",
            HookEvent::AfterStep => "After every step",
        }
    }

    /// Whether hooks on this event may declare a tag filter.
    ///
    /// Suite hooks run outside any spec or scenario, so there is no tag
    /// context to filter against.
    pub fn supports_tags(&self) -> bool {
        !matches!(self, HookEvent::BeforeSuite | HookEvent::AfterSuite)
    }

    /// Returns all possible hook events
    pub fn all() -> &'static [HookEvent] {
        &[
            HookEvent::BeforeSuite,
            HookEvent::AfterSuite,
            HookEvent::BeforeSpec,
            HookEvent::AfterSpec,
            HookEvent::BeforeScenario,
            HookEvent::AfterScenario,
            HookEvent::BeforeStep,
            HookEvent::AfterStep,
        ]
    }

    /// Parse an event from its manifest key, display name, or a kebab-case form
    pub fn parse(value: &str) -> Option<HookEvent> {
        let normalized = value.trim().replace('-', "_").to_ascii_lowercase();
        Self::all().iter().copied().find(|event| {
            event.manifest_key() == normalized
                || event.to_string().to_ascii_lowercase() == normalized
        })
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookEvent::BeforeSuite => write!(f, "BeforeSuite"),
            HookEvent::AfterSuite => write!(f, "AfterSuite"),
            HookEvent::BeforeSpec => write!(f, "BeforeSpec"),
            HookEvent::AfterSpec => write!(f, "AfterSpec"),
            HookEvent::BeforeScenario => write!(f, "BeforeScenario"),
            HookEvent::AfterScenario => write!(f, "AfterScenario"),
            HookEvent::BeforeStep => write!(f, "BeforeStep"),
            HookEvent::AfterStep => write!(f, "AfterStep"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_unique_keys() {
        let mut keys: Vec<_> = HookEvent::all().iter().map(|e| e.manifest_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), HookEvent::all().len());
    }

    #[test]
    fn test_supports_tags() {
        assert!(!HookEvent::BeforeSuite.supports_tags());
        assert!(!HookEvent::AfterSuite.supports_tags());
        assert!(HookEvent::BeforeStep.supports_tags());
        assert!(HookEvent::AfterScenario.supports_tags());
    }

    #[test]
    fn test_parse() {
        assert_eq!(HookEvent::parse("before_step"), Some(HookEvent::BeforeStep));
        assert_eq!(HookEvent::parse("before-step"), Some(HookEvent::BeforeStep));
        assert_eq!(HookEvent::parse("AfterSpec"), Some(HookEvent::AfterSpec));
        assert_eq!(HookEvent::parse(" after_suite "), Some(HookEvent::AfterSuite));
        assert_eq!(HookEvent::parse("during_step"), None);
    }

    #[test]
    fn test_serde_uses_manifest_key() {
        let json = serde_json::to_string(&HookEvent::BeforeScenario).unwrap();
        assert_eq!(json, "\"before_scenario\"");
        let event: HookEvent = serde_json::from_str("\"after_step\"").unwrap();
        assert_eq!(event, HookEvent::AfterStep);
    }
}
