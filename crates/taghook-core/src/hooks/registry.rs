//! Hook registry for managing hooks
//!
//! The host fills the registry during discovery, then freezes it. After that
//! point resolution only ever takes read locks, so any number of threads can
//! plan against the same registry.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::events::HookEvent;
use super::types::HookDescriptor;
use crate::config::HooksConfig;
use crate::error::{TaghookError, TaghookResult};

#[derive(Debug, Default)]
struct RegistryState {
    /// Hooks per event, in registration order
    event_hooks: HashMap<HookEvent, Vec<HookDescriptor>>,
    frozen: bool,
}

/// Registry of hook descriptors organized by event
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl HookRegistry {
    /// Create a new empty hook registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook descriptor for an event
    ///
    /// Fails if the registry is frozen, the identity is empty, or a suite
    /// hook declares tags. Duplicate identities are accepted with a warning.
    pub fn register(&self, event: HookEvent, descriptor: HookDescriptor) -> TaghookResult<()> {
        let mut state = self.state.write();

        if state.frozen {
            return Err(TaghookError::registration(
                descriptor.identity(),
                "registry is frozen; hooks must be registered before resolution starts",
            ));
        }

        if descriptor.identity().trim().is_empty() {
            return Err(TaghookError::registration(
                descriptor.identity(),
                "hook identity must not be empty",
            ));
        }

        if !event.supports_tags() && !descriptor.is_untagged() {
            return Err(TaghookError::registration(
                descriptor.identity(),
                format!("{} hooks cannot be filtered by tags", event),
            ));
        }

        let hook_list = state.event_hooks.entry(event).or_default();
        if hook_list
            .iter()
            .any(|existing| existing.identity() == descriptor.identity())
        {
            tracing::warn!(
                "Duplicate {} hook identity '{}'; keeping both, first registered runs first",
                event,
                descriptor.identity()
            );
        }

        tracing::debug!("Registered {} hook: {}", event, descriptor);
        hook_list.push(descriptor);
        Ok(())
    }

    /// Register several descriptors for the same event, stopping at the first error
    pub fn register_all<I>(&self, event: HookEvent, descriptors: I) -> TaghookResult<()>
    where
        I: IntoIterator<Item = HookDescriptor>,
    {
        for descriptor in descriptors {
            self.register(event, descriptor)?;
        }
        Ok(())
    }

    /// Snapshot of the hooks registered for an event, in registration order
    pub fn hooks_for(&self, event: HookEvent) -> Vec<HookDescriptor> {
        self.state
            .read()
            .event_hooks
            .get(&event)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if any hooks are registered for an event
    pub fn has_hooks(&self, event: &HookEvent) -> bool {
        self.state
            .read()
            .event_hooks
            .get(event)
            .is_some_and(|list| !list.is_empty())
    }

    /// List all events with registered hooks, in lifecycle order
    pub fn list_events(&self) -> Vec<HookEvent> {
        let state = self.state.read();
        HookEvent::all()
            .iter()
            .copied()
            .filter(|event| state.event_hooks.get(event).is_some_and(|l| !l.is_empty()))
            .collect()
    }

    /// Get the number of registered hooks across all events
    pub fn count(&self) -> usize {
        self.state.read().event_hooks.values().map(Vec::len).sum()
    }

    /// Remove every hook and lift a previous freeze
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.event_hooks.clear();
        state.frozen = false;
    }

    /// End the registration phase
    pub fn freeze(&self) {
        let mut state = self.state.write();
        if !state.frozen {
            tracing::debug!(
                "Hook registry frozen with {} hooks",
                state.event_hooks.values().map(Vec::len).sum::<usize>()
            );
        }
        state.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.state.read().frozen
    }

    /// Build a frozen registry from a hook manifest
    pub fn from_config(config: &HooksConfig) -> TaghookResult<Self> {
        let registry = Self::new();

        for event in HookEvent::all() {
            for entry in config.entries_for(*event) {
                registry.register(*event, entry.to_descriptor()?)?;
            }
        }

        registry.freeze();
        Ok(registry)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
