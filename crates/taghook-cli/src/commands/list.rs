//! List command implementation

use anyhow::Result;
use taghook_core::HookRegistry;

use crate::console::CliConsole;

/// Show registered hooks per event, in registration order
pub fn show_hooks(registry: &HookRegistry, console: &CliConsole) -> Result<()> {
    let events = registry.list_events();
    if events.is_empty() {
        console.warn("No hooks registered");
        return Ok(());
    }

    for event in events {
        let hooks = registry.hooks_for(event);
        console.print_header(&format!("{} ({})", event, hooks.len()));
        console.info(event.description());
        for hook in &hooks {
            console.print_item(&hook.to_string());
        }
    }

    println!();
    console.success(&format!("{} hooks registered", registry.count()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taghook_core::{HookDescriptor, HookEvent, TagAggregation};

    #[test]
    fn test_show_hooks_empty_registry() {
        let registry = HookRegistry::new();
        assert!(show_hooks(&registry, &CliConsole::new(false)).is_ok());
    }

    #[test]
    fn test_show_hooks() {
        let registry = HookRegistry::new();
        registry
            .register(HookEvent::BeforeSuite, HookDescriptor::new("Hooks.boot"))
            .unwrap();
        registry
            .register(
                HookEvent::AfterScenario,
                HookDescriptor::new("Hooks.screenshot")
                    .with_tags(["ui", "flaky"])
                    .with_aggregation(TagAggregation::Or),
            )
            .unwrap();
        registry.freeze();

        assert!(show_hooks(&registry, &CliConsole::new(true)).is_ok());
        assert_eq!(registry.count(), 2);
    }
}
