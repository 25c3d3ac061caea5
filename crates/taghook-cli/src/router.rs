//! Command routing logic for CLI

use anyhow::{Context, Result};
use std::path::Path;
use taghook_core::config::{HooksConfig, effective_logging, finish_load, read_manifest};
use taghook_core::{HookPlanner, HookRegistry};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use crate::logging::init_logging;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> Result<()> {
    let console = CliConsole::new(cli.verbose);
    let env = |key: &str| std::env::var(key).ok();

    match cli.command {
        Commands::Plan {
            manifest,
            event,
            spec_tags,
            scenario_tags,
            json,
        } => {
            let config = load_manifest(&manifest, cli.verbose, env)?;
            let planner = HookPlanner::new(build_registry(&config, &manifest)?);
            commands::plan::show_plan(&planner, event, &spec_tags, &scenario_tags, json, &console)
        }
        Commands::List { manifest } => {
            let config = load_manifest(&manifest, cli.verbose, env)?;
            let registry = build_registry(&config, &manifest)?;
            commands::list::show_hooks(&registry, &console)
        }
        Commands::Validate { manifest } => {
            let config = load_manifest(&manifest, cli.verbose, env)?;
            commands::validate::validate_manifest(&config, &manifest, &console)
        }
    }
}

/// Read the manifest, start logging from its settings, then finish loading.
///
/// The subscriber must exist before `finish_load` so the load report and the
/// `TAGHOOK_LOG` override are not lost.
fn load_manifest<F>(manifest: &Path, verbose: bool, lookup: F) -> Result<HooksConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = read_manifest(manifest)
        .with_context(|| format!("Failed to load manifest '{}'", manifest.display()))?;
    init_logging(&effective_logging(&config, &lookup), verbose);
    Ok(finish_load(config, manifest, lookup))
}

/// Build a frozen registry from a loaded manifest
fn build_registry(config: &HooksConfig, manifest: &Path) -> Result<HookRegistry> {
    let registry = HookRegistry::from_config(config)
        .with_context(|| format!("Invalid hook declaration in '{}'", manifest.display()))?;
    tracing::debug!(
        "Registry ready: {} hooks across {} events",
        registry.count(),
        registry.list_events().len()
    );
    Ok(registry)
}
