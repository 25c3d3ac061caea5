//! File-based manifest loading
//!
//! Loading happens in two steps: [`read_manifest`] reads and parses the file
//! without logging, and [`finish_load`] reports it and applies environment
//! overrides. A host that configures its subscriber from the manifest can
//! install it between the two.

use std::fs;
use std::path::Path;

use super::logging_config::LoggingConfig;
use super::manifest::HooksConfig;
use crate::error::{TaghookError, TaghookResult};

/// Environment variable that overrides `logging.level`
pub const LOG_LEVEL_ENV: &str = "TAGHOOK_LOG";

/// Load a hook manifest from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension; anything
/// else is read as JSON. Unlike general settings a manifest is required, so
/// a missing file is an error.
pub fn load_from_file(path: &Path) -> TaghookResult<HooksConfig> {
    let config = read_manifest(path)?;
    log_loaded(&config, path);
    Ok(config)
}

/// Load a manifest and apply environment overrides
pub fn load_with_env(path: &Path) -> TaghookResult<HooksConfig> {
    let config = read_manifest(path)?;
    Ok(finish_load(config, path, |key| std::env::var(key).ok()))
}

/// Read and parse a manifest without emitting any log events
pub fn read_manifest(path: &Path) -> TaghookResult<HooksConfig> {
    if !path.exists() {
        return Err(TaghookError::config_with_context(
            "Hook manifest not found",
            format!("Looking for '{}'", path.display()),
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TaghookError::io_at(
            format!("Failed to read hook manifest: {}", e),
            path.display().to_string(),
        )
    })?;

    parse_manifest(&content, path)
}

/// Report a manifest returned by [`read_manifest`] and apply overrides to it
pub fn finish_load<F>(mut config: HooksConfig, path: &Path, lookup: F) -> HooksConfig
where
    F: Fn(&str) -> Option<String>,
{
    log_loaded(&config, path);
    apply_env_overrides(&mut config, lookup);
    config
}

/// Apply overrides using the given variable lookup
pub fn apply_env_overrides<F>(config: &mut HooksConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = env_log_level(lookup) {
        tracing::debug!("{} overrides log level with '{}'", LOG_LEVEL_ENV, level);
        config.logging.level = level;
    }
}

/// The logging settings a manifest resolves to once overrides apply
pub fn effective_logging<F>(config: &HooksConfig, lookup: F) -> LoggingConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut logging = config.logging.clone();
    if let Some(level) = env_log_level(lookup) {
        logging.level = level;
    }
    logging
}

fn env_log_level<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_LEVEL_ENV)
        .map(|level| level.trim().to_string())
        .filter(|level| !level.is_empty())
}

fn log_loaded(config: &HooksConfig, path: &Path) {
    tracing::info!(
        "Loaded {} hooks from {}",
        config.hook_count(),
        path.display()
    );
}

fn parse_manifest(content: &str, path: &Path) -> TaghookResult<HooksConfig> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(content).map_err(|e| parse_error("TOML", path, e)),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(content).map_err(|e| parse_error("YAML", path, e))
        }
        _ => serde_json::from_str(content).map_err(|e| parse_error("JSON", path, e)),
    }
}

fn parse_error(format: &str, path: &Path, error: impl std::fmt::Display) -> TaghookError {
    TaghookError::parse(format, format!("{}: {}", path.display(), error))
}
