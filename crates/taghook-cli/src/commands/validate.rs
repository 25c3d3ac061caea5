//! Validate command implementation

use anyhow::{Context, Result};
use std::path::Path;
use taghook_core::HookEvent;
use taghook_core::config::HooksConfig;

use crate::console::CliConsole;

/// Register every hook of a loaded manifest, reporting the first problem
pub fn validate_manifest(config: &HooksConfig, path: &Path, console: &CliConsole) -> Result<()> {
    if let Err(e) = config.validate() {
        console.error(&e.to_string());
        return Err(e).with_context(|| {
            format!("'{}' contains an invalid hook declaration", path.display())
        });
    }

    for event in HookEvent::all() {
        let count = config.entries_for(*event).len();
        if count > 0 {
            console.info(&format!("{}: {} hooks", event, count));
        }
    }

    console.success(&format!(
        "{} is valid ({} hooks)",
        path.display(),
        config.hook_count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use taghook_core::config::read_manifest;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> (std::path::PathBuf, HooksConfig) {
        let path = dir.path().join("hooks.json");
        fs::write(&path, content).unwrap();
        let config = read_manifest(&path).unwrap();
        (path, config)
    }

    #[test]
    fn test_valid_manifest() {
        let dir = TempDir::new().unwrap();
        let (path, config) = write_manifest(&dir, r#"{"before_step": [{"identity": "Hooks.a"}]}"#);

        assert!(validate_manifest(&config, &path, &CliConsole::new(true)).is_ok());
    }

    #[test]
    fn test_invalid_aggregation() {
        let dir = TempDir::new().unwrap();
        let (path, config) = write_manifest(
            &dir,
            r#"{"before_step": [{"identity": "Hooks.a", "tags": ["x"], "tag_aggregation": "both"}]}"#,
        );

        let err = validate_manifest(&config, &path, &CliConsole::new(false)).unwrap_err();
        assert!(err.to_string().contains("hooks.json"));
    }

    #[test]
    fn test_tagged_suite_hook() {
        let dir = TempDir::new().unwrap();
        let (path, config) = write_manifest(
            &dir,
            r#"{"after_suite": [{"identity": "Hooks.report", "tags": ["nightly"]}]}"#,
        );

        assert!(validate_manifest(&config, &path, &CliConsole::new(false)).is_err());
    }
}
