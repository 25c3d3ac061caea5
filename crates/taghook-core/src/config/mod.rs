//! Configuration management for taghook

mod file_loader;
mod logging_config;
mod manifest;

pub use file_loader::{
    LOG_LEVEL_ENV, apply_env_overrides, effective_logging, finish_load, load_from_file,
    load_with_env, read_manifest,
};
pub use logging_config::{LogFormat, LoggingConfig};
pub use manifest::{HookEntry, HooksConfig};
