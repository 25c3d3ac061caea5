//! CLI argument definitions using clap
//!
//! - taghook plan --event before_step --spec-tag x   # Show run order
//! - taghook list                                    # Show registered hooks
//! - taghook validate                                # Check a manifest

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taghook_core::HookEvent;

/// Default hook manifest file name used across all CLI commands.
pub const DEFAULT_MANIFEST_FILE: &str = "taghook.toml";

#[derive(Parser, Debug)]
#[command(name = "taghook")]
#[command(about = "Taghook - inspect which step hooks run, and in what order")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output and debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved hook order for an event and a set of active tags
    Plan {
        /// Path to the hook manifest (JSON, TOML or YAML)
        #[arg(long, short, default_value = DEFAULT_MANIFEST_FILE)]
        manifest: PathBuf,

        /// Hook event to plan, e.g. before_step or after-scenario
        #[arg(long, short, default_value = "before_step", value_parser = parse_event)]
        event: HookEvent,

        /// Tag on the running specification (repeat or comma-separate)
        #[arg(long = "spec-tag", value_delimiter = ',')]
        spec_tags: Vec<String>,

        /// Tag on the running scenario (repeat or comma-separate)
        #[arg(long = "scenario-tag", value_delimiter = ',')]
        scenario_tags: Vec<String>,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered hooks grouped by event
    List {
        /// Path to the hook manifest (JSON, TOML or YAML)
        #[arg(long, short, default_value = DEFAULT_MANIFEST_FILE)]
        manifest: PathBuf,
    },

    /// Validate a hook manifest
    Validate {
        /// Path to the hook manifest (JSON, TOML or YAML)
        #[arg(long, short, default_value = DEFAULT_MANIFEST_FILE)]
        manifest: PathBuf,
    },
}

fn parse_event(value: &str) -> Result<HookEvent, String> {
    HookEvent::parse(value).ok_or_else(|| {
        let known: Vec<&str> = HookEvent::all().iter().map(|e| e.manifest_key()).collect();
        format!("unknown hook event '{}', expected one of: {}", value, known.join(", "))
    })
}
