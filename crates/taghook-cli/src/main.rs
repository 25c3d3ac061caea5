//! Taghook CLI application
//!
//! Loads a hook manifest produced by the runner's discovery step and shows
//! which hooks would run, and in what order, for a given set of tags.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/taghook-cli
//! ```
//!
//! # Commands
//!
//! - `taghook plan --event before_step --spec-tag smoke --scenario-tag db`
//! - `taghook list --manifest hooks.json`
//! - `taghook validate --manifest hooks.yaml`
//!
//! Set `RUST_LOG=debug` (or `TAGHOOK_LOG`) for resolution details on stderr.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;

pub use args::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    router::route(cli)
}
