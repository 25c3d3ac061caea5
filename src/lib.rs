//! Taghook
//!
//! Tag-filtered hook resolution for BDD step hooks. This facade re-exports
//! [`taghook_core`]; the `taghook` binary lives in the `taghook-cli` crate.

pub use taghook_core::*;
