//! CLI command implementations

pub mod list;
pub mod plan;
pub mod validate;
