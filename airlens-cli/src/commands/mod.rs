//! CLI command implementations.

pub mod common;
pub mod query;
pub mod watch;
