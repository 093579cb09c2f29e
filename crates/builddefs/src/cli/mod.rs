//! CLI commands for builddefs.
//!
//! Each subcommand lives in its own module with a `run(args)` entry point.
//! The descriptor is constructed exactly once, here, and handed to the
//! command that needs it - there is no process-global snapshot.

pub mod check;
pub mod get;
pub mod render;
pub mod show;

use anyhow::{Context, Result};
use builddefs_descriptor::ConfigDescriptor;
use std::path::Path;
use tracing::debug;

/// Load the descriptor a command will operate on.
pub fn load_descriptor(path: &Path) -> Result<ConfigDescriptor> {
    debug!(path = %path.display(), "loading descriptor");
    ConfigDescriptor::load_from_path(path)
        .with_context(|| format!("failed to load descriptor from {}", path.display()))
}
