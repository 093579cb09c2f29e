//! `check` - validate a descriptor file.

use anyhow::{Context, Result};
use builddefs_descriptor::{ConfigDescriptor, ConfigKey};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Descriptor file to validate
    pub file: PathBuf,
}

/// Run the check command - loads the file and reports the result.
///
/// Loading is all-or-nothing, so a successful load IS the validity proof;
/// the exit code carries the verdict for scripts.
pub fn run(args: CheckArgs) -> Result<()> {
    let descriptor = ConfigDescriptor::load_from_path(&args.file)
        .with_context(|| format!("{} is not a valid descriptor", args.file.display()))?;

    let populated = descriptor
        .entries()
        .filter(|(_, value)| !value.is_empty())
        .count();
    println!(
        "ok: {} ({} keys, {} populated)",
        args.file.display(),
        ConfigKey::ALL.len(),
        populated
    );
    Ok(())
}
