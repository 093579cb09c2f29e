//! `get` - print a single configuration value.

use anyhow::Result;
use builddefs_descriptor::{ConfigKey, DescriptorError};
use std::path::PathBuf;

/// Arguments for the get command
#[derive(Debug, clap::Args)]
pub struct GetArgs {
    /// Path to the descriptor file
    #[arg(short, long, env = "BUILDDEFS_FILE")]
    pub file: PathBuf,

    /// Key to look up (text-format name, e.g. `install_prefix`)
    pub key: String,
}

/// Run the get command.
///
/// An empty value prints as an empty line: the key is present, the feature
/// is disabled. Names outside the schema fail with a key listing.
pub fn run(args: GetArgs) -> Result<()> {
    let descriptor = super::load_descriptor(&args.file)?;

    match descriptor.get_named(&args.key) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err @ DescriptorError::UnknownKey { .. }) => {
            eprintln!("Valid keys:");
            for key in ConfigKey::ALL {
                eprintln!("  {}", key.name());
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
