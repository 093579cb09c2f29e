//! `show` - print the full configuration snapshot.

use anyhow::Result;
use builddefs_descriptor::ConfigKey;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Path to the descriptor file
    #[arg(short, long, env = "BUILDDEFS_FILE")]
    pub file: PathBuf,

    /// Show values in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the show command - prints every entry, grouped by concern.
pub fn run(args: ShowArgs) -> Result<()> {
    let descriptor = super::load_descriptor(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    println!("BUILD CONFIGURATION");
    println!("===================");

    let mut current_section = "";
    for (key, value) in descriptor.entries() {
        let section = section_for(key);
        if section != current_section {
            println!();
            println!("{}:", section);
            current_section = section;
        }
        if value.is_empty() {
            println!("  {:<22} (empty)", key.name());
        } else {
            println!("  {:<22} {}", key.name(), value);
        }
    }

    Ok(())
}

fn section_for(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::ConfigureCommand => "Provenance",
        key if key.is_placeholder() => "Optional drivers",
        ConfigKey::SendmailPath
        | ConfigKey::PackageInstallDir
        | ConfigKey::IncludePath
        | ConfigKey::ExtensionDir => "Programs and search paths",
        ConfigKey::ShlibSuffix | ConfigKey::ShlibExtPrefix => "Shared-library naming",
        _ => "Installation layout",
    }
}
