//! `render` - re-emit a descriptor deterministically.

use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// Output format for the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Flat `name = "value"` form (the canonical persisted format)
    Text,
    /// Generated-header `#define` form for compile-time consumers
    Header,
    /// JSON object keyed by schema names
    Json,
}

/// Arguments for the render command
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Path to the descriptor file
    #[arg(short, long, env = "BUILDDEFS_FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: RenderFormat,
}

/// Run the render command.
///
/// Output is schema-ordered and byte-identical for the same logical
/// content, whatever the input ordering was.
pub fn run(args: RenderArgs) -> Result<()> {
    let descriptor = super::load_descriptor(&args.file)?;

    match args.format {
        RenderFormat::Text => print!("{}", descriptor.serialize()),
        RenderFormat::Header => print!("{}", descriptor.render_header()),
        RenderFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptor)?),
    }
    Ok(())
}
