//! Builddefs CLI
//!
//! One-shot inspection tooling over build-configuration descriptor files:
//! show the snapshot, look up single keys, validate sources, and re-emit
//! a descriptor deterministically in any supported format.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod cli;
mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "builddefs",
    about = "Inspect and re-emit build-configuration descriptors",
    version
)]
struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every configuration value
    Show(cli::show::ShowArgs),
    /// Print the value of a single key
    Get(cli::get::GetArgs),
    /// Validate a descriptor file
    Check(cli::check::CheckArgs),
    /// Re-emit a descriptor in a chosen format
    Render(cli::render::RenderArgs),
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Show(args) => cli::show::run(args),
        Commands::Get(args) => cli::get::run(args),
        Commands::Check(args) => cli::check::run(args),
        Commands::Render(args) => cli::render::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
