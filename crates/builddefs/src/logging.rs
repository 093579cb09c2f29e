//! Stderr tracing setup for the builddefs binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "builddefs=info,builddefs_descriptor=info";
const VERBOSE_LOG_FILTER: &str = "builddefs=debug,builddefs_descriptor=debug";

/// Initialize tracing with an env-filtered stderr writer.
///
/// `RUST_LOG` overrides the default filter; `--verbose` overrides both.
pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))
}
