use anyhow::Result;
use clap::Parser;

use kwic::cli::CliArgs;
use kwic::config::{KwicConfig, RunConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let loaded = KwicConfig::load();
    let config = loaded
        .as_ref()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default();
    kwic::tracing::init(config.log_to_file);
    match &loaded {
        Ok(loaded) => loaded.origin.log(),
        Err(e) => tracing::warn!("{}, using defaults", e),
    }

    let run = RunConfig::resolve(args, &config);
    kwic::index::run(&run).map_err(|e| kwic::index::report(e, &run))
}
