pub mod compare;
pub mod matrix;
pub mod teams;

use clap::ArgMatches;
use synastry::config::{Config, ScoringParams};
use synastry::error::SynResult;
use tracing::info;

/// The file config (if any) with explicit command-line flags laid on top.
pub fn resolve_config(
    path: Option<&str>,
    cli: &Config,
    matches: Option<&ArgMatches>,
) -> SynResult<Config> {
    let Some(path) = path else {
        return Ok(cli.clone());
    };

    info!(path, "loading config");
    let mut config = Config::load_from_file(path)?;
    if let Some(matches) = matches {
        config.merge_from_cli(cli, matches);
    }
    Ok(config)
}

pub fn resolve_scoring(
    path: Option<&str>,
    cli: &ScoringParams,
    matches: Option<&ArgMatches>,
) -> SynResult<ScoringParams> {
    let Some(path) = path else {
        return Ok(cli.clone());
    };

    info!(path, "loading config");
    let mut scoring = Config::load_from_file(path)?.scoring;
    if let Some(matches) = matches {
        scoring.merge_from_cli(cli, matches);
    }
    Ok(scoring)
}
