use crate::reports;
use clap::Args;
use synastry::api;
use synastry::chart::Person;
use synastry::config::Config;
use synastry::error::SynResult;

#[derive(Args, Debug, Clone)]
pub struct TeamsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the formation as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &TeamsArgs, config: &Config, persons: &[Person]) -> SynResult<()> {
    let formation = api::build_teams(persons, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&formation)?);
    } else {
        reports::print_teams(&formation);
    }
    Ok(())
}
