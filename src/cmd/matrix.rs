use crate::reports;
use clap::Args;
use synastry::api;
use synastry::chart::Person;
use synastry::config::ScoringParams;
use synastry::error::SynResult;

#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub scoring: ScoringParams,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &MatrixArgs, scoring: &ScoringParams, persons: &[Person]) -> SynResult<()> {
    let matrix = api::score_matrix(persons, scoring)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        reports::print_matrix(persons, &matrix);
    }
    Ok(())
}
