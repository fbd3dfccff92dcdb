use crate::reports;
use clap::Args;
use serde::Serialize;
use synastry::api;
use synastry::chart::Person;
use synastry::config::ScoringParams;
use synastry::error::{SynResult, SynastryError};
use synastry::scorer::matrix::reduce;
use synastry::scorer::MatrixResult;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long)]
    pub first: String,

    #[arg(long)]
    pub second: String,

    #[command(flatten)]
    pub scoring: ScoringParams,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct Comparison<'a> {
    first: &'a str,
    second: &'a str,
    score: f64,
    result: &'a MatrixResult,
}

fn find<'a>(persons: &'a [Person], name: &str) -> SynResult<&'a Person> {
    persons
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SynastryError::UnknownPerson(name.to_string()))
}

pub fn run(args: &CompareArgs, scoring: &ScoringParams, persons: &[Person]) -> SynResult<()> {
    let first = find(persons, &args.first)?;
    let second = find(persons, &args.second)?;

    let result = api::compare(first, second, scoring)?;
    let score = reduce(&result, scoring.overlay_scale);

    if args.json {
        let out = Comparison {
            first: &first.name,
            second: &second.name,
            score,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_comparison(&first.name, &second.name, &result, score);
    }
    Ok(())
}
