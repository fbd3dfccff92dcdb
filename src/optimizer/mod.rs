pub mod construction;
pub mod runner;

use self::runner::{SearchOptions, SearchResult};
use crate::chart::Person;
use crate::config::TeamParams;
use crate::error::{SynResult, SynastryError};
use crate::scorer::ScoreMatrix;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub members: Vec<Person>,
    /// Mean pair score among the members.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamFormation {
    /// Best team first.
    pub teams: Vec<Team>,
    pub leftover: Vec<Person>,
    pub matrix: ScoreMatrix,
    pub total_score: f64,
    /// Iteration that produced the kept configuration.
    pub iteration: usize,
    pub seed: u64,
}

/// Splits `persons` into teams using a precomputed score matrix whose
/// indices follow `persons`.
pub fn build_teams(
    persons: &[Person],
    matrix: ScoreMatrix,
    params: &TeamParams,
) -> SynResult<TeamFormation> {
    params.validate()?;
    if matrix.len() != persons.len() {
        return Err(SynastryError::Validation(format!(
            "score matrix covers {} persons but {} were given",
            matrix.len(),
            persons.len()
        )));
    }

    let seed = params.seed.unwrap_or_else(|| fastrand::u64(..));

    if persons.is_empty() {
        return Ok(TeamFormation {
            teams: Vec::new(),
            leftover: Vec::new(),
            matrix,
            total_score: 0.0,
            iteration: 0,
            seed,
        });
    }

    let team_count = params.resolve_team_count(persons.len())?;
    if let Some(requested) = params.number_of_teams {
        if requested.ceil() as usize > persons.len() {
            warn!(
                requested,
                population = persons.len(),
                "more teams requested than persons, using one team per person"
            );
        }
    }

    info!(
        population = persons.len(),
        teams = team_count,
        iterations = params.iterations,
        seed,
        "forming teams"
    );

    let opts = SearchOptions::from_params(params, team_count, seed);
    let Some(SearchResult {
        assignment,
        score,
        iteration,
    }) = runner::run_search(&matrix, &opts)?
    else {
        return Err(SynastryError::Config(
            "no construction pass completed".to_string(),
        ));
    };

    info!(score, iteration, "best configuration");

    let mut teams = assignment
        .teams
        .iter()
        .map(|members| {
            Ok(Team {
                members: members.iter().map(|&i| persons[i].clone()).collect(),
                score: construction::team_score(&matrix, members)?,
            })
        })
        .collect::<SynResult<Vec<_>>>()?;
    teams.sort_by(|a, b| b.score.total_cmp(&a.score));

    let leftover = assignment
        .remaining
        .iter()
        .map(|&i| persons[i].clone())
        .collect();

    Ok(TeamFormation {
        teams,
        leftover,
        matrix,
        total_score: score,
        iteration,
        seed,
    })
}
