use crate::chart::Person;
use crate::config::{Config, ScoringParams};
use crate::error::{SynResult, SynastryError};
use crate::optimizer::{self, TeamFormation};
use crate::scorer::{MatrixResult, ScoreMatrix, Scorer};

/// Service: accumulators, matched aspects and house overlays for two persons.
pub fn compare(first: &Person, second: &Person, params: &ScoringParams) -> SynResult<MatrixResult> {
    first.validate()?;
    second.validate()?;
    Scorer::new(params.clone()).compare_pair(first, second)
}

/// Service: the scalar score matrix for a population.
pub fn score_matrix(persons: &[Person], params: &ScoringParams) -> SynResult<ScoreMatrix> {
    validate_all(persons)?;
    Scorer::new(params.clone()).score_matrix(persons)
}

/// Service: score every pair, then form teams.
pub fn build_teams(persons: &[Person], config: &Config) -> SynResult<TeamFormation> {
    // Configuration errors surface before any scoring work.
    config.teams.validate()?;
    let matrix = score_matrix(persons, &config.scoring)?;
    optimizer::build_teams(persons, matrix, &config.teams)
}

/// Score of the persons at positions `first` and `second` of `persons`,
/// read from a matrix built for that list. Positions rather than values
/// identify persons, so identical charts listed twice stay distinct.
pub fn pair_score(
    persons: &[Person],
    matrix: &ScoreMatrix,
    first: usize,
    second: usize,
) -> SynResult<f64> {
    if matrix.len() != persons.len() {
        return Err(SynastryError::Validation(format!(
            "score matrix covers {} persons but {} were given",
            matrix.len(),
            persons.len()
        )));
    }
    matrix.get(first, second)
}

fn validate_all(persons: &[Person]) -> SynResult<()> {
    persons.iter().try_for_each(Person::validate)
}
