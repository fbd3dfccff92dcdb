pub mod aspects;
pub mod degrees;
pub mod houses;
pub mod matrix;
pub mod types;

pub use self::matrix::ScoreMatrix;
pub use self::types::{AspectHit, HouseOverlay, MatrixResult};

use self::degrees::WheelPoint;
use crate::chart::Person;
use crate::config::ScoringParams;
use crate::error::SynResult;
use rayon::prelude::*;
use tracing::debug;

pub struct Scorer {
    pub params: ScoringParams,
}

impl Scorer {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    /// Full diagnostics for one pair.
    pub fn compare_pair(&self, first: &Person, second: &Person) -> SynResult<MatrixResult> {
        let first_points = degrees::normalize(first, self.params.placements)?;
        let second_points = degrees::normalize(second, self.params.placements)?;
        Ok(self.score_points(first, &first_points, second, &second_points))
    }

    fn score_points(
        &self,
        first: &Person,
        first_points: &[WheelPoint],
        second: &Person,
        second_points: &[WheelPoint],
    ) -> MatrixResult {
        let mut result = MatrixResult::default();
        aspects::score_aspects(first_points, second_points, &mut result);
        result.overlays = houses::process_houses(first, second);
        result
    }

    /// Triangular table of pair results: entry `[i][j]` (with `j < i`) pairs
    /// person `i` with person `j`.
    pub fn compare_people(&self, persons: &[Person]) -> SynResult<Vec<Vec<MatrixResult>>> {
        // Every wheel position is derived before any pair is scored.
        let points = persons
            .iter()
            .map(|p| degrees::normalize(p, self.params.placements))
            .collect::<SynResult<Vec<_>>>()?;

        let rows: Vec<Vec<MatrixResult>> = (0..persons.len())
            .into_par_iter()
            .map(|i| {
                (0..i)
                    .map(|j| {
                        let result =
                            self.score_points(&persons[i], &points[i], &persons[j], &points[j]);
                        debug!(
                            first = %persons[i].name,
                            second = %persons[j].name,
                            aspects = result.aspects.len(),
                            overlays = result.overlays.len(),
                            "pair scored"
                        );
                        result
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(rows)
    }

    pub fn score_matrix(&self, persons: &[Person]) -> SynResult<ScoreMatrix> {
        let results = self.compare_people(persons)?;
        Ok(ScoreMatrix::from_results(&results, self.params.overlay_scale))
    }
}
