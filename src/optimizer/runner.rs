use crate::config::TeamParams;
use crate::error::SynResult;
use crate::optimizer::construction::{self, Assignment};
use crate::scorer::ScoreMatrix;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

pub struct SearchOptions {
    pub team_count: usize,
    pub max_count: Option<usize>,
    pub split_remaining: bool,
    pub iterations: usize,
    pub seed: u64,
    pub max_time: Option<Duration>,
}

impl SearchOptions {
    pub fn from_params(params: &TeamParams, team_count: usize, seed: u64) -> Self {
        Self {
            team_count,
            max_count: params.max_count_per_team,
            split_remaining: params.split_remaining,
            iterations: params.iterations,
            seed,
            max_time: params.max_time.map(Duration::from_secs),
        }
    }
}

pub struct SearchResult {
    pub assignment: Assignment,
    pub score: f64,
    pub iteration: usize,
}

/// Multi-start greedy construction. Iteration `i` draws from its own
/// generator seeded with `seed + i`, so the outcome does not depend on the
/// thread count. Equal scores keep the earliest iteration.
///
/// Once `max_time` has elapsed, iterations that have not started are
/// skipped; iteration 0 always runs. Iterations are scheduled by rayon, so
/// the ones that ran are not necessarily a prefix of `0..iterations` and a
/// deadline makes the result timing dependent.
pub fn run_search(matrix: &ScoreMatrix, opts: &SearchOptions) -> SynResult<Option<SearchResult>> {
    let start_time = Instant::now();

    let outcomes: Vec<Option<SynResult<(Assignment, f64)>>> = (0..opts.iterations)
        .into_par_iter()
        .map(|i| {
            // The first iteration always runs
            if let Some(limit) = opts.max_time {
                if i > 0 && start_time.elapsed() >= limit {
                    return None;
                }
            }

            let mut rng = fastrand::Rng::with_seed(opts.seed.wrapping_add(i as u64));
            let result = construction::construct(
                &mut rng,
                matrix,
                opts.team_count,
                opts.max_count,
                opts.split_remaining,
            )
            .and_then(|assignment| {
                let score = construction::total_score(matrix, &assignment)?;
                Ok((assignment, score))
            });

            if let Ok((_, score)) = &result {
                debug!(iteration = i, score, "construction finished");
            }
            Some(result)
        })
        .collect();

    let mut best: Option<SearchResult> = None;
    for (iteration, outcome) in outcomes.into_iter().enumerate() {
        let Some(outcome) = outcome else {
            continue;
        };
        let (assignment, score) = outcome?;
        let improves = match &best {
            Some(current) => score > current.score,
            None => true,
        };
        if improves {
            best = Some(SearchResult {
                assignment,
                score,
                iteration,
            });
        }
    }

    Ok(best)
}
