use crate::error::SynResult;
use crate::scorer::ScoreMatrix;

/// One greedy construction: member indices per team plus whoever was not
/// placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub teams: Vec<Vec<usize>>,
    pub remaining: Vec<usize>,
}

/// Draws `count` distinct seeds. Each seed opens its own team and the rest
/// of the population stays in the pool.
pub fn pick_centroids(rng: &mut fastrand::Rng, population: usize, count: usize) -> Assignment {
    let mut remaining: Vec<usize> = (0..population).collect();
    let mut teams = Vec::with_capacity(count);

    while teams.len() < count && !remaining.is_empty() {
        let idx = rng.usize(..remaining.len());
        teams.push(vec![remaining.remove(idx)]);
    }

    Assignment { teams, remaining }
}

/// Index of the team to grow next. The largest team is preferred only while
/// it is still below the cap; otherwise the smallest. Ties go to the team
/// listed first.
pub fn next_team(teams: &[Vec<usize>], prefer_largest: bool, max_count: Option<usize>) -> usize {
    let mut smallest = 0;
    let mut largest = 0;
    for (i, team) in teams.iter().enumerate() {
        if team.len() < teams[smallest].len() {
            smallest = i;
        }
        if team.len() > teams[largest].len() {
            largest = i;
        }
    }

    match max_count {
        Some(max) if prefer_largest && teams[largest].len() < max => largest,
        _ => smallest,
    }
}

/// Mean score over every pair of members, 0 for fewer than two.
pub fn team_score(matrix: &ScoreMatrix, members: &[usize]) -> SynResult<f64> {
    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            sum += matrix.get(a, b)?;
            pairs += 1;
        }
    }
    if pairs == 0 {
        return Ok(0.0);
    }
    Ok(sum / pairs as f64)
}

/// Position in `remaining` of the candidate that gives `team` the highest
/// mean once added. The first of equal candidates wins.
pub fn best_match(
    matrix: &ScoreMatrix,
    team: &[usize],
    remaining: &[usize],
) -> SynResult<Option<usize>> {
    let mut best: Option<usize> = None;
    let mut best_score = f64::NEG_INFINITY;
    let mut trial = team.to_vec();

    for (pos, &candidate) in remaining.iter().enumerate() {
        trial.push(candidate);
        let score = team_score(matrix, &trial)?;
        trial.pop();

        if best.is_none() || score > best_score {
            best = Some(pos);
            best_score = score;
        }
    }

    Ok(best)
}

/// The pool is exhausted, or every team is at the cap and leftovers are kept
/// out.
pub fn is_complete(assignment: &Assignment, max_count: Option<usize>, split_remaining: bool) -> bool {
    if assignment.remaining.is_empty() || assignment.teams.is_empty() {
        return true;
    }
    if split_remaining {
        return false;
    }
    match max_count {
        Some(max) => assignment.teams.iter().map(Vec::len).min() == Some(max),
        None => false,
    }
}

/// Runs one seeded construction pass from centroids to termination.
pub fn construct(
    rng: &mut fastrand::Rng,
    matrix: &ScoreMatrix,
    team_count: usize,
    max_count: Option<usize>,
    split_remaining: bool,
) -> SynResult<Assignment> {
    let prefer_largest = rng.bool();
    let mut assignment = pick_centroids(rng, matrix.len(), team_count);

    while !is_complete(&assignment, max_count, split_remaining) {
        let target = next_team(&assignment.teams, prefer_largest, max_count);
        let Some(pos) = best_match(matrix, &assignment.teams[target], &assignment.remaining)?
        else {
            break;
        };
        let person = assignment.remaining.remove(pos);
        assignment.teams[target].push(person);
    }

    Ok(assignment)
}

/// Sum of every team's mean pair score.
pub fn total_score(matrix: &ScoreMatrix, assignment: &Assignment) -> SynResult<f64> {
    assignment
        .teams
        .iter()
        .map(|team| team_score(matrix, team))
        .sum()
}
