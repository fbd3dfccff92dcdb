use crate::error::{SynResult, SynastryError};
use crate::scorer::types::MatrixResult;
use serde::{Deserialize, Serialize};

/// Collapses one pair into a single number: scaled overlays plus positive
/// minus negative accumulators.
pub fn reduce(result: &MatrixResult, overlay_scale: f64) -> f64 {
    result.overlay_total() * overlay_scale + result.positive_total() - result.negative_total()
}

/// Lower-triangular pair scores. Row `i` holds the scores of person `i`
/// against every earlier person, so row 0 is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMatrix {
    rows: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    pub fn from_results(results: &[Vec<MatrixResult>], overlay_scale: f64) -> Self {
        let rows = results
            .iter()
            .map(|row| row.iter().map(|r| reduce(r, overlay_scale)).collect::<Vec<_>>())
            .collect();
        Self { rows }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> SynResult<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != i {
                return Err(SynastryError::Validation(format!(
                    "score matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    i
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Number of persons covered.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Score of a pair in either order. Asking for a person against
    /// itself is a caller bug.
    pub fn get(&self, a: usize, b: usize) -> SynResult<f64> {
        if a == b {
            return Err(SynastryError::SamePerson(a));
        }
        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        if hi >= self.rows.len() {
            return Err(SynastryError::IndexOutOfRange {
                index: hi,
                len: self.rows.len(),
            });
        }
        Ok(self.rows[hi][lo])
    }
}
