use serde::Deserialize;

use crate::model::cell_code::CellCode;

/// Target drawing as returned by `GET /map/{candidateId}/goal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoalMap {
    pub goal: Vec<Vec<String>>,
}

impl GoalMap {
    pub fn rows(&self) -> usize {
        self.goal.len()
    }

    /// Decoded cells of one row, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = (u32, CellCode)> + '_ {
        self.goal
            .get(row)
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(column, raw)| (column as u32, CellCode::decode(raw)))
    }
}
