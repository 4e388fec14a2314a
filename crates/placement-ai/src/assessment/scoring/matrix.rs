use super::{round_to, CandidateId, CandidateScoreSet, Parameter, ParameterId};
use serde::Serialize;

/// Position of a cell within its parameter column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRank {
    Top,
    Second,
    None,
}

/// One candidate's result on one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedCell {
    pub candidate_id: CandidateId,
    pub score: i32,
    /// False when the candidate had no score for this parameter; `score` is
    /// then zero.
    pub provided: bool,
    /// Score on a 0-10 scale, one decimal.
    pub raw_score: f64,
    /// `score * weight / 1000`, two decimals.
    pub weighted_contribution: f64,
    pub rank: CellRank,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub parameter_id: ParameterId,
    pub parameter_name: String,
    pub weight: i32,
    pub cells: Vec<WeightedCell>,
}

impl MatrixRow {
    pub fn cell(&self, candidate: CandidateId) -> Option<&WeightedCell> {
        self.cells.iter().find(|cell| cell.candidate_id == candidate)
    }

    pub fn top_candidates(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.rank == CellRank::Top)
            .map(|cell| cell.candidate_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightedMatrix {
    pub rows: Vec<MatrixRow>,
}

impl WeightedMatrix {
    /// True when there is nothing to show, i.e. no candidates were scored.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.cells.is_empty())
    }

    pub fn cell(&self, parameter: ParameterId, candidate: CandidateId) -> Option<&WeightedCell> {
        self.rows
            .iter()
            .find(|row| row.parameter_id == parameter)
            .and_then(|row| row.cell(candidate))
    }
}

struct ColumnLeaders {
    max: i32,
    second: Option<i32>,
}

impl ColumnLeaders {
    fn from_scores(scores: &[i32]) -> Self {
        let max = scores.iter().copied().max().unwrap_or(0);
        let second = scores.iter().copied().filter(|score| *score < max).max();
        Self { max, second }
    }

    fn rank(&self, score: i32) -> CellRank {
        if self.max > 0 && score == self.max {
            return CellRank::Top;
        }

        match self.second {
            Some(second) if second > 0 && score == second => CellRank::Second,
            _ => CellRank::None,
        }
    }
}

pub(crate) fn weighted_matrix(
    parameters: &[Parameter],
    candidates: &[CandidateScoreSet],
) -> WeightedMatrix {
    let rows = parameters
        .iter()
        .map(|parameter| {
            let weight = parameter.effective_weight();
            let column: Vec<i32> = candidates
                .iter()
                .map(|candidate| candidate.effective_score(parameter.id))
                .collect();
            let leaders = ColumnLeaders::from_scores(&column);

            let cells = candidates
                .iter()
                .zip(column.iter().copied())
                .map(|(candidate, score)| WeightedCell {
                    candidate_id: candidate.id,
                    score,
                    provided: candidate.score_for(parameter.id).is_some(),
                    raw_score: round_to(f64::from(score) / 10.0, 1),
                    weighted_contribution: round_to(
                        f64::from(score) * f64::from(weight) / 1000.0,
                        2,
                    ),
                    rank: leaders.rank(score),
                })
                .collect();

            MatrixRow {
                parameter_id: parameter.id,
                parameter_name: parameter.name.clone(),
                weight,
                cells,
            }
        })
        .collect();

    WeightedMatrix { rows }
}
