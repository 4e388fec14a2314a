//! Weighted multi-candidate scoring.
//!
//! The engine is a set of pure functions over the roster's id-keyed
//! parameters and score sets. It never fails: absent weights fall back to
//! [`DEFAULT_WEIGHT`], missing scores count as zero, and ties are reported as
//! ties rather than broken.

mod gap;
mod matrix;
mod radar;
mod totals;

pub use gap::{classify_gap, GapAssessment, GapSeverity, MINOR_GAP_FLOOR};
pub use matrix::{CellRank, MatrixRow, WeightedCell, WeightedMatrix};
pub use radar::{RadarAxis, RadarLayout, RadarPoint, RadarPolygon, RadarProjection};
pub use totals::CandidateTotal;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight applied when a parameter has none, or one outside `1..=100`.
pub const DEFAULT_WEIGHT: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParameterId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub usize);

/// Evaluation criterion as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    pub weight: Option<i32>,
    pub requirement_level: i32,
}

impl Parameter {
    pub fn effective_weight(&self) -> i32 {
        match self.weight {
            Some(weight) if (1..=100).contains(&weight) => weight,
            _ => DEFAULT_WEIGHT,
        }
    }
}

/// Raw 0-100 scores for one candidate, keyed by parameter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScoreSet {
    pub id: CandidateId,
    pub name: String,
    pub scores: BTreeMap<ParameterId, i32>,
}

impl CandidateScoreSet {
    /// The score as supplied, `None` when the candidate was never scored.
    pub fn score_for(&self, parameter: ParameterId) -> Option<i32> {
        self.scores.get(&parameter).copied()
    }

    /// The score used for arithmetic and ranking.
    pub fn effective_score(&self, parameter: ParameterId) -> i32 {
        self.score_for(parameter).unwrap_or(0)
    }
}

/// Stateless scorer; the only thing it holds is the radar layout used for
/// chart projection.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    layout: RadarLayout,
}

impl ScoringEngine {
    pub fn new(layout: RadarLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &RadarLayout {
        &self.layout
    }

    pub fn compute_matrix(
        &self,
        parameters: &[Parameter],
        candidates: &[CandidateScoreSet],
    ) -> WeightedMatrix {
        matrix::weighted_matrix(parameters, candidates)
    }

    pub fn compute_totals(
        &self,
        parameters: &[Parameter],
        candidates: &[CandidateScoreSet],
    ) -> Vec<CandidateTotal> {
        totals::candidate_totals(parameters, candidates)
    }

    pub fn compute_gap(parameter: &Parameter, candidate_score: i32) -> GapAssessment {
        GapAssessment::new(candidate_score, parameter.requirement_level)
    }

    pub fn compute_radar_projection(
        &self,
        parameters: &[Parameter],
        candidates: &[CandidateScoreSet],
    ) -> RadarProjection {
        radar::project(parameters, candidates, &self.layout)
    }

    pub fn compute_radar_projection_with(
        parameters: &[Parameter],
        candidates: &[CandidateScoreSet],
        layout: &RadarLayout,
    ) -> RadarProjection {
        radar::project(parameters, candidates, layout)
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
