use super::{round_to, CandidateId, CandidateScoreSet, Parameter};
use serde::Serialize;

/// Aggregate weighted score for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateTotal {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    /// Exact `Σ score * weight`; winners are decided on this value.
    pub weighted_sum: i64,
    /// `weighted_sum / 100`.
    pub total: f64,
    /// `total / 10`, two decimals.
    pub display_total: f64,
    pub is_winner: bool,
}

pub(crate) fn candidate_totals(
    parameters: &[Parameter],
    candidates: &[CandidateScoreSet],
) -> Vec<CandidateTotal> {
    let sums: Vec<i64> = candidates
        .iter()
        .map(|candidate| {
            parameters
                .iter()
                .map(|parameter| {
                    i64::from(candidate.effective_score(parameter.id))
                        * i64::from(parameter.effective_weight())
                })
                .sum()
        })
        .collect();

    let Some(max_sum) = sums.iter().copied().max() else {
        return Vec::new();
    };

    candidates
        .iter()
        .zip(sums)
        .map(|(candidate, weighted_sum)| {
            let total = weighted_sum as f64 / 100.0;
            CandidateTotal {
                candidate_id: candidate.id,
                candidate_name: candidate.name.clone(),
                weighted_sum,
                total,
                display_total: round_to(total / 10.0, 2),
                is_winner: weighted_sum == max_sum,
            }
        })
        .collect()
}
