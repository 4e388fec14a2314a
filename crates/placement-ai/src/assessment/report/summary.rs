use super::super::roster::Roster;
use super::super::scoring::{
    CandidateId, CandidateTotal, GapAssessment, ParameterId, RadarProjection, ScoringEngine,
    WeightedMatrix,
};
use super::views::{
    AssessmentReportSummary, CandidateDetailView, ComparisonCellView, ComparisonRowView,
    GapCellView, GapRowView, MatrixCellView, MatrixRowView, ParameterOverviewView,
    ScoreDetailView, StrengthWeaknessCellView, StrengthWeaknessRowView, TotalView,
    NO_DATA_LABEL,
};
use super::{generate_insights, generate_probes};

/// Engine output for one roster, kept together so views can be derived
/// without recomputing.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub roster: Roster,
    pub matrix: WeightedMatrix,
    pub totals: Vec<CandidateTotal>,
    pub radar: RadarProjection,
}

impl AssessmentReport {
    pub fn build(roster: Roster, engine: &ScoringEngine) -> Self {
        let matrix = engine.compute_matrix(roster.parameters(), roster.candidates());
        let totals = engine.compute_totals(roster.parameters(), roster.candidates());
        let radar = engine.compute_radar_projection(roster.parameters(), roster.candidates());

        Self {
            roster,
            matrix,
            totals,
            radar,
        }
    }

    pub fn winners(&self) -> impl Iterator<Item = &CandidateTotal> {
        self.totals.iter().filter(|total| total.is_winner)
    }

    /// Gap against the requirement, `None` when the candidate has no score.
    pub fn gap(&self, candidate: CandidateId, parameter: ParameterId) -> Option<GapAssessment> {
        let parameter = self.roster.parameter(parameter)?;
        let score = self.roster.candidate(candidate)?.score_for(parameter.id)?;
        Some(ScoringEngine::compute_gap(parameter, score))
    }

    pub fn summary(&self) -> AssessmentReportSummary {
        let matrix = self
            .matrix
            .rows
            .iter()
            .map(|row| MatrixRowView {
                parameter: row.parameter_name.clone(),
                weight_label: format!("{}%", row.weight),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| MatrixCellView {
                        candidate: self.candidate_name(cell.candidate_id),
                        raw_score: format!("{:.1}", cell.raw_score),
                        weighted_contribution: format!("{:.2}", cell.weighted_contribution),
                        rank: cell.rank,
                        provided: cell.provided,
                    })
                    .collect(),
            })
            .collect();

        let totals = self
            .totals
            .iter()
            .map(|total| TotalView {
                candidate: total.candidate_name.clone(),
                display_total: format!("{:.2}", total.display_total),
                is_winner: total.is_winner,
                badge: total.is_winner.then_some("1st"),
            })
            .collect();

        let winners = self
            .winners()
            .map(|total| total.candidate_name.clone())
            .collect();

        AssessmentReportSummary {
            parameter_count: self.roster.parameters().len(),
            candidate_count: self.roster.candidates().len(),
            parameters: self.parameter_overview(),
            matrix,
            totals,
            winners,
            gaps: self.gap_rows(),
            requirement_comparison: self.comparison_rows(),
            strengths_weaknesses: self.strength_weakness_rows(),
            radar: self.radar.clone(),
            probes: generate_probes(self),
            candidate_details: self.candidate_details(),
            insights: generate_insights(self),
        }
    }

    fn candidate_name(&self, id: CandidateId) -> String {
        self.roster
            .candidate(id)
            .map(|candidate| candidate.name.clone())
            .unwrap_or_default()
    }

    fn parameter_overview(&self) -> Vec<ParameterOverviewView> {
        self.roster
            .parameters()
            .iter()
            .map(|parameter| ParameterOverviewView {
                parameter: parameter.name.clone(),
                description: self.roster.description(parameter.id).to_string(),
                weight_label: format!("{}%", parameter.effective_weight()),
                requirement_level: parameter.requirement_level,
            })
            .collect()
    }

    fn candidate_details(&self) -> Vec<CandidateDetailView> {
        self.roster
            .candidates()
            .iter()
            .map(|candidate| CandidateDetailView {
                candidate: candidate.name.clone(),
                overall_assessment: self.roster.overall_assessment(candidate.id).to_string(),
                scores: self
                    .roster
                    .details_for(candidate.id)
                    .into_iter()
                    .map(|(parameter, detail)| ScoreDetailView {
                        parameter: parameter.name.clone(),
                        description: self.roster.description(parameter.id).to_string(),
                        score: detail.score,
                        justification: detail.justification.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn gap_rows(&self) -> Vec<GapRowView> {
        self.roster
            .parameters()
            .iter()
            .map(|parameter| GapRowView {
                parameter: parameter.name.clone(),
                requirement_level: parameter.requirement_level,
                cells: self
                    .roster
                    .candidates()
                    .iter()
                    .map(|candidate| match self.gap(candidate.id, parameter.id) {
                        Some(gap) => GapCellView {
                            candidate: candidate.name.clone(),
                            score: candidate.score_for(parameter.id),
                            display: format!("{}%", candidate.effective_score(parameter.id)),
                            difference_label: Some(gap.signed_label()),
                            severity: Some(gap.severity),
                        },
                        None => GapCellView {
                            candidate: candidate.name.clone(),
                            score: None,
                            display: NO_DATA_LABEL.to_string(),
                            difference_label: None,
                            severity: None,
                        },
                    })
                    .collect(),
            })
            .collect()
    }

    fn comparison_rows(&self) -> Vec<ComparisonRowView> {
        self.roster
            .parameters()
            .iter()
            .map(|parameter| ComparisonRowView {
                parameter: parameter.name.clone(),
                requirement_level: parameter.requirement_level,
                cells: self
                    .roster
                    .candidates()
                    .iter()
                    .map(|candidate| {
                        let score = candidate.effective_score(parameter.id);
                        let gap = ScoringEngine::compute_gap(parameter, score);
                        ComparisonCellView {
                            candidate: candidate.name.clone(),
                            score,
                            difference_label: format!("{}%", gap.signed_label()),
                            meets_requirement: gap.difference >= 0,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    fn strength_weakness_rows(&self) -> Vec<StrengthWeaknessRowView> {
        self.roster
            .parameters()
            .iter()
            .map(|parameter| StrengthWeaknessRowView {
                parameter: parameter.name.clone(),
                cells: self
                    .roster
                    .candidates()
                    .iter()
                    .map(|candidate| match self.roster.detail(candidate.id, parameter.id) {
                        Some(detail) => StrengthWeaknessCellView {
                            candidate: candidate.name.clone(),
                            placeholder: None,
                            strengths: detail.strengths.clone(),
                            limitations: detail.limitations.clone(),
                        },
                        None => StrengthWeaknessCellView {
                            candidate: candidate.name.clone(),
                            placeholder: Some(NO_DATA_LABEL),
                            strengths: Vec::new(),
                            limitations: Vec::new(),
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}
