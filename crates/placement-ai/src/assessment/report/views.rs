use super::super::scoring::{CellRank, GapSeverity, RadarProjection};
use serde::Serialize;

/// Placeholder shown wherever a candidate was never scored on a parameter.
pub const NO_DATA_LABEL: &str = "No data available";

#[derive(Debug, Clone, Serialize)]
pub struct MatrixCellView {
    pub candidate: String,
    pub raw_score: String,
    pub weighted_contribution: String,
    pub rank: CellRank,
    pub provided: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixRowView {
    pub parameter: String,
    pub weight_label: String,
    pub cells: Vec<MatrixCellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalView {
    pub candidate: String,
    pub display_total: String,
    pub is_winner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapCellView {
    pub candidate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<GapSeverity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapRowView {
    pub parameter: String,
    pub requirement_level: i32,
    pub cells: Vec<GapCellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonCellView {
    pub candidate: String,
    pub score: i32,
    pub difference_label: String,
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRowView {
    pub parameter: String,
    pub requirement_level: i32,
    pub cells: Vec<ComparisonCellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthWeaknessCellView {
    pub candidate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthWeaknessRowView {
    pub parameter: String,
    pub cells: Vec<StrengthWeaknessCellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusAreaView {
    pub area: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeCardView {
    pub candidate: String,
    pub strengths: Vec<String>,
    pub focus_areas: Vec<FocusAreaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_focus_note: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterLeaderView {
    pub parameter: String,
    pub leaders: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_performers: Vec<String>,
    pub shared_lead: bool,
    pub parameter_leaders: Vec<ParameterLeaderView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}

/// A parameter as the evaluation described it, for the criteria overview.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterOverviewView {
    pub parameter: String,
    pub description: String,
    pub weight_label: String,
    pub requirement_level: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetailView {
    pub parameter: String,
    pub description: String,
    pub score: i32,
    pub justification: String,
}

/// Per-candidate narrative: overall assessment plus the rationale recorded
/// with each score. Unscored parameters are left out.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetailView {
    pub candidate: String,
    pub overall_assessment: String,
    pub scores: Vec<ScoreDetailView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReportSummary {
    pub parameter_count: usize,
    pub candidate_count: usize,
    pub parameters: Vec<ParameterOverviewView>,
    pub matrix: Vec<MatrixRowView>,
    pub totals: Vec<TotalView>,
    pub winners: Vec<String>,
    pub gaps: Vec<GapRowView>,
    pub requirement_comparison: Vec<ComparisonRowView>,
    pub strengths_weaknesses: Vec<StrengthWeaknessRowView>,
    pub radar: RadarProjection,
    pub probes: Vec<ProbeCardView>,
    pub candidate_details: Vec<CandidateDetailView>,
    pub insights: KeyInsights,
}
