use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a stored assessment (one job opening).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Evaluation criterion as produced by the AI evaluation service.
///
/// `weight` is optional because the service does not always return one; the
/// scoring engine substitutes its default when it is absent or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationParameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weight: Option<i32>,
    pub requirement_level: i32,
}

impl EvaluationParameter {
    pub fn new(name: impl Into<String>, weight: Option<i32>, requirement_level: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            weight,
            requirement_level,
        }
    }
}

/// One candidate's score on one parameter, plus the free-text rationale that
/// is carried through to the report untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterScore {
    pub parameter_name: String,
    pub score: i32,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl ParameterScore {
    pub fn new(parameter_name: impl Into<String>, score: i32) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            score,
            justification: String::new(),
            strengths: Vec::new(),
            limitations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEvaluation {
    pub candidate_name: String,
    #[serde(default)]
    pub overall_assessment: String,
    #[serde(default)]
    pub scores: Vec<ParameterScore>,
}

impl CandidateEvaluation {
    pub fn new(candidate_name: impl Into<String>, scores: Vec<ParameterScore>) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            overall_assessment: String::new(),
            scores,
        }
    }
}

/// Everything collected for one job before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub role_title: String,
    pub parameters: Vec<EvaluationParameter>,
    #[serde(default)]
    pub candidates: Vec<CandidateEvaluation>,
}
