//! Boundary between the name-keyed records produced by the evaluation service
//! and the id-keyed inputs the scoring engine works on.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use super::domain::{CandidateEvaluation, EvaluationParameter, ParameterScore};
use super::scoring::{CandidateId, CandidateScoreSet, Parameter, ParameterId};

/// Parameters and candidates with stable ids assigned in input order.
#[derive(Debug, Clone)]
pub struct Roster {
    parameters: Vec<Parameter>,
    descriptions: Vec<String>,
    candidates: Vec<CandidateScoreSet>,
    overall_assessments: Vec<String>,
    details: BTreeMap<(CandidateId, ParameterId), ParameterScore>,
}

impl Roster {
    pub fn build(
        parameters: &[EvaluationParameter],
        candidates: &[CandidateEvaluation],
    ) -> Result<Self, RosterError> {
        if parameters.is_empty() {
            return Err(RosterError::NoParameters);
        }

        let mut ids_by_name: HashMap<&str, ParameterId> = HashMap::new();
        let mut mapped_parameters = Vec::with_capacity(parameters.len());
        let mut descriptions = Vec::with_capacity(parameters.len());

        for (index, parameter) in parameters.iter().enumerate() {
            let name = parameter.name.trim();
            if name.is_empty() {
                return Err(RosterError::EmptyParameterName { position: index });
            }

            let id = ParameterId(index);
            if ids_by_name.insert(name, id).is_some() {
                return Err(RosterError::DuplicateParameter(name.to_string()));
            }

            mapped_parameters.push(Parameter {
                id,
                name: name.to_string(),
                weight: parameter.weight,
                requirement_level: parameter.requirement_level,
            });
            descriptions.push(parameter.description.clone());
        }

        let mut seen_candidates: HashMap<&str, CandidateId> = HashMap::new();
        let mut mapped_candidates = Vec::with_capacity(candidates.len());
        let mut overall_assessments = Vec::with_capacity(candidates.len());
        let mut details = BTreeMap::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let name = candidate.candidate_name.trim();
            if name.is_empty() {
                return Err(RosterError::EmptyCandidateName { position: index });
            }

            let id = CandidateId(index);
            if seen_candidates.insert(name, id).is_some() {
                return Err(RosterError::DuplicateCandidate(name.to_string()));
            }

            let mut scores = BTreeMap::new();
            for entry in &candidate.scores {
                let Some(parameter_id) = ids_by_name.get(entry.parameter_name.trim()).copied()
                else {
                    warn!(
                        candidate = name,
                        parameter = %entry.parameter_name,
                        "ignoring score for unknown parameter"
                    );
                    continue;
                };

                if scores.contains_key(&parameter_id) {
                    debug!(
                        candidate = name,
                        parameter = %entry.parameter_name,
                        "keeping first score for repeated parameter"
                    );
                    continue;
                }

                scores.insert(parameter_id, entry.score);
                details.insert((id, parameter_id), entry.clone());
            }

            mapped_candidates.push(CandidateScoreSet {
                id,
                name: name.to_string(),
                scores,
            });
            overall_assessments.push(candidate.overall_assessment.clone());
        }

        Ok(Self {
            parameters: mapped_parameters,
            descriptions,
            candidates: mapped_candidates,
            overall_assessments,
            details,
        })
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn candidates(&self) -> &[CandidateScoreSet] {
        &self.candidates
    }

    pub fn parameter(&self, id: ParameterId) -> Option<&Parameter> {
        self.parameters.get(id.0)
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&CandidateScoreSet> {
        self.candidates.get(id.0)
    }

    pub fn description(&self, id: ParameterId) -> &str {
        self.descriptions.get(id.0).map(String::as_str).unwrap_or("")
    }

    pub fn overall_assessment(&self, id: CandidateId) -> &str {
        self.overall_assessments
            .get(id.0)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Free-text detail recorded with a score, if the candidate was scored.
    pub fn detail(&self, candidate: CandidateId, parameter: ParameterId) -> Option<&ParameterScore> {
        self.details.get(&(candidate, parameter))
    }

    /// Scored entries for one candidate in the order they appear in the
    /// parameter set.
    pub fn details_for(&self, candidate: CandidateId) -> Vec<(&Parameter, &ParameterScore)> {
        self.parameters
            .iter()
            .filter_map(|parameter| {
                self.detail(candidate, parameter.id)
                    .map(|detail| (parameter, detail))
            })
            .collect()
    }
}

/// Shape problems that make name-based joins ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("at least one evaluation parameter is required")]
    NoParameters,
    #[error("parameter at position {position} has an empty name")]
    EmptyParameterName { position: usize },
    #[error("candidate at position {position} has an empty name")]
    EmptyCandidateName { position: usize },
    #[error("parameter name '{0}' appears more than once")]
    DuplicateParameter(String),
    #[error("candidate name '{0}' appears more than once")]
    DuplicateCandidate(String),
}
