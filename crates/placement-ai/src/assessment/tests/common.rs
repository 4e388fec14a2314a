use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

pub(super) use crate::assessment::domain::{
    AssessmentSubmission, CandidateEvaluation, EvaluationParameter, JobId, ParameterScore,
};
pub(super) use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError,
};
pub(super) use crate::assessment::roster::Roster;
pub(super) use crate::assessment::router::assessment_router;
pub(super) use crate::assessment::scoring::{RadarLayout, ScoringEngine};
pub(super) use crate::assessment::service::AssessmentService;

/// Leadership (weight 60, requirement 80) and Technical (weight 40,
/// requirement 70).
pub(super) fn two_parameters() -> Vec<EvaluationParameter> {
    vec![
        EvaluationParameter::new("Leadership", Some(60), 80),
        EvaluationParameter::new("Technical", Some(40), 70),
    ]
}

pub(super) fn candidate(name: &str, scores: &[(&str, i32)]) -> CandidateEvaluation {
    CandidateEvaluation::new(
        name,
        scores
            .iter()
            .map(|(parameter, score)| ParameterScore::new(*parameter, *score))
            .collect(),
    )
}

/// A: Leadership 90, Technical 60. B: Leadership 70, Technical 95.
pub(super) fn two_candidates() -> Vec<CandidateEvaluation> {
    vec![
        candidate("A", &[("Leadership", 90), ("Technical", 60)]),
        candidate("B", &[("Leadership", 70), ("Technical", 95)]),
    ]
}

pub(super) fn scenario_roster() -> Roster {
    Roster::build(&two_parameters(), &two_candidates()).expect("scenario roster builds")
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        client_name: "TechSaaS 200".to_string(),
        role_title: "Chief Product Officer".to_string(),
        parameters: two_parameters(),
        candidates: two_candidates(),
    }
}

pub(super) fn duplicate_parameter_submission() -> AssessmentSubmission {
    let mut submission = submission();
    submission
        .parameters
        .push(EvaluationParameter::new("Leadership", Some(10), 60));
    submission
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(RadarLayout::default())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<JobId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.job_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &JobId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records: Vec<AssessmentRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), engine());
    (service, repository)
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
