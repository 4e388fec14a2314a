use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentSubmission, JobId};

/// Stored assessment: the submission exactly as received plus bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub job_id: JobId,
    pub submission: AssessmentSubmission,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn receipt(&self) -> AssessmentReceipt {
        AssessmentReceipt {
            job_id: self.job_id.clone(),
            client_name: self.submission.client_name.clone(),
            role_title: self.submission.role_title.clone(),
            parameter_count: self.submission.parameters.len(),
            candidate_count: self.submission.candidates.len(),
            created_at: self.created_at,
        }
    }
}

/// Storage abstraction over the job/candidate data store.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// What callers get back after submitting an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReceipt {
    pub job_id: JobId,
    pub client_name: String,
    pub role_title: String,
    pub parameter_count: usize,
    pub candidate_count: usize,
    pub created_at: DateTime<Utc>,
}
