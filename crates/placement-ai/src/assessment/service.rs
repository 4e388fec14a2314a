use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{AssessmentSubmission, JobId};
use super::report::AssessmentReport;
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use super::roster::{Roster, RosterError};
use super::scoring::ScoringEngine;

/// Service composing roster validation, storage and the scoring engine.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate and store a submission. Nothing is stored when the roster
    /// cannot be built.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        Roster::build(&submission.parameters, &submission.candidates)?;

        let record = AssessmentRecord {
            job_id: next_job_id(),
            submission,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            job_id = %stored.job_id,
            parameters = stored.submission.parameters.len(),
            candidates = stored.submission.candidates.len(),
            "assessment stored"
        );
        Ok(stored)
    }

    /// Build the report for a stored assessment.
    pub fn report(&self, job_id: &JobId) -> Result<AssessmentReport, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        debug!(job_id = %record.job_id, "building stored assessment report");
        self.preview(&record.submission)
    }

    /// Build a report without storing anything.
    pub fn preview(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let roster = Roster::build(&submission.parameters, &submission.candidates)?;
        Ok(AssessmentReport::build(roster, &self.engine))
    }

    pub fn get(&self, job_id: &JobId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
