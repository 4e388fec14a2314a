//! Candidate assessment: intake, weighted scoring and comparison reports.

pub mod domain;
pub mod import;
pub mod report;
pub mod repository;
pub mod roster;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentSubmission, CandidateEvaluation, EvaluationParameter, JobId, ParameterScore,
};
pub use import::{ScoreImportError, ScoreSheetImporter};
pub use report::AssessmentReport;
pub use repository::{
    AssessmentReceipt, AssessmentRecord, AssessmentRepository, RepositoryError,
};
pub use roster::{Roster, RosterError};
pub use router::assessment_router;
pub use scoring::{RadarLayout, ScoringEngine};
pub use service::{AssessmentService, AssessmentServiceError};
