mod insights;
mod summary;
pub mod views;

pub use summary::AssessmentReport;

pub(crate) use insights::{generate_insights, generate_probes};
