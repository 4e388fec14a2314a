//! Weighted candidate scoring, gap analysis and comparison reports for
//! recruiting assessments.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
