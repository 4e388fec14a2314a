//! CSV intake for parameter sets and score sheets exported from the
//! evaluation step.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{CandidateEvaluation, EvaluationParameter, ParameterScore};

#[derive(Debug)]
pub enum ScoreImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ScoreImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreImportError::Io(err) => write!(f, "failed to read score sheet: {}", err),
            ScoreImportError::Csv(err) => write!(f, "invalid score sheet CSV: {}", err),
        }
    }
}

impl std::error::Error for ScoreImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreImportError::Io(err) => Some(err),
            ScoreImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScoreImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScoreImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ScoreSheetImporter;

impl ScoreSheetImporter {
    pub fn parameters_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<EvaluationParameter>, ScoreImportError> {
        let file = std::fs::File::open(path)?;
        Self::parameters_from_reader(file)
    }

    pub fn parameters_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<EvaluationParameter>, ScoreImportError> {
        let mut parameters = Vec::new();
        for row in csv_reader(reader).deserialize::<ParameterRow>() {
            let row = row?;
            parameters.push(EvaluationParameter {
                name: row.name,
                description: row.description.unwrap_or_default(),
                weight: row.weight,
                requirement_level: row.requirement_level,
            });
        }
        Ok(parameters)
    }

    pub fn scores_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<CandidateEvaluation>, ScoreImportError> {
        let file = std::fs::File::open(path)?;
        Self::scores_from_reader(file)
    }

    /// Groups score rows by candidate, keeping candidates in first-seen order.
    pub fn scores_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<CandidateEvaluation>, ScoreImportError> {
        let mut candidates: Vec<CandidateEvaluation> = Vec::new();

        for row in csv_reader(reader).deserialize::<ScoreRow>() {
            let row = row?;
            let score = ParameterScore {
                parameter_name: row.parameter,
                score: row.score,
                justification: row.justification.unwrap_or_default(),
                strengths: split_list(row.strengths.as_deref()),
                limitations: split_list(row.limitations.as_deref()),
            };

            match candidates
                .iter_mut()
                .find(|candidate| candidate.candidate_name == row.candidate)
            {
                Some(candidate) => candidate.scores.push(score),
                None => candidates.push(CandidateEvaluation::new(row.candidate, vec![score])),
            }
        }

        Ok(candidates)
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct ParameterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(rename = "Weight", default, deserialize_with = "empty_number_as_none")]
    weight: Option<i32>,
    #[serde(rename = "Requirement Level")]
    requirement_level: i32,
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    #[serde(rename = "Candidate")]
    candidate: String,
    #[serde(rename = "Parameter")]
    parameter: String,
    #[serde(rename = "Score")]
    score: i32,
    #[serde(rename = "Justification", default, deserialize_with = "empty_string_as_none")]
    justification: Option<String>,
    #[serde(rename = "Strengths", default, deserialize_with = "empty_string_as_none")]
    strengths: Option<String>,
    #[serde(rename = "Limitations", default, deserialize_with = "empty_string_as_none")]
    limitations: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn empty_number_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    opt.map(|value| value.trim().parse::<i32>().map_err(serde::de::Error::custom))
        .transpose()
}
