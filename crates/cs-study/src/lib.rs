//! cs-study: sizing study files and batch evaluation.
//!
//! A study is a named list of sizing cases stored as YAML or JSON. Loading
//! validates every case against the engine's boundary rules, so a study that
//! loads is a study that evaluates.

pub mod evaluate;
pub mod report;
pub mod schema;
pub mod validate;

pub use evaluate::{evaluate_case, evaluate_study};
pub use report::{CaseReport, StatusCounts, StudyReport};
pub use schema::*;
pub use validate::{StudyValidationError, validate_study};

use std::path::Path;

/// Newest study file version this crate reads.
pub const LATEST_VERSION: u32 = 1;

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] StudyValidationError),

    #[error("Unsupported study format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_yaml::from_str(&content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn save_yaml(path: &Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_json::from_str(&content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn save_json(path: &Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_json::to_string_pretty(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.yaml`/`.yml` or `.json`.
pub fn load(path: &Path) -> StudyResult<Study> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(StudyError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
