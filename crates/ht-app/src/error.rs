//! Error types for the ht-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ht-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ht_project::ProjectError> for AppError {
    fn from(err: ht_project::ProjectError) -> Self {
        match err {
            ht_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<ht_project::ValidationError> for AppError {
    fn from(err: ht_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ht_results::ResultsError> for AppError {
    fn from(err: ht_results::ResultsError) -> Self {
        match err {
            ht_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
