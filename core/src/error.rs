use crate::types::ScenarioId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Scenario {id} not found")]
    NotFound { id: ScenarioId },

    #[error("Invalid field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },
}

pub type RoiResult<T> = Result<T, RoiError>;
