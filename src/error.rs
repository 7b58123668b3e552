//! Error types for workout operations.

use crate::types::WorkoutId;

/// Errors surfaced by the workout store and the view layer.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Enter valid values: {0}")]
    Validation(String),

    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    #[error("The workout form is not open; click on the map first")]
    FormHidden,

    #[error("No map is loaded")]
    MapUnavailable,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl WorkoutError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
