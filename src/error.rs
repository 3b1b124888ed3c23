use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid issue payload: {0}")]
    InvalidPayload(String),
    #[error("GitHub API error: {0}")]
    GitHub(String),
    #[error(
        "Target column does not exist on project. Please use a different column selector:\n\
         target-column: {name}\n\
         target-column-id: {id}"
    )]
    ColumnNotFound { name: String, id: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Builds the column lookup failure, rendering both selectors as JSON literals.
    pub fn column_not_found(name: &str, id: Option<&str>) -> Self {
        let render = |value: Option<&str>| {
            serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string())
        };
        AppError::ColumnNotFound {
            name: render(Some(name)),
            id: render(id),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
