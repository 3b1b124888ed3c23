use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::board::ColumnSelector;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub access_token: String,
    /// Raw `issues` input; a JSON array, possibly empty.
    pub issues: String,
    pub project_name: String,
    pub column: ColumnSelector,
    pub event_path: Option<PathBuf>,
    pub graphql_url: String,
}

impl ActionConfig {
    pub fn new(
        access_token: String,
        issues: String,
        project_name: String,
        target_column: Option<String>,
        target_column_id: Option<String>,
        event_path: Option<PathBuf>,
        graphql_url: String,
    ) -> Self {
        Self {
            access_token,
            issues,
            project_name,
            column: ColumnSelector::new(target_column.unwrap_or_default(), target_column_id),
            event_path,
            graphql_url,
        }
    }

    /// The token is only needed once there are issues to move.
    pub fn require_access_token(&self) -> AppResult<&str> {
        let token = self.access_token.trim();
        if token.is_empty() {
            return Err(AppError::Configuration(
                "access-token must not be empty".to_string(),
            ));
        }
        Ok(token)
    }

    /// Reads the webhook payload the run was triggered with. A missing path or file
    /// yields an empty object.
    pub fn load_event_payload(&self) -> AppResult<Value> {
        let Some(path) = &self.event_path else {
            return Ok(Value::Object(Map::new()));
        };

        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "event payload file does not exist");
                Ok(Value::Object(Map::new()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
