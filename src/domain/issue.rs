use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// The subset of a webhook `issue` object needed to find its project cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    /// Only read from the first issue of a batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    pub node_id: String,
}

#[derive(Deserialize)]
struct IssueEnvelope {
    issue: IssueRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Reads owner and name from an API url shaped like
    /// `https://api.github.com/repos/{owner}/{repo}`.
    pub fn from_api_url(url: &str) -> AppResult<Self> {
        let segments = url.split('/').collect::<Vec<_>>();
        match (segments.get(4), segments.get(5)) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(AppError::InvalidPayload(format!(
                "cannot read owner and repository from repository_url {url:?}"
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A non-empty set of issues whose cards should move.
#[derive(Debug, Clone)]
pub struct IssueBatch {
    issues: Vec<IssueRef>,
}

impl IssueBatch {
    /// Picks the issues from the `issues` input when it is a non-empty array, otherwise
    /// from the event payload. Returns `None` when the first entry carries no `issue`.
    pub fn resolve(issues_input: &str, event_payload: Value) -> AppResult<Option<Self>> {
        let input = if issues_input.trim().is_empty() {
            Value::Array(Vec::new())
        } else {
            serde_json::from_str(issues_input).map_err(|err| {
                AppError::InvalidPayload(format!("issues input is not valid JSON: {err}"))
            })?
        };

        let source = match input {
            Value::Array(entries) if !entries.is_empty() => Value::Array(entries),
            _ => event_payload,
        };
        let entries = match source {
            Value::Array(entries) => entries,
            single => vec![single],
        };

        match entries.first() {
            Some(first) if first.get("issue").is_some() => {}
            _ => return Ok(None),
        }

        let issues = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<IssueEnvelope>(entry)
                    .map(|envelope| envelope.issue)
                    .map_err(|err| AppError::InvalidPayload(format!("entry {index}: {err}")))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Some(Self { issues }))
    }

    /// The repository of the first issue; every issue is assumed to share it.
    pub fn repository(&self) -> AppResult<Repository> {
        let first = self
            .issues
            .first()
            .ok_or_else(|| AppError::InvalidPayload("no issues in batch".to_string()))?;
        let url = first.repository_url.as_deref().ok_or_else(|| {
            AppError::InvalidPayload("first issue has no repository_url".to_string())
        })?;
        Repository::from_api_url(url)
    }

    pub fn issues(&self) -> &[IssueRef] {
        &self.issues
    }
}
