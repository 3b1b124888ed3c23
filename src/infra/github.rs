use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::board::{CardId, Column};
use crate::domain::issue::Repository;
use crate::error::{AppError, AppResult};
use crate::services::ProjectBoardService;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const PROJECT_COLUMNS_QUERY: &str = r#"query columns($owner: String!, $name: String!, $projectName: String!) {
  repository(owner: $owner, name: $name) {
    projects(search: $projectName, last: 1) {
      edges {
        node {
          columns(first: 20) {
            edges {
              node {
                id
                name
              }
            }
          }
        }
      }
    }
  }
}"#;

const ISSUE_CARDS_QUERY: &str = r#"query issues($issueId: ID!) {
  node(id: $issueId) {
    ... on Issue {
      projectCards(first: 5) {
        edges {
          node {
            id
          }
        }
      }
    }
  }
}"#;

const MOVE_CARD_MUTATION: &str = r#"mutation updateProjectCard($cardId: ID!, $columnId: ID!) {
  moveProjectCard(input: {cardId: $cardId, columnId: $columnId}) {
    clientMutationId
  }
}"#;

pub struct GitHubClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    pub fn new(endpoint: String, token: String) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> AppResult<T> {
        debug!(operation, "sending GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| AppError::GitHub(format!("failed to call GitHub: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::GitHub(format!(
                "{operation} responded with {status}: {body}"
            )));
        }

        let payload: GraphQlResponse<T> = response.json().await.map_err(|err| {
            AppError::GitHub(format!("failed to parse {operation} response: {err}"))
        })?;

        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AppError::GitHub(messages));
        }

        payload
            .data
            .ok_or_else(|| AppError::GitHub(format!("{operation} returned no data")))
    }
}

#[async_trait]
impl ProjectBoardService for GitHubClient {
    async fn project_columns(
        &self,
        repository: &Repository,
        project_name: &str,
    ) -> AppResult<Vec<Column>> {
        let data: ColumnsData = self
            .execute(
                "columns",
                PROJECT_COLUMNS_QUERY,
                json!({
                    "owner": repository.owner,
                    "name": repository.name,
                    "projectName": project_name,
                }),
            )
            .await?;

        let repo = data.repository.ok_or_else(|| {
            AppError::GitHub(format!("repository {repository} could not be resolved"))
        })?;

        let mut projects = repo.projects.edges;
        let columns = projects
            .pop()
            .map(|project| project.node.columns.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| Column {
                id: edge.node.id,
                name: edge.node.name,
            })
            .collect();

        Ok(columns)
    }

    async fn issue_cards(&self, node_id: &str) -> AppResult<Option<Vec<CardId>>> {
        let data: CardsData = self
            .execute("issues", ISSUE_CARDS_QUERY, json!({ "issueId": node_id }))
            .await?;

        let cards = data.node.and_then(|node| node.project_cards).map(|cards| {
            cards
                .edges
                .into_iter()
                .map(|edge| CardId(edge.node.id))
                .collect()
        });

        Ok(cards)
    }

    async fn move_card(&self, card: &CardId, column_id: &str) -> AppResult<()> {
        let _: IgnoredAny = self
            .execute(
                "updateProjectCard",
                MOVE_CARD_MUTATION,
                json!({ "cardId": card.as_str(), "columnId": column_id }),
            )
            .await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct Connection<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Deserialize)]
struct ColumnsData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
struct RepositoryNode {
    projects: Connection<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    columns: Connection<ColumnNode>,
}

#[derive(Deserialize)]
struct ColumnNode {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct CardsData {
    node: Option<IssueNode>,
}

#[derive(Deserialize)]
struct IssueNode {
    #[serde(rename = "projectCards", default)]
    project_cards: Option<Connection<CardNode>>,
}

#[derive(Deserialize)]
struct CardNode {
    id: String,
}
