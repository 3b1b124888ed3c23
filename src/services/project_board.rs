use async_trait::async_trait;

use crate::domain::board::{CardId, Column};
use crate::domain::issue::Repository;
use crate::error::AppResult;

#[async_trait]
pub trait ProjectBoardService: Send + Sync {
    /// Columns of the last project in `repository` matching `project_name`.
    /// Empty when no project matches.
    async fn project_columns(
        &self,
        repository: &Repository,
        project_name: &str,
    ) -> AppResult<Vec<Column>>;

    /// Cards attached to the issue with `node_id`, or `None` when the node has no
    /// project cards.
    async fn issue_cards(&self, node_id: &str) -> AppResult<Option<Vec<CardId>>>;

    async fn move_card(&self, card: &CardId, column_id: &str) -> AppResult<()>;
}
