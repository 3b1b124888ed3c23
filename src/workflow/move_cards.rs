use futures::future::{join_all, try_join_all};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::board::{CardId, Column};
use crate::domain::issue::IssueBatch;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The payload carried no issues; nothing was queried or moved.
    NoIssues,
    Moved { column: Column, cards: Vec<CardId> },
}

pub async fn move_issue_cards(
    ctx: &AppContext,
    event_payload: serde_json::Value,
) -> AppResult<MoveOutcome> {
    let config = &ctx.config;
    let board = ctx.project_board.as_ref();

    let Some(batch) = IssueBatch::resolve(&config.issues, event_payload)? else {
        info!("No issues to move");
        return Ok(MoveOutcome::NoIssues);
    };
    info!("Issues: {}", serde_json::to_string_pretty(batch.issues())?);

    config.require_access_token()?;
    let repository = batch.repository()?;
    let columns = board
        .project_columns(&repository, &config.project_name)
        .await?;
    let column = config
        .column
        .select(&columns)
        .cloned()
        .ok_or_else(|| AppError::column_not_found(config.column.name(), config.column.id()))?;

    let lookups = batch
        .issues()
        .iter()
        .map(|issue| board.issue_cards(&issue.node_id));
    let cards = try_join_all(lookups)
        .await?
        .into_iter()
        .flatten()
        .flatten()
        .collect::<Vec<_>>();

    info!(
        "Moving {} cards to {} (node_id: {}) in project {}",
        cards.len(),
        column.name,
        column.id,
        config.project_name
    );

    let moves = cards.iter().map(|card| {
        let column_id = column.id.as_str();
        async move {
            info!("Moving cardId: {card}");
            (card, board.move_card(card, column_id).await)
        }
    });
    for (card, result) in join_all(moves).await {
        if let Err(err) = result {
            warn!(card_id = %card, "failed to move card: {err}");
        }
    }

    Ok(MoveOutcome::Moved { column, cards })
}
