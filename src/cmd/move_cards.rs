use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::move_cards::{MoveOutcome, move_issue_cards};

pub async fn run(ctx: &AppContext) -> AppResult<MoveOutcome> {
    let payload = ctx.config.load_event_payload()?;
    let outcome = move_issue_cards(ctx, payload).await?;

    if let MoveOutcome::Moved { column, cards } = &outcome {
        info!(
            column = %column.name,
            moved = cards.len(),
            "project cards moved"
        );
    }

    Ok(outcome)
}
