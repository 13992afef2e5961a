use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ByeRow;

/// Append a bye ledger entry. The ledger does not prevent a double grant;
/// idempotency is the caller's responsibility.
pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_id: Uuid,
) -> SqlxResult<ByeRow> {
    sqlx::query_as::<_, ByeRow>(
        r#"
        INSERT INTO byes (tournament_id, player_id)
        VALUES ($1, $2)
        RETURNING id, tournament_id, player_id, created_at
        "#,
    )
    .bind(tournament_id)
    .bind(player_id)
    .fetch_one(executor)
    .await
}

pub async fn has_received<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_id: Uuid,
) -> SqlxResult<bool> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM byes
            WHERE tournament_id = $1 AND player_id = $2
        )
        "#,
    )
    .bind(tournament_id)
    .bind(player_id)
    .fetch_one(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<ByeRow>> {
    sqlx::query_as::<_, ByeRow>(
        r#"
        SELECT id, tournament_id, player_id, created_at
        FROM byes
        WHERE tournament_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}
