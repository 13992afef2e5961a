use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::MatchRow;

#[derive(Debug, Clone)]
pub struct CreateMatch {
    pub tournament_id: Uuid,
    pub winner_id: Uuid,
    /// None records a bye-win.
    pub loser_id: Option<Uuid>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateMatch) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (tournament_id, winner_id, loser_id)
        VALUES ($1, $2, $3)
        RETURNING id, tournament_id, winner_id, loser_id, created_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(data.winner_id)
    .bind(data.loser_id)
    .fetch_one(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, tournament_id, winner_id, loser_id, created_at
        FROM matches
        WHERE tournament_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// Whether two players have already faced each other in this tournament.
/// Checks both (winner, loser) orientations, so argument order is irrelevant.
pub async fn has_played<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_a: Uuid,
    player_b: Uuid,
) -> SqlxResult<bool> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM matches
            WHERE tournament_id = $1
              AND ((winner_id = $2 AND loser_id = $3)
                OR (winner_id = $3 AND loser_id = $2))
        )
        "#,
    )
    .bind(tournament_id)
    .bind(player_a)
    .bind(player_b)
    .fetch_one(executor)
    .await
}

/// Administrative reset.
pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM matches").execute(executor).await?;
    Ok(result.rows_affected())
}
