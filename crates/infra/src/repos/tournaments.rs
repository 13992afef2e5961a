use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TournamentRow;

pub async fn create<'e>(executor: impl PgExecutor<'e>, name: &str) -> SqlxResult<TournamentRow> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        INSERT INTO tournaments (name)
        VALUES ($1)
        RETURNING id, name, created_at
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT id, name, created_at
        FROM tournaments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(
        r#"
        SELECT id, name, created_at
        FROM tournaments
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Enter a player into a tournament. Returns false if already entered.
pub async fn add_player<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_id: Uuid,
) -> SqlxResult<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO tournament_players (tournament_id, player_id)
        VALUES ($1, $2)
        ON CONFLICT (tournament_id, player_id) DO NOTHING
        "#,
    )
    .bind(tournament_id)
    .bind(player_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Administrative reset. Cascades to memberships, matches and byes.
pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM tournaments")
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
