use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerRow;

pub async fn create<'e>(executor: impl PgExecutor<'e>, name: &str) -> SqlxResult<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (name)
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
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, name, created_at
        FROM players
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, name, created_at
        FROM players
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn count<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
        .fetch_one(executor)
        .await
}

/// Administrative reset. Cascades to memberships, matches and byes.
pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM players").execute(executor).await?;
    Ok(result.rows_affected())
}
