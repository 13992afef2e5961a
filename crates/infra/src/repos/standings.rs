use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::StandingRow;

/// Ranked standings feed for a tournament, strongest record first.
///
/// Ordered by (wins DESC, opponent_wins DESC); registration order is the
/// residual tie-break so the feed is stable across calls.
pub async fn list_for_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<StandingRow>> {
    sqlx::query_as::<_, StandingRow>(
        r#"
        SELECT tournament_id, player_id, player_name, wins, matches_played, opponent_wins
        FROM player_standings
        WHERE tournament_id = $1
        ORDER BY wins DESC, opponent_wins DESC, registered_at ASC, player_id ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}
