use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only match record. `loser_id` is NULL for a bye-win.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub winner_id: Uuid,
    pub loser_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Append-only bye ledger entry.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ByeRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub player_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One row of the ranked standings feed (from the `player_standings` view).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StandingRow {
    pub tournament_id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub wins: i64,
    pub matches_played: i64,
    pub opponent_wins: i64,
}
