use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::MatchRow;

/// A recorded result. `loser_id` is absent for a bye-win.
#[derive(SimpleObject, Clone)]
pub struct Match {
    pub id: ID,
    pub tournament_id: ID,
    pub winner_id: ID,
    pub loser_id: Option<ID>,
    pub is_bye: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Match {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            winner_id: row.winner_id.into(),
            is_bye: row.loser_id.is_none(),
            loser_id: row.loser_id.map(Into::into),
            created_at: row.created_at,
        }
    }
}
