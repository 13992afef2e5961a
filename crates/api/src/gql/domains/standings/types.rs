use async_graphql::{SimpleObject, ID};

use infra::models::StandingRow;

/// One row of the ranked standings feed. Wins include bye-wins; the
/// opponent-win total is the tie-break.
#[derive(SimpleObject, Clone)]
pub struct Standing {
    pub tournament_id: ID,
    pub player_id: ID,
    pub player_name: String,
    pub wins: i64,
    pub matches_played: i64,
    pub opponent_wins: i64,
}

impl From<StandingRow> for Standing {
    fn from(row: StandingRow) -> Self {
        Standing {
            tournament_id: row.tournament_id.into(),
            player_id: row.player_id.into(),
            player_name: row.player_name,
            wins: row.wins,
            matches_played: row.matches_played,
            opponent_wins: row.opponent_wins,
        }
    }
}
