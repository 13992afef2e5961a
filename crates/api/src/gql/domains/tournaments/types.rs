use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::TournamentRow;

#[derive(SimpleObject, Clone)]
pub struct Tournament {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<TournamentRow> for Tournament {
    fn from(row: TournamentRow) -> Self {
        Tournament {
            id: row.id.into(),
            name: row.name,
            created_at: row.created_at,
        }
    }
}
