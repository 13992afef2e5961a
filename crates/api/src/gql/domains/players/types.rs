use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::PlayerRow;

#[derive(SimpleObject, Clone)]
pub struct Player {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id.into(),
            name: row.name,
            created_at: row.created_at,
        }
    }
}
