use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::state::AppState;
use infra::repos::players;

use super::types::Player;

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let rows = players::list(&state.db).await?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn player(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let row = players::get_by_id(&state.db, id).await?;
        Ok(row.map(Player::from))
    }

    /// Number of currently registered players.
    async fn player_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let state = ctx.data::<AppState>()?;
        Ok(players::count(&state.db).await?)
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn register_player(&self, ctx: &Context<'_>, name: String) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let row = players::create(&state.db, &name).await?;
        tracing::info!(player_id = %row.id, "Registered player {:?}", row.name);
        Ok(row.into())
    }

    /// Administrative reset: removes every player record (cascades to
    /// memberships, matches and byes).
    async fn delete_all_players(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<AppState>()?;
        let removed = players::delete_all(&state.db).await?;
        tracing::warn!("Deleted all {removed} players");
        Ok(removed as i32)
    }
}
