use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::state::AppState;
use infra::repos::tournaments;

use super::types::Tournament;

#[derive(Default)]
pub struct TournamentQuery;

#[Object]
impl TournamentQuery {
    async fn tournaments(&self, ctx: &Context<'_>) -> Result<Vec<Tournament>> {
        let state = ctx.data::<AppState>()?;
        let rows = tournaments::list(&state.db).await?;
        Ok(rows.into_iter().map(Tournament::from).collect())
    }

    async fn tournament(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Tournament>> {
        let state = ctx.data::<AppState>()?;
        let row = tournaments::get_by_id(&state.db, id).await?;
        Ok(row.map(Tournament::from))
    }
}

#[derive(Default)]
pub struct TournamentMutation;

#[Object]
impl TournamentMutation {
    async fn create_tournament(&self, ctx: &Context<'_>, name: String) -> Result<Tournament> {
        let state = ctx.data::<AppState>()?;
        let row = tournaments::create(&state.db, &name).await?;
        tracing::info!(tournament_id = %row.id, "Created tournament {:?}", row.name);
        Ok(row.into())
    }

    /// Enter a registered player into a tournament. Returns false if the
    /// player was already entered.
    async fn add_player_to_tournament(
        &self,
        ctx: &Context<'_>,
        tournament_id: Uuid,
        player_id: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(tournaments::add_player(&state.db, tournament_id, player_id).await?)
    }

    /// Administrative reset: removes every tournament (cascades to
    /// memberships, matches and byes).
    async fn delete_all_tournaments(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<AppState>()?;
        let removed = tournaments::delete_all(&state.db).await?;
        tracing::warn!("Deleted all {removed} tournaments");
        Ok(removed as i32)
    }
}
