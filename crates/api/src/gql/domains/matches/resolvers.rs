use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{matches, matches::CreateMatch};

use super::types::Match;

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    /// All recorded matches for a tournament, oldest first. Bye-wins are
    /// included and carry no loser.
    async fn matches(&self, ctx: &Context<'_>, tournament_id: Uuid) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let rows = matches::list_by_tournament(&state.db, tournament_id).await?;
        Ok(rows.into_iter().map(Match::from).collect())
    }

    /// Whether two players have already faced each other in a tournament.
    /// Symmetric: argument order does not matter.
    async fn have_played(
        &self,
        ctx: &Context<'_>,
        tournament_id: Uuid,
        player_a: Uuid,
        player_b: Uuid,
    ) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(matches::has_played(&state.db, tournament_id, player_a, player_b).await?)
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    /// Record a decided match. Byes cannot be reported here; they are
    /// committed only by round generation.
    async fn report_match(
        &self,
        ctx: &Context<'_>,
        tournament_id: Uuid,
        winner_id: Uuid,
        loser_id: Uuid,
    ) -> Result<Match> {
        if winner_id == loser_id {
            return Err(GqlError::new("Winner and loser must be different players").into());
        }

        let state = ctx.data::<AppState>()?;
        let row = matches::create(
            &state.db,
            CreateMatch {
                tournament_id,
                winner_id,
                loser_id: Some(loser_id),
            },
        )
        .await?;
        Ok(row.into())
    }

    /// Administrative reset: removes every match record.
    async fn delete_all_matches(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<AppState>()?;
        let removed = matches::delete_all(&state.db).await?;
        tracing::warn!("Deleted all {removed} matches");
        Ok(removed as i32)
    }
}
