use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::state::AppState;

use super::service;
use super::types::RoundPairings;

#[derive(Default)]
pub struct RoundMutation;

#[Object]
impl RoundMutation {
    /// Generate the next round's pairings from the current standings.
    ///
    /// When the field is odd, one player is granted a bye (committed as a
    /// ledger entry plus a win-only match) before pairing. Pair results are
    /// not committed; they are reported later via `reportMatch`.
    async fn generate_next_round(
        &self,
        ctx: &Context<'_>,
        tournament_id: Uuid,
    ) -> Result<RoundPairings> {
        let state = ctx.data::<AppState>()?;

        let outcome = service::generate_next_round(&state.db, tournament_id)
            .await
            .gql_err("Failed to generate next round")?;

        Ok(RoundPairings {
            tournament_id: tournament_id.into(),
            bye: outcome.bye.map(Into::into),
            pairings: outcome.pairs.into_iter().map(Into::into).collect(),
        })
    }
}
