use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::state::AppState;
use infra::repos::standings;

use super::types::Standing;

#[derive(Default)]
pub struct StandingQuery;

#[Object]
impl StandingQuery {
    /// Current standings for a tournament, strongest record first
    /// (wins desc, opponent-wins desc, registration order as residual).
    async fn standings(&self, ctx: &Context<'_>, tournament_id: Uuid) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let rows = standings::list_for_tournament(&state.db, tournament_id).await?;
        Ok(rows.into_iter().map(Standing::from).collect())
    }
}
