use async_graphql::MergedObject;

use crate::gql::domains::matches::MatchQuery;
use crate::gql::domains::players::PlayerQuery;
use crate::gql::domains::standings::StandingQuery;
use crate::gql::domains::tournaments::TournamentQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MatchQuery, PlayerQuery, StandingQuery, TournamentQuery);
