use async_graphql::MergedObject;

use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::rounds::RoundMutation;
use crate::gql::domains::tournaments::TournamentMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(MatchMutation, PlayerMutation, RoundMutation, TournamentMutation);
