use async_graphql::{Enum, SimpleObject, ID};

use super::service;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PairingKind {
    Clean,
    ForcedRematch,
}

impl From<service::PairKind> for PairingKind {
    fn from(kind: service::PairKind) -> Self {
        match kind {
            service::PairKind::Clean => PairingKind::Clean,
            service::PairKind::ForcedRematch => PairingKind::ForcedRematch,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ByeKind {
    First,
    Repeat,
}

impl From<service::ByeKind> for ByeKind {
    fn from(kind: service::ByeKind) -> Self {
        match kind {
            service::ByeKind::First => ByeKind::First,
            service::ByeKind::Repeat => ByeKind::Repeat,
        }
    }
}

/// One table of the round, higher-ranked player first.
#[derive(SimpleObject, Clone)]
pub struct Pairing {
    pub player1_id: ID,
    pub player1_name: String,
    pub player2_id: ID,
    pub player2_name: String,
    pub kind: PairingKind,
}

impl From<service::Pair> for Pairing {
    fn from(pair: service::Pair) -> Self {
        Pairing {
            player1_id: pair.higher.id.into(),
            player1_name: pair.higher.name,
            player2_id: pair.lower.id.into(),
            player2_name: pair.lower.name,
            kind: pair.kind.into(),
        }
    }
}

/// The bye committed for this round, if the field was odd.
#[derive(SimpleObject, Clone)]
pub struct ByeGrant {
    pub player_id: ID,
    pub player_name: String,
    pub kind: ByeKind,
}

impl From<service::GrantedBye> for ByeGrant {
    fn from(bye: service::GrantedBye) -> Self {
        ByeGrant {
            player_id: bye.player.id.into(),
            player_name: bye.player.name,
            kind: bye.kind.into(),
        }
    }
}

#[derive(SimpleObject)]
pub struct RoundPairings {
    pub tournament_id: ID,
    pub bye: Option<ByeGrant>,
    pub pairings: Vec<Pairing>,
}
