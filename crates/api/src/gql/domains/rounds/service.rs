use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use infra::repos::{byes, matches, matches::CreateMatch, standings};

/// One entry of the ranked standings feed, strongest first. The position in
/// the list is the pairing algorithm's only signal of player strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub id: Uuid,
    pub name: String,
}

/// In-memory view of a tournament's match history and bye ledger, loaded once
/// per round generation so candidate scans never re-read the backing store.
#[derive(Debug, Default)]
pub struct HistorySnapshot {
    played: HashSet<(Uuid, Uuid)>,
    byes: HashSet<Uuid>,
}

impl HistorySnapshot {
    pub fn new(
        decided_matches: impl IntoIterator<Item = (Uuid, Uuid)>,
        bye_recipients: impl IntoIterator<Item = Uuid>,
    ) -> Self {
        Self {
            played: decided_matches
                .into_iter()
                .map(|(a, b)| Self::pair_key(a, b))
                .collect(),
            byes: bye_recipients.into_iter().collect(),
        }
    }

    // Pairs are stored normalized so the lookup is commutative.
    fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Whether the two players already faced each other in this tournament.
    /// Symmetric in its arguments.
    pub fn has_played(&self, a: Uuid, b: Uuid) -> bool {
        self.played.contains(&Self::pair_key(a, b))
    }

    /// Whether the player already received a bye in this tournament.
    pub fn has_bye(&self, player: Uuid) -> bool {
        self.byes.contains(&player)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("pairing requires an even number of players, got {0}")]
    OddFieldSize(usize),

    #[error("player {0} appears more than once in the standings")]
    DuplicatePlayer(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    /// Neither player has faced the other before.
    Clean,
    /// Every remaining candidate was a rematch; the adjacent player was
    /// taken anyway so the round can complete.
    ForcedRematch,
}

/// A formed pair, higher-ranked player first.
#[derive(Debug, Clone)]
pub struct Pair {
    pub higher: RankedPlayer,
    pub lower: RankedPlayer,
    pub kind: PairKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByeKind {
    /// The recipient had no prior bye.
    First,
    /// Every player already had a bye; the bottom-ranked player sits out again.
    Repeat,
}

/// Which player sits out the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByeSelection {
    /// Index into the ranked list.
    pub index: usize,
    pub kind: ByeKind,
}

fn check_distinct(ranked: &[RankedPlayer]) -> Result<(), PairingError> {
    let mut seen = HashSet::with_capacity(ranked.len());
    for player in ranked {
        if !seen.insert(player.id) {
            return Err(PairingError::DuplicatePlayer(player.id));
        }
    }
    Ok(())
}

/// Pick the bye recipient from an odd-length ranked list: walk from the
/// bottom of the standings upward and take the first player without a prior
/// bye. If everyone already has one, the bottom player gets a second bye.
///
/// Callers must only invoke this on a non-empty, odd-length list.
pub fn select_bye(ranked: &[RankedPlayer], history: &HistorySnapshot) -> ByeSelection {
    debug_assert!(ranked.len() % 2 == 1);

    for (index, player) in ranked.iter().enumerate().rev() {
        if !history.has_bye(player.id) {
            return ByeSelection {
                index,
                kind: ByeKind::First,
            };
        }
    }

    ByeSelection {
        index: ranked.len() - 1,
        kind: ByeKind::Repeat,
    }
}

/// Pair an even-length ranked list, greedily matching the top remaining
/// player with the nearest-ranked player they have not yet faced. When every
/// remaining candidate is a rematch, the adjacent player is taken and the
/// pair is tagged [`PairKind::ForcedRematch`].
///
/// Deterministic: identical standings and history always produce identical
/// pairs. Rejects odd-length input and duplicate players instead of
/// mis-pairing.
pub fn pair_round(
    mut ranked: Vec<RankedPlayer>,
    history: &HistorySnapshot,
) -> Result<Vec<Pair>, PairingError> {
    if ranked.len() % 2 != 0 {
        return Err(PairingError::OddFieldSize(ranked.len()));
    }
    check_distinct(&ranked)?;

    let mut pairs = Vec::with_capacity(ranked.len() / 2);
    while ranked.len() > 1 {
        let higher = ranked.remove(0);
        let candidate = ranked
            .iter()
            .position(|other| !history.has_played(higher.id, other.id));
        let (offset, kind) = match candidate {
            Some(offset) => (offset, PairKind::Clean),
            None => (0, PairKind::ForcedRematch),
        };
        let lower = ranked.remove(offset);
        pairs.push(Pair {
            higher,
            lower,
            kind,
        });
    }

    Ok(pairs)
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// The committed bye, if the field was odd.
#[derive(Debug, Clone)]
pub struct GrantedBye {
    pub player: RankedPlayer,
    pub kind: ByeKind,
}

pub struct RoundOutcome {
    pub bye: Option<GrantedBye>,
    pub pairs: Vec<Pair>,
}

/// Generate the next round for a tournament.
///
/// Reads the standings and the full match/bye history once, removes and
/// commits the bye when the field is odd (ledger entry plus win-only match,
/// in one transaction), then pairs the remaining even list. Regular match
/// results are never committed here.
pub async fn generate_next_round(
    pool: &sqlx::PgPool,
    tournament_id: Uuid,
) -> Result<RoundOutcome, RoundError> {
    let feed = standings::list_for_tournament(pool, tournament_id).await?;

    let match_rows = matches::list_by_tournament(pool, tournament_id).await?;
    let bye_rows = byes::list_by_tournament(pool, tournament_id).await?;
    let history = HistorySnapshot::new(
        match_rows
            .iter()
            .filter_map(|m| m.loser_id.map(|loser| (m.winner_id, loser))),
        bye_rows.iter().map(|b| b.player_id),
    );

    let mut ranked: Vec<RankedPlayer> = feed
        .into_iter()
        .map(|s| RankedPlayer {
            id: s.player_id,
            name: s.player_name,
        })
        .collect();

    // Validate the feed before any side effect.
    check_distinct(&ranked)?;

    let bye = if ranked.len() % 2 == 1 {
        let selection = select_bye(&ranked, &history);
        let player = ranked.remove(selection.index);

        let mut tx = pool.begin().await?;
        byes::create(&mut *tx, tournament_id, player.id).await?;
        matches::create(
            &mut *tx,
            CreateMatch {
                tournament_id,
                winner_id: player.id,
                loser_id: None,
            },
        )
        .await?;
        tx.commit().await?;

        if selection.kind == ByeKind::Repeat {
            tracing::warn!(
                %tournament_id,
                player_id = %player.id,
                "All players already had a bye; granting a second one"
            );
        }
        tracing::info!(%tournament_id, player_id = %player.id, "Bye committed");

        Some(GrantedBye {
            player,
            kind: selection.kind,
        })
    } else {
        None
    };

    let pairs = pair_round(ranked, &history)?;

    let forced = pairs
        .iter()
        .filter(|p| p.kind == PairKind::ForcedRematch)
        .count();
    if forced > 0 {
        tracing::warn!(%tournament_id, forced, "Round contains forced rematches");
    }
    tracing::info!(%tournament_id, pair_count = pairs.len(), "Round generated");

    Ok(RoundOutcome { bye, pairs })
}
