use uuid::Uuid;

use api::gql::domains::rounds::service::{
    pair_round, select_bye, ByeKind, HistorySnapshot, PairKind, PairingError, RankedPlayer,
};

/// A ranked field of n players, strongest first.
fn field(n: usize) -> Vec<RankedPlayer> {
    (1..=n)
        .map(|i| RankedPlayer {
            id: Uuid::new_v4(),
            name: format!("Player {i}"),
        })
        .collect()
}

fn ids(players: &[RankedPlayer]) -> Vec<Uuid> {
    players.iter().map(|p| p.id).collect()
}

#[test]
fn has_played_is_commutative() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();
    let history = HistorySnapshot::new([(a, b)], []);

    assert!(history.has_played(a, b));
    assert!(history.has_played(b, a));
    assert!(!history.has_played(a, c));
    assert!(!history.has_played(c, a));
}

#[test]
fn eight_players_no_history_pair_adjacent() {
    let players = field(8);
    let id = ids(&players);

    let pairs = pair_round(players, &HistorySnapshot::default()).unwrap();

    assert_eq!(pairs.len(), 4);
    for (i, pair) in pairs.iter().enumerate() {
        assert_eq!(pair.higher.id, id[2 * i]);
        assert_eq!(pair.lower.id, id[2 * i + 1]);
        assert_eq!(pair.kind, PairKind::Clean);
    }
}

#[test]
fn every_player_appears_in_exactly_one_pair() {
    let players = field(12);
    let expected: std::collections::HashSet<Uuid> = ids(&players).into_iter().collect();

    let pairs = pair_round(players, &HistorySnapshot::default()).unwrap();

    assert_eq!(pairs.len(), 6);
    let mut seen = std::collections::HashSet::new();
    for pair in &pairs {
        assert_ne!(pair.higher.id, pair.lower.id, "player paired with itself");
        assert!(seen.insert(pair.higher.id));
        assert!(seen.insert(pair.lower.id));
    }
    assert_eq!(seen, expected);
}

#[test]
fn empty_field_yields_no_pairs() {
    let pairs = pair_round(Vec::new(), &HistorySnapshot::default()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn odd_field_is_rejected() {
    let err = pair_round(field(5), &HistorySnapshot::default()).unwrap_err();
    assert_eq!(err, PairingError::OddFieldSize(5));
}

#[test]
fn duplicate_player_is_rejected() {
    let mut players = field(4);
    players[3] = players[0].clone();
    let dup = players[0].id;

    let err = pair_round(players, &HistorySnapshot::default()).unwrap_err();
    assert_eq!(err, PairingError::DuplicatePlayer(dup));
}

#[test]
fn round_two_avoids_round_one_rematches() {
    let players = field(8);
    let id = ids(&players);

    // Round one: adjacent pairs, odd indices lost.
    let history = HistorySnapshot::new(
        [
            (id[0], id[1]),
            (id[2], id[3]),
            (id[4], id[5]),
            (id[6], id[7]),
        ],
        [],
    );

    // Round-two standings: winners ranked above losers.
    let reorder = [0, 2, 4, 6, 1, 3, 5, 7];
    let standings: Vec<RankedPlayer> = reorder.iter().map(|&i| players[i].clone()).collect();

    let pairs = pair_round(standings, &history).unwrap();

    assert_eq!(pairs.len(), 4);
    for pair in &pairs {
        assert!(
            !history.has_played(pair.higher.id, pair.lower.id),
            "round two reproduced a round-one pairing"
        );
        assert_eq!(pair.kind, PairKind::Clean);
    }
}

#[test]
fn nearest_rematch_free_candidate_is_chosen() {
    let players = field(4);
    let id = ids(&players);

    // Top player already faced the two nearest candidates.
    let history = HistorySnapshot::new([(id[0], id[1]), (id[0], id[2])], []);

    let pairs = pair_round(players, &history).unwrap();

    assert_eq!(pairs[0].higher.id, id[0]);
    assert_eq!(pairs[0].lower.id, id[3]);
    assert_eq!(pairs[0].kind, PairKind::Clean);
    assert_eq!(pairs[1].higher.id, id[1]);
    assert_eq!(pairs[1].lower.id, id[2]);
    assert_eq!(pairs[1].kind, PairKind::Clean);
}

#[test]
fn unavoidable_rematch_is_tagged_forced() {
    let players = field(2);
    let id = ids(&players);
    let history = HistorySnapshot::new([(id[0], id[1])], []);

    let pairs = pair_round(players, &history).unwrap();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].kind, PairKind::ForcedRematch);
}

#[test]
fn forced_rematch_takes_adjacent_player_and_rest_pair_clean() {
    let players = field(4);
    let id = ids(&players);

    // Top player has faced everyone; the rest have clean histories.
    let history = HistorySnapshot::new([(id[0], id[1]), (id[0], id[2]), (id[0], id[3])], []);

    let pairs = pair_round(players, &history).unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].higher.id, id[0]);
    assert_eq!(pairs[0].lower.id, id[1]);
    assert_eq!(pairs[0].kind, PairKind::ForcedRematch);
    assert_eq!(pairs[1].kind, PairKind::Clean);
}

#[test]
fn bye_goes_to_bottom_player_without_prior_byes() {
    let players = field(9);
    let selection = select_bye(&players, &HistorySnapshot::default());

    assert_eq!(selection.index, 8);
    assert_eq!(selection.kind, ByeKind::First);
}

#[test]
fn bye_skips_bottom_player_with_prior_bye() {
    let players = field(9);
    let history = HistorySnapshot::new([], [players[8].id]);

    let selection = select_bye(&players, &history);

    assert_eq!(selection.index, 7);
    assert_eq!(selection.kind, ByeKind::First);
}

#[test]
fn bye_walks_upward_past_every_prior_recipient() {
    let players = field(9);
    let history = HistorySnapshot::new([], [players[8].id, players[7].id, players[6].id]);

    let selection = select_bye(&players, &history);

    assert_eq!(selection.index, 5);
    assert_eq!(selection.kind, ByeKind::First);
}

#[test]
fn second_bye_falls_back_to_bottom_player() {
    let players = field(5);
    let history = HistorySnapshot::new([], ids(&players));

    let selection = select_bye(&players, &history);

    assert_eq!(selection.index, 4);
    assert_eq!(selection.kind, ByeKind::Repeat);
}

#[test]
fn nine_player_round_pairs_the_rest() {
    let mut players = field(9);
    let history = HistorySnapshot::default();

    let selection = select_bye(&players, &history);
    let bye = players.remove(selection.index);

    let pairs = pair_round(players, &history).unwrap();

    assert_eq!(pairs.len(), 4);
    assert!(pairs
        .iter()
        .all(|p| p.higher.id != bye.id && p.lower.id != bye.id));
}
