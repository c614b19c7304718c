//! Property tests over random legal games.

use std::collections::BTreeSet;

use proptest::prelude::*;

use quantum_go::board::{find_groups, liberties, Board};
use quantum_go::core::{BoardSize, Color, Coord, GameConfig, GameState};
use quantum_go::persist::{deserialize_state, serialize_state};
use quantum_go::rules::QuantumEngine;
use quantum_go::source::UniformSource;

/// Play up to `plies` random legal placements, returning the state after
/// each one (the initial state first).
fn random_game(seed: u64, plies: usize) -> Vec<GameState> {
    let engine = QuantumEngine::new();
    let mut source = UniformSource::new(seed);
    let mut state = GameState::new(GameConfig::new(BoardSize::Nine));
    let mut states = vec![state.clone()];

    for _ in 0..plies {
        match engine.play_from(&mut state, &mut source) {
            Ok(Some(_)) => states.push(state.clone()),
            Ok(None) => break,
            Err(err) => panic!("uniform source proposed an illegal move: {err}"),
        }
    }
    states
}

fn every_group_breathes(board: &Board) -> bool {
    Color::ALL
        .iter()
        .all(|&color| find_groups(board, color).iter().all(|g| liberties(board, g) > 0))
}

/// Positions whose stone was placed as half of a completed pair.
fn collapsed_positions(state: &GameState) -> BTreeSet<Coord> {
    let mut collapsed = BTreeSet::new();
    for record in state.ledger().iter() {
        collapsed.remove(&record.position);
        if let (Color::White, Some(b_pos)) = (record.color, record.pending_before) {
            collapsed.insert(b_pos);
            collapsed.insert(record.position);
        }
    }
    collapsed
}

fn boards_mirror(state: &GameState) -> bool {
    let (a, b) = (state.board_a(), state.board_b());
    if !a.same_positions(b) {
        return false;
    }
    let collapsed = collapsed_positions(state);
    a.stones().all(|sa| {
        let Some(sb) = b.get(sa.position) else {
            return false;
        };
        let links_agree = sa.link == sb.link;
        let mutual = !sa.is_entangled() || a.get(sa.link).is_some_and(|p| p.link == sa.position);
        let opposite = !sa.is_entangled() || sa.color != sb.color;
        // Decohered survivors stay swapped; stones never paired stay identical.
        let colors = (sa.color != sb.color) == collapsed.contains(&sa.position);
        links_agree && mutual && opposite && colors
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every group on both boards keeps a liberty after every placement.
    #[test]
    fn prop_liberty_invariant(seed in any::<u64>(), plies in 0usize..40) {
        for state in random_game(seed, plies) {
            prop_assert!(every_group_breathes(state.board_a()));
            prop_assert!(every_group_breathes(state.board_b()));
        }
    }

    /// Position sets, links and colors stay consistent with the pairing
    /// history.
    #[test]
    fn prop_mirror_consistency(seed in any::<u64>(), plies in 0usize..40) {
        for state in random_game(seed, plies) {
            prop_assert!(boards_mirror(&state));
        }
    }

    /// Takeback after N cycles equals the state after N-1 cycles.
    #[test]
    fn prop_takeback_inverts_cycle(seed in any::<u64>(), cycles in 1usize..15) {
        let engine = QuantumEngine::new();
        let states = random_game(seed, cycles * 2);
        let last = states.len() - 1;
        prop_assume!(last >= 2);

        let mut state = states[last].clone();
        engine.takeback(&mut state).unwrap();
        prop_assert_eq!(&state, &states[last - 2]);
    }

    /// Scoring is pure and deterministic.
    #[test]
    fn prop_scoring_deterministic(seed in any::<u64>(), plies in 0usize..40) {
        let engine = QuantumEngine::new();
        let states = random_game(seed, plies);
        let state = states.last().unwrap();
        let before = state.clone();
        prop_assert_eq!(engine.current_score(state), engine.current_score(state));
        prop_assert_eq!(state, &before);
    }

    /// Snapshots of reachable states always validate and restore equal.
    #[test]
    fn prop_snapshot_round_trip(seed in any::<u64>(), plies in 0usize..30) {
        let states = random_game(seed, plies);
        let state = states.last().unwrap();
        let json = serialize_state(state).to_json().unwrap();
        let restored = deserialize_state(quantum_go::Snapshot::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(&restored, state);
    }

    /// Same seed, same game.
    #[test]
    fn prop_games_replay(seed in any::<u64>()) {
        prop_assert_eq!(random_game(seed, 20), random_game(seed, 20));
    }
}
