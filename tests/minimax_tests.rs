//! Minimax and alpha-beta integration tests.

use proptest::prelude::*;

use tictactoe_search::core::{GameState, Marker, Move, Outcome};
use tictactoe_search::minimax::{ExhaustiveSearch, PrunedSearch};
use tictactoe_search::play::{play_game, SelfPlayConfig};
use tictactoe_search::search::{MoveSelector, SearchError};

/// Non-terminal position reached by the choices (each taken modulo the number
/// of legal moves), or `None` if the game ended first.
fn position(choices: &[usize]) -> Option<GameState> {
    let mut state = GameState::default();
    for &choice in choices {
        let legal = state.legal_moves();
        state.apply_move(legal[choice % legal.len()]).ok()?;
        if state.is_terminal() {
            return None;
        }
    }
    Some(state)
}

// =============================================================================
// Equivalence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_pruned_matches_exhaustive(
        choices in prop::collection::vec(0usize..9, 1..7),
        depth in 0u32..=9,
    ) {
        let state = position(&choices);
        prop_assume!(state.is_some());
        let mut state = state.unwrap();

        let mut exhaustive = ExhaustiveSearch::new();
        let mut pruned = PrunedSearch::new();

        let expected = exhaustive.evaluate(&mut state, depth).unwrap();
        let actual = pruned.evaluate(&mut state, depth).unwrap();

        prop_assert_eq!(actual, expected);
        prop_assert!(pruned.nodes_visited() <= exhaustive.nodes_visited());
    }

    #[test]
    fn test_depth_zero_is_one_ply(choices in prop::collection::vec(0usize..9, 0..7)) {
        let state = if choices.is_empty() {
            Some(GameState::default())
        } else {
            position(&choices)
        };
        prop_assume!(state.is_some());
        let mut state = state.unwrap();
        let before = state;

        let mut search = ExhaustiveSearch::new();
        let zero = search.select_move(&mut state, 0).unwrap();
        let zero_nodes = search.nodes_visited();
        let one = search.select_move(&mut state, 1).unwrap();

        prop_assert_eq!(zero, one);
        prop_assert_eq!(zero_nodes, search.nodes_visited());
        prop_assert_eq!(zero_nodes, 1 + state.legal_moves().len() as u64);
        prop_assert_eq!(state, before);
    }
}

// =============================================================================
// Node Counts
// =============================================================================

#[test]
fn test_full_game_tree_size() {
    let mut state = GameState::default();
    let mut search = ExhaustiveSearch::new();

    let (value, _) = search.evaluate(&mut state, 9).unwrap();

    assert_eq!(value, 0);
    assert_eq!(search.nodes_visited(), 549_946);
    assert_eq!(search.stats().max_ply, 9);
    assert_eq!(search.stats().cutoffs, 0);
}

#[test]
fn test_counter_resets_between_calls() {
    let mut state: GameState = "X...O....".parse().unwrap();
    let mut search = ExhaustiveSearch::new();

    search.select_move(&mut state, 9).unwrap();
    let first = search.nodes_visited();
    search.select_move(&mut state, 9).unwrap();

    assert_eq!(first, 7_332);
    assert_eq!(search.nodes_visited(), first);
}

#[test]
fn test_pruning_saves_work_on_empty_board() {
    let mut state = GameState::default();
    let mut pruned = PrunedSearch::new();

    let (value, _) = pruned.evaluate(&mut state, 9).unwrap();

    assert_eq!(value, 0);
    assert!(pruned.nodes_visited() < 549_946 / 10);
    assert!(pruned.stats().cutoffs > 0);
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_both_searches_take_win_over_block() {
    // X can win at 2 or block O's row at 5; winning is the only +1.
    let mut state: GameState = "XX.OO....".parse().unwrap();

    for selector in [
        &mut ExhaustiveSearch::new() as &mut dyn MoveSelector,
        &mut PrunedSearch::new(),
    ] {
        assert_eq!(selector.select_move(&mut state, 9), Ok(Move::new(2)));
    }
}

#[test]
fn test_terminal_state_rejected() {
    let mut state: GameState = "OOOXX.X..".parse().unwrap();
    assert_eq!(state.winner(), Some(Marker::O));

    assert_eq!(
        ExhaustiveSearch::new().select_move(&mut state, 9),
        Err(SearchError::NoLegalMove)
    );
    assert_eq!(
        PrunedSearch::new().select_move(&mut state, 9),
        Err(SearchError::NoLegalMove)
    );
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_full_depth_self_play_draws() {
    let config = SelfPlayConfig::default();

    let record = play_game(&mut ExhaustiveSearch::new(), &config).unwrap();
    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.final_state.utility(), 0);
    assert_eq!(record.len(), 9);

    let pruned = play_game(&mut PrunedSearch::new(), &config).unwrap();
    assert_eq!(pruned.moves, record.moves);
    assert!(pruned.nodes < record.nodes);
}

#[test]
fn test_full_depth_self_play_draws_with_o_starting() {
    let config = SelfPlayConfig::default().with_starting(Marker::O);
    let record = play_game(&mut PrunedSearch::new(), &config).unwrap();

    assert_eq!(record.outcome, Outcome::Draw);
}
