//! MCTS integration tests.

use tictactoe_search::core::{GameState, Move, Outcome};
use tictactoe_search::mcts::{MctsConfig, MonteCarloSearch};
use tictactoe_search::minimax::ExhaustiveSearch;
use tictactoe_search::play::{play_match, SelfPlayConfig};
use tictactoe_search::search::{MoveSelector, SearchError};
use tracing_subscriber::EnvFilter;

/// Route search logs to the test harness; set `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Exact value of the position after playing `mv`.
fn value_after(state: &GameState, mv: Move) -> i32 {
    let mut next = *state;
    next.apply_move(mv).unwrap();
    if next.is_terminal() {
        return next.utility();
    }
    ExhaustiveSearch::new().evaluate(&mut next, 9).unwrap().0
}

/// Exact value of `state` itself.
fn value_of(state: &GameState) -> i32 {
    let mut state = *state;
    ExhaustiveSearch::new().evaluate(&mut state, 9).unwrap().0
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_mcts_returns_legal_move() {
    let state = GameState::default();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    let mv = search.search(&state, 100).unwrap();

    assert!(state.legal_moves().contains(&mv));
}

#[test]
fn test_mcts_with_low_iterations() {
    let state: GameState = "XO..X..O.".parse().unwrap();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    // Even with a couple of iterations, should return something
    let mv = search.search(&state, 2).unwrap();

    assert!(state.legal_moves().contains(&mv));
}

#[test]
fn test_mcts_terminal_root() {
    let mut state: GameState = "XOXXOOOXX".parse().unwrap();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    assert_eq!(search.select_move(&mut state, 100), Err(SearchError::NoLegalMove));
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_mcts_deterministic_with_seed() {
    let config = MctsConfig::default().with_seed(12345);
    let state: GameState = "X...O....".parse().unwrap();

    let mut search1 = MonteCarloSearch::new(config.clone());
    let mut search2 = MonteCarloSearch::new(config);

    let mv1 = search1.search(&state, 500);
    let mv2 = search2.search(&state, 500);

    assert_eq!(mv1, mv2, "Same seed should produce same move");
    assert_eq!(search1.root_visits(), search2.root_visits());
    assert_eq!(search1.tree().stats(), search2.tree().stats());
}

#[test]
fn test_mcts_repeated_search_continues_rng_stream() {
    // A second search on the same context consumes fresh rollouts but still
    // returns a legal move and rebuilds the tree from scratch.
    let state = GameState::default();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    search.search(&state, 300).unwrap();
    let mv = search.search(&state, 300).unwrap();

    assert!(state.legal_moves().contains(&mv));
    assert_eq!(search.tree().root_node().visits, 300);
}

// =============================================================================
// Convergence Tests
// =============================================================================

#[test]
fn test_mcts_not_losing_from_empty_board() {
    let state = GameState::default();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    let mv = search.search(&state, 800).unwrap();

    assert_eq!(value_after(&state, mv), value_of(&state));
}

#[test]
fn test_mcts_blocks_immediate_threat() {
    // X threatens the top row; every O move except 2 loses.
    let state: GameState = "XX..O....".parse().unwrap();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    let mv = search.search(&state, 3000).unwrap();

    assert_eq!(mv, Move::new(2));
    assert_eq!(value_after(&state, mv), value_of(&state));
}

#[test]
fn test_mcts_visits_concentrate_on_win() {
    let state: GameState = "OO.XX.X..".parse().unwrap();
    let mut search = MonteCarloSearch::new(MctsConfig::default());

    let mv = search.search(&state, 1000).unwrap();
    let visits = search.root_visits();
    let win_visits = visits
        .iter()
        .find(|(m, _)| *m == Move::new(2))
        .map(|&(_, v)| v)
        .unwrap();

    assert_eq!(mv, Move::new(2));
    assert!(win_visits > 500, "visits: {visits:?}");
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_minimax_never_loses_to_mcts() {
    init_tracing();
    let mut minimax = ExhaustiveSearch::new();
    let mut mcts = MonteCarloSearch::new(MctsConfig::default());

    let config = SelfPlayConfig::default().with_x_budget(9).with_o_budget(200);
    let record = play_match(&mut minimax, &mut mcts, &config).unwrap();

    assert_ne!(record.outcome, Outcome::OWins);
    assert!(record.final_state.is_terminal());
}
