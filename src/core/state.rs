//! Board position and rules.
//!
//! `GameState` is a small `Copy` value: nine cells plus the side to move.
//! The minimax searches mutate one state in place with
//! [`apply_move`](GameState::apply_move) / [`undo_move`](GameState::undo_move)
//! pairs, while MCTS copies snapshots into its tree.
//!
//! ## Undo discipline
//!
//! `undo_move` must be called with the most recently applied move that has not
//! been undone yet (strict stack order). The state does not keep a history, but
//! it rejects the two violations it can observe: undoing an empty cell and
//! undoing a cell that holds the marker of the player to move, which can never
//! be the last move played.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Move, CELL_COUNT};
use super::error::GameError;
use super::player::Marker;

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Legal moves of a position. Never more than nine, so kept inline.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

/// One tic-tac-toe position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    cells: [Option<Marker>; CELL_COUNT],
    to_move: Marker,
}

impl GameState {
    /// Empty board with `starting` to move.
    #[must_use]
    pub const fn new(starting: Marker) -> Self {
        Self {
            cells: [None; CELL_COUNT],
            to_move: starting,
        }
    }

    /// Build a position from a 9-cell board literal, row-major.
    ///
    /// `X`/`O` (either case) are markers, `.`, `-` and `_` are empty cells and
    /// whitespace is ignored, so `"XO. .X. ..O"` is accepted. The marker counts
    /// must be reachable by alternating play with `to_move` next, and at most
    /// one side may own a winning triple.
    pub fn from_board(board: &str, to_move: Marker) -> Result<Self, GameError> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for c in board.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(GameError::InvalidPosition(format!(
                    "board {board:?} has more than {CELL_COUNT} cells"
                )));
            }
            cells[count] = match c {
                '.' | '-' | '_' => None,
                other => Some(Marker::from_symbol(other).ok_or_else(|| {
                    GameError::InvalidPosition(format!("unexpected character {other:?}"))
                })?),
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(GameError::InvalidPosition(format!(
                "board {board:?} has {count} cells, expected {CELL_COUNT}"
            )));
        }

        let state = Self { cells, to_move };
        state.validate()?;
        Ok(state)
    }

    /// Check that the marker counts and winning lines are reachable.
    fn validate(&self) -> Result<(), GameError> {
        let x = self.count(Marker::X);
        let o = self.count(Marker::O);

        let consistent = match (x as isize - o as isize, self.to_move) {
            (0, _) => true,
            (1, Marker::O) => true,
            (-1, Marker::X) => true,
            _ => false,
        };
        if !consistent {
            return Err(GameError::InvalidPosition(format!(
                "{x} X and {o} O markers cannot have {} to move",
                self.to_move
            )));
        }

        if self.owns_line(Marker::X) && self.owns_line(Marker::O) {
            return Err(GameError::InvalidPosition(
                "both sides own a winning line".to_string(),
            ));
        }

        Ok(())
    }

    /// All nine cells, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Marker>; CELL_COUNT] {
        &self.cells
    }

    /// Contents of one cell, `None` for empty or off-board indices.
    #[must_use]
    pub fn cell(&self, mv: Move) -> Option<Marker> {
        self.cells.get(mv.index()).copied().flatten()
    }

    /// Side that moves next.
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Number of cells holding `marker`.
    #[must_use]
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|&&c| c == Some(marker)).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every empty cell, in ascending index order.
    ///
    /// The order is fixed: searches break ties by the first move in this list.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        Move::all().filter(|mv| self.cells[mv.index()].is_none()).collect()
    }

    /// Mark `mv` for the side to move and pass the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if !mv.in_range() || self.cells[mv.index()].is_some() {
            return Err(GameError::InvalidMove { index: mv.0 });
        }
        self.cells[mv.index()] = Some(self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Reverse the most recent [`apply_move`](Self::apply_move).
    pub fn undo_move(&mut self, mv: Move) -> Result<(), GameError> {
        let last_mover = self.to_move.opponent();
        let cell = self.cells.get_mut(mv.index()).ok_or(GameError::InvalidState {
            index: mv.0,
            reason: "cell is off the board",
        })?;

        match *cell {
            None => Err(GameError::InvalidState {
                index: mv.0,
                reason: "cell is empty",
            }),
            Some(marker) if marker != last_mover => Err(GameError::InvalidState {
                index: mv.0,
                reason: "cell holds the marker of the player to move",
            }),
            Some(_) => {
                *cell = None;
                self.to_move = last_mover;
                Ok(())
            }
        }
    }

    /// Whether `marker` fills any winning triple.
    fn owns_line(&self, marker: Marker) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(marker)))
    }

    /// Owner of a completed winning triple, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(m) if self.cells[b] == Some(m) && self.cells[c] == Some(m) => Some(m),
            _ => None,
        })
    }

    /// Whether the game is over: a triple is complete or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(Option::is_some)
    }

    /// +1 if X owns a triple, -1 if O does, 0 otherwise.
    ///
    /// Only meaningful on terminal states; a non-terminal state scores 0.
    #[must_use]
    pub fn utility(&self) -> i32 {
        self.winner().map_or(0, Marker::sign)
    }

    /// Static estimate for a non-terminal state at a depth cutoff.
    ///
    /// Number of triples with two X and no O, minus the number of triples with
    /// two O and no X.
    #[must_use]
    pub fn heuristic(&self) -> i32 {
        LINES
            .iter()
            .map(|line| {
                let x = line.iter().filter(|&&i| self.cells[i] == Some(Marker::X)).count();
                let o = line.iter().filter(|&&i| self.cells[i] == Some(Marker::O)).count();
                match (x, o) {
                    (2, 0) => 1,
                    (0, 2) => -1,
                    _ => 0,
                }
            })
            .sum()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Marker::X)
    }
}

/// Parses a board literal, inferring the side to move from the marker counts.
/// Equal counts mean X moves next.
impl FromStr for GameState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.chars().filter(|c| c.eq_ignore_ascii_case(&'x')).count();
        let o = s.chars().filter(|c| c.eq_ignore_ascii_case(&'o')).count();
        let to_move = if x > o { Marker::O } else { Marker::X };
        Self::from_board(s, to_move)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.map_or('.', Marker::symbol))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Marker::O);

        assert_eq!(state.to_move(), Marker::O);
        assert_eq!(state.occupied_count(), 0);
        assert_eq!(state.legal_moves().len(), 9);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_apply_move_flips_player() {
        let mut state = GameState::default();
        state.apply_move(Move::new(4)).unwrap();

        assert_eq!(state.cell(Move::new(4)), Some(Marker::X));
        assert_eq!(state.to_move(), Marker::O);
        assert!(!state.legal_moves().contains(&Move::new(4)));
    }

    #[test]
    fn test_apply_move_rejects_occupied_and_off_board() {
        let mut state = GameState::default();
        state.apply_move(Move::new(0)).unwrap();

        assert_eq!(
            state.apply_move(Move::new(0)),
            Err(GameError::InvalidMove { index: 0 })
        );
        assert_eq!(
            state.apply_move(Move::new(9)),
            Err(GameError::InvalidMove { index: 9 })
        );
        // Failed moves leave the state untouched.
        assert_eq!(state.to_move(), Marker::O);
        assert_eq!(state.occupied_count(), 1);
    }

    #[test]
    fn test_undo_move_restores_state() {
        let mut state = GameState::default();
        state.apply_move(Move::new(2)).unwrap();
        let before = state;

        state.apply_move(Move::new(6)).unwrap();
        state.undo_move(Move::new(6)).unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_move_rejects_protocol_violations() {
        let mut state = GameState::default();
        assert!(matches!(
            state.undo_move(Move::new(3)),
            Err(GameError::InvalidState { index: 3, .. })
        ));

        state.apply_move(Move::new(0)).unwrap();
        state.apply_move(Move::new(1)).unwrap();
        // X is to move; cell 0 holds X so it cannot be the last move.
        assert!(matches!(
            state.undo_move(Move::new(0)),
            Err(GameError::InvalidState { index: 0, .. })
        ));
        assert!(matches!(
            state.undo_move(Move::new(12)),
            Err(GameError::InvalidState { index: 12, .. })
        ));
    }

    #[test]
    fn test_from_board() {
        let state = GameState::from_board("XO. .X. ..O", Marker::X).unwrap();

        assert_eq!(state.cell(Move::new(0)), Some(Marker::X));
        assert_eq!(state.cell(Move::new(1)), Some(Marker::O));
        assert_eq!(state.cell(Move::new(2)), None);
        assert_eq!(state.occupied_count(), 4);
    }

    #[test]
    fn test_from_board_rejects_bad_input() {
        assert!(GameState::from_board("XX.......", Marker::O).is_err());
        assert!(GameState::from_board("X........", Marker::X).is_err());
        assert!(GameState::from_board("X.......", Marker::O).is_err());
        assert!(GameState::from_board("X........Z", Marker::O).is_err());
        assert!(GameState::from_board("XXXOOO...", Marker::X).is_err());
    }

    #[test]
    fn test_from_str_infers_side_to_move() {
        let state: GameState = "X...O...X".parse().unwrap();
        assert_eq!(state.to_move(), Marker::O);

        let state: GameState = "X...O....".parse().unwrap();
        assert_eq!(state.to_move(), Marker::X);
    }

    #[test]
    fn test_display_round_trips() {
        let state: GameState = "XO..X...O".parse().unwrap();
        let rendered = state.to_string();

        assert_eq!(rendered, "XO.\n.X.\n..O");
        assert_eq!(rendered.parse::<GameState>().unwrap(), state);
    }

    #[test]
    fn test_winner_and_utility() {
        let x_row: GameState = "XXXOO....".parse().unwrap();
        assert!(x_row.is_terminal());
        assert_eq!(x_row.winner(), Some(Marker::X));
        assert_eq!(x_row.utility(), 1);

        let o_diag = GameState::from_board("OXXXO...O", Marker::X).unwrap();
        assert!(o_diag.is_terminal());
        assert_eq!(o_diag.utility(), -1);

        let draw: GameState = "XOXXOOOXX".parse().unwrap();
        assert!(draw.is_terminal());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.utility(), 0);
    }

    #[test]
    fn test_heuristic() {
        assert_eq!(GameState::default().heuristic(), 0);

        // X threatens row 0 and column 0; O's pair on row 1 is blocked by X.
        let state: GameState = "XX.OO.X..".parse().unwrap();
        // Row 0 (X,X,.) +1, column 0 (X,O,X) 0, row 1 (O,O,.) -1,
        // diagonal 2-4-6 (.,O,X) 0.
        assert_eq!(state.heuristic(), 0);

        let state: GameState = "X.X.O....".parse().unwrap();
        assert_eq!(state.heuristic(), 1);
    }
}
