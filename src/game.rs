//! Game state with move history and time travel.
//!
//! The state is a list of board snapshots plus a pointer to the displayed
//! one. Moving from an earlier snapshot discards every later snapshot and
//! starts a new branch from there.

use super::action::{Move, MoveError};
use super::contracts::{LegalMove, assert_invariants};
use super::history::{HistoryEntry, MoveListItem};
use super::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the displayed board.
///
/// A full board without a winner still reports `InProgress`; use
/// [`crate::rules::is_draw`] to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winning line yet.
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// The displayed board has a winning line.
    Won(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won(winner) => write!(f, "Winner: {winner}"),
        }
    }
}

/// Complete game state: every snapshot so far and the displayed step.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `step_number < history.len()`
/// - the player to move is X on even steps, O on odd steps
///
/// Deserialization checks every invariant and rejects states that break one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step_number: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step_number: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            step_number: raw.step_number,
        };
        GameStateInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected game state");
            InvariantViolation::new(descriptions)
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game: one empty board, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step_number: 0,
        }
    }

    /// Replays `(row, col)` moves from a new game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &(row, col) in moves {
            game.apply_move(row, col)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Any history after the displayed step is discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is greater than 2
    /// - [`MoveError::GameAlreadyWon`] if the displayed board has a winner
    /// - [`MoveError::CellOccupied`] if the square is taken
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let Some(position) = Position::from_row_col(row, col) else {
            warn!(row, col, "Rejected move outside the board");
            return Err(MoveError::OutOfBounds { row, col });
        };
        self.apply(position)
    }

    /// Places the current player's mark at a named position.
    ///
    /// Same semantics as [`GameState::apply_move`].
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply(&mut self, position: Position) -> Result<(), MoveError> {
        if let Err(err) = LegalMove::check(position, self) {
            warn!(%err, "Rejected move");
            return Err(err);
        }

        let player = self.next_player();
        let mut board = self.current_board().clone();
        board.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history
            .push(HistoryEntry::new(board, Some(Move::new(player, position))));
        self.step_number = self.history.len() - 1;

        debug!(
            %player,
            %position,
            step = self.step_number,
            discarded,
            "Move applied"
        );

        assert_invariants(self);
        Ok(())
    }

    /// Displays the snapshot at `step` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if `step >= history.len()`.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside history");
            return Err(MoveError::StepOutOfRange { step, len });
        }
        self.step_number = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Returns the displayed board.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Returns the winner on the displayed board, if any.
    pub fn current_winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns true if X moves next (the displayed step is even).
    pub fn is_next_player_x(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Returns the player to move on the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Returns the full history, including any steps after the displayed one.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the status of the displayed board.
    pub fn status(&self) -> GameStatus {
        match self.current_winner() {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Returns the positions a move may be made on.
    ///
    /// Empty once the displayed board is won.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Builds the move list: one item per history step.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListItem::new(step, entry.label(step), step == self.step_number)
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.is_next_player_x());
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_apply_records_move_and_flips_turn() {
        let mut game = GameState::new();
        game.apply_move(1, 2).unwrap();

        assert_eq!(game.step_number(), 1);
        assert!(!game.is_next_player_x());
        assert_eq!(
            game.current_board().get(Position::MiddleRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(
            game.history()[1].last_move(),
            &Some(Move::new(Player::X, Position::MiddleRight))
        );
    }

    #[test]
    fn test_out_of_bounds_leaves_state_untouched() {
        let mut game = GameState::replay(&[(0, 0)]).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameState::replay(&[(0, 0), (1, 1), (2, 2)]).unwrap();
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step_number(), 1);
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameState::replay(&[(0, 0)]).unwrap();
        assert_eq!(
            game.jump_to(2),
            Err(MoveError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_won_board_has_no_valid_moves() {
        let game = GameState::replay(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            GameStatus::InProgress { next: Player::O }.to_string(),
            "Next player: O"
        );
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let result = serde_json::from_str::<GameState>(r#"{"history":[],"step_number":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Step number"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_dangling_step() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["step_number"] = 4.into();
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_history() {
        let mut json = serde_json::to_value(GameState::replay(&[(0, 0)]).unwrap()).unwrap();
        json["history"][1]["board"]["squares"][4] = serde_json::json!({ "Occupied": "X" });
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_played_game() {
        let mut game = GameState::replay(&[(0, 0), (1, 1), (2, 2)]).unwrap();
        game.jump_to(1).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.current_winner(), None);
    }

    #[test]
    fn test_move_list_marks_current_step() {
        let mut game = GameState::replay(&[(0, 0), (2, 1)]).unwrap();
        game.jump_to(1).unwrap();
        let list = game.move_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].label(), "Go to game start");
        assert_eq!(list[2].label(), "Go to move #2 (3,2)");
        assert!(*list[1].is_current());
        assert!(!*list[2].is_current());
    }
}
