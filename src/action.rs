//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move records who played
//! and where, so every history snapshot can name the move that produced it.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the 0-indexed row.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Returns the 0-indexed column.
    pub fn col(&self) -> usize {
        self.position.col()
    }

    /// Coordinates as shown to players: 1-based, `(row,col)`.
    pub fn coordinates(&self) -> String {
        format!("({},{})", self.row() + 1, self.col() + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinates())
    }
}

/// Error that can occur when applying a move or travelling through history.
///
/// Every variant is a local validation failure. The game state is left
/// untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside `0..=2`.
    #[display("Position ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winning line.
    #[display("Game is already won by {}", _0)]
    GameAlreadyWon(#[error(not(source))] Player),

    /// The requested history step does not exist.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_one_based() {
        let mov = Move::new(Player::O, Position::MiddleRight);
        assert_eq!(mov.coordinates(), "(2,3)");
        assert_eq!(mov.to_string(), "O -> (2,3)");
    }

    #[test]
    fn test_errors_have_no_source() {
        use std::error::Error;

        let errors = [
            MoveError::OutOfBounds { row: 0, col: 9 },
            MoveError::CellOccupied(Position::Center),
            MoveError::GameAlreadyWon(Player::O),
            MoveError::StepOutOfRange { step: 1, len: 1 },
        ];
        for err in errors {
            assert!(err.source().is_none(), "{err}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OutOfBounds { row: 3, col: 1 }.to_string(),
            "Position (3, 1) is outside the board"
        );
        assert!(
            MoveError::CellOccupied(Position::Center)
                .to_string()
                .contains("occupied")
        );
        assert_eq!(
            MoveError::StepOutOfRange { step: 4, len: 2 }.to_string(),
            "Step 4 is out of range (history has 2 entries)"
        );
    }
}
