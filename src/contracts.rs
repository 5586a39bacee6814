//! Preconditions for moves and post-move invariant assertions.
//!
//! Preconditions are checked on every move and reject it before any state
//! changes. Invariants are asserted after the move in debug builds.

use super::action::MoveError;
use super::invariants::{GameStateInvariants, InvariantSet};
use super::rules::check_winner;
use super::{GameState, Position};
use tracing::{instrument, warn};

/// Precondition: the displayed board has no winning line yet.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Rejects moves on a board that already has a winner.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match check_winner(game.current_board()) {
            Some(winner) => Err(MoveError::GameAlreadyWon(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square of the displayed board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: the board is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, winner first.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        BoardUndecided::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

/// Asserts that all game-state invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameStateInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game state invariants violated");
    }
}
