//! Mark balance invariant: X moves first, so X leads O by at most one.

use super::Invariant;
use crate::{Board, GameState, Player};
use tracing::warn;

/// Invariant: on every history board, `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a single board.
    pub fn board_holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .all(|entry| Self::board_holds(entry.board()))
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark on every board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::board_holds(&Board::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]).unwrap();
        assert!(MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_two_x_ahead_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }
}
