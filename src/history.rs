//! History snapshots and the move list built from them.

use super::action::Move;
use super::types::Board;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of the board after one step of the game.
///
/// The first entry of every history holds an empty board and no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// Board as it stood after `last_move`.
    board: Board,
    /// The move that produced this board; `None` for game start.
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Label used in a move list for the entry at `step`.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(mov) if step > 0 => format!("Go to move #{} {}", step, mov.coordinates()),
            _ => "Go to game start".to_string(),
        }
    }
}

/// One line of a move list: a history step a player can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveListItem {
    /// Index into the history.
    step: usize,
    /// Human-readable label for the step.
    label: String,
    /// Whether this step is the one currently displayed.
    is_current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_start_label() {
        assert_eq!(HistoryEntry::start().label(0), "Go to game start");
    }

    #[test]
    fn test_move_label_uses_one_based_coordinates() {
        let entry = HistoryEntry::new(
            Board::new(),
            Some(Move::new(Player::X, Position::BottomLeft)),
        );
        assert_eq!(entry.label(3), "Go to move #3 (3,1)");
    }
}
