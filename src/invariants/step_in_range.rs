//! Step pointer invariant: the displayed step always names a history entry.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: `step_number < history.len()` and history starts from an
/// empty board with no move.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.history().first() else {
            return false;
        };

        let starts_empty = first.last_move().is_none()
            && first.board().squares().iter().all(|s| *s == Square::Empty);

        starts_empty && game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Step number indexes a history that begins at an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_jump_back() {
        let mut game = GameState::replay(&[(0, 0), (1, 1)]).unwrap();
        game.jump_to(0).unwrap();
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = GameState::new();
        game.step_number = 1;
        assert!(!StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
