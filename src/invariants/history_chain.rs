//! History chain invariant: each snapshot is its predecessor plus one move.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: entry `i > 0` differs from entry `i - 1` in exactly the
/// square named by its `last_move`, which holds the mark of the player
/// to move at step `i - 1`.
pub struct HistoryChainInvariant;

impl Invariant<GameState> for HistoryChainInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let Some(mov) = after.last_move() else {
                    return false;
                };

                let expected = Player::for_step(prev_step);
                let changed: Vec<usize> = before
                    .board()
                    .squares()
                    .iter()
                    .zip(after.board().squares())
                    .enumerate()
                    .filter(|(_, (a, b))| a != b)
                    .map(|(idx, _)| idx)
                    .collect();

                mov.player == expected
                    && changed == [mov.position.to_index()]
                    && before.board().get(mov.position) == Square::Empty
                    && after.board().get(mov.position) == Square::Occupied(expected)
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly its recorded move to the previous board"
    }
}
