//! Plain-text rendering of a game: board, status line and move list.

use super::GameState;
use tracing::instrument;

/// Renders the displayed board, its status, and the move list.
///
/// The current step is marked with `>` in the move list.
#[instrument(skip(game))]
pub fn render(game: &GameState) -> String {
    let mut out = format!("{}\n\n{}\n", game.current_board(), game.status());
    for item in game.move_list() {
        let marker = if *item.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", item.step(), item.label()));
    }
    out
}
