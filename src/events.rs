//! Input events a front end sends to the game.
//!
//! A front end maps clicks, taps or key presses onto one of two events:
//! a move request naming a square, or a jump request naming a history step.

use super::action::MoveError;
use super::GameState;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request for placing the current player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MoveRequest {
    /// Row on the board (0-2, top to bottom).
    pub row: usize,
    /// Column on the board (0-2, left to right).
    pub col: usize,
}

/// Request for displaying an earlier (or later) history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JumpRequest {
    /// History index; 0 is the game start.
    pub step: usize,
}

/// Any event a front end may send.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::From,
)]
#[serde(untagged)]
pub enum GameEvent {
    /// Place a mark.
    Move(MoveRequest),
    /// Time-travel to a step.
    Jump(JumpRequest),
}

impl GameEvent {
    /// Applies the event to a game.
    #[instrument(skip(game))]
    pub fn apply(&self, game: &mut GameState) -> Result<(), MoveError> {
        match *self {
            GameEvent::Move(MoveRequest { row, col }) => game.apply_move(row, col),
            GameEvent::Jump(JumpRequest { step }) => game.jump_to(step),
        }
    }
}

/// JSON schema describing [`GameEvent`].
#[instrument]
pub fn event_schema() -> serde_json::Value {
    schemars::schema_for!(GameEvent).to_value()
}
