//! Rewind Tic-Tac-Toe - game state with move history and time travel
//!
//! Every move appends a snapshot of the board to the game's history.
//! A front end can jump to any earlier snapshot for review, and making a
//! move from there starts a new branch, discarding the snapshots after it.
//!
//! # Architecture
//!
//! - **Game state**: history of snapshots, displayed step, derived turn
//! - **Rules**: win detection over the eight lines, draw helpers
//! - **Invariants**: properties checked after every move in debug builds
//! - **Events**: serde types for the move and jump requests a front end sends
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, MoveError, Player};
//!
//! let mut game = GameState::new();
//! game.apply_move(0, 0)?;
//! game.apply_move(1, 1)?;
//! assert!(game.is_next_player_x());
//!
//! game.jump_to(1)?;
//! game.apply_move(2, 2)?;
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.current_winner(), None::<Player>);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod events;
mod game;
mod history;
mod position;
mod types;

// Public modules
pub mod invariants;
pub mod rules;
pub mod transcript;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use position::Position;
pub use types::{Board, Player, Square};

/// Alias for a board square: empty or holding a mark.
pub type Cell = Square;

// Crate-level exports - Game state
pub use game::{GameState, GameStatus};
pub use history::{HistoryEntry, MoveListItem};

// Crate-level exports - Preconditions
pub use contracts::{BoardUndecided, LegalMove, SquareIsEmpty};

// Crate-level exports - Events
pub use events::{GameEvent, JumpRequest, MoveRequest, event_schema};
