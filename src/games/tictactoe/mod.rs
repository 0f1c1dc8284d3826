//! Two-player tic-tac-toe: board, rules and engine.

mod action;
mod game;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use types::{Board, Player, Position, Square};
