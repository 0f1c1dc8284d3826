//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); the engine in
//! [`game`](super::Game) applies them after each placement.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_winner};
