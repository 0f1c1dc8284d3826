//! Turn-based games.

pub mod tictactoe;
