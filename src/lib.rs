//! Matrix Exercises library - console drills on matrices and lists
//!
//! Eleven small scenarios behind a numbered menu: sequential, random and
//! shuffled fills, element-wise and line sums, a guarded operations menu,
//! two-player tic-tac-toe, a survey tabulation, statistics with a
//! selection sort, keyboard entry and a jagged matrix. Every prompt and
//! line of output is available in English and Spanish.
//!
//! # Architecture
//!
//! - **Console**: validated integer prompts and printers over any reader/writer
//! - **Matrix**: rectangular and jagged integer matrices with reductions
//! - **Games**: tic-tac-toe board, rules and engine
//! - **Survey**: synthetic records and grouped statistics
//! - **Exercises**: the eleven scenarios
//! - **Menu**: the top-level dispatcher
//!
//! # Example
//!
//! ```no_run
//! use matrix_exercises::{AppConfig, Console, run_menu};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let mut rng = config.rng();
//! let stdin = std::io::stdin();
//! let mut console = Console::new(
//!     stdin.lock(),
//!     std::io::stdout(),
//!     *config.language(),
//!     *config.cell_width(),
//! );
//! run_menu(&mut console, &mut rng)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod i18n;
mod matrix;
mod menu;
mod sort;

pub mod exercises;
pub mod games;
pub mod survey;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Console I/O
pub use console::{
    Bounds, Console, ConsoleError, ConsoleErrorKind, DEFAULT_CELL_WIDTH, InputRejection,
    parse_integer,
};

// Crate-level exports - Text
pub use i18n::{Language, Message};

// Crate-level exports - Matrices
pub use matrix::{JaggedMatrix, Matrix, MatrixError};

// Crate-level exports - Menu
pub use menu::{MenuChoice, run_menu, show_menu};

// Crate-level exports - Sorting
pub use sort::selection_sort;

// Crate-level exports - Tic-tac-toe
pub use games::tictactoe::{
    Board, Game, GameStatus, Move, MoveError, Player, Position, Square,
};

// Crate-level exports - Exercises
pub use exercises::{Exercise, ExerciseError};
