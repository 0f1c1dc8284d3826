//! Top-level exercise menu.

use crate::console::{Bounds, Console, ConsoleError};
use crate::exercises::{Exercise, ExerciseError};
use crate::i18n::Message;
use rand::Rng;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{error, info, instrument};

/// Highest menu number.
const LAST_OPTION: i64 = 11;

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the program.
    Exit,
    /// Run one exercise.
    Run(Exercise),
}

impl MenuChoice {
    /// Maps a validated menu number; 0 and anything unknown mean exit.
    pub fn from_number(number: i64) -> Self {
        u8::try_from(number)
            .ok()
            .and_then(Exercise::from_number)
            .map_or(MenuChoice::Exit, MenuChoice::Run)
    }
}

/// Prints the numbered menu.
pub fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    console.say(Message::MenuHeader)?;
    for exercise in Exercise::iter() {
        console.say(Message::MenuEntry(exercise))?;
    }
    console.say(Message::MenuExit)?;
    console.say(Message::MenuFooter)
}

/// Shows the menu and runs exercises until the user exits or input ends.
///
/// Returns the number of exercises run.
#[instrument(skip(console, rng))]
pub fn run_menu<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<usize, ConsoleError> {
    let mut runs = 0;

    loop {
        show_menu(console)?;
        let number = match console.ask_integer(Message::ChooseExercise, Bounds::between(0, LAST_OPTION)) {
            Ok(number) => number,
            Err(err) if err.is_input_closed() => break,
            Err(err) => return Err(err),
        };

        let exercise = match MenuChoice::from_number(number) {
            MenuChoice::Exit => break,
            MenuChoice::Run(exercise) => exercise,
        };

        runs += 1;
        match exercise.run(console, rng) {
            Ok(()) => {}
            Err(err) if err.is_input_closed() => {
                info!(?exercise, "Input closed during exercise");
                break;
            }
            Err(ExerciseError::Console(err)) => return Err(err),
            Err(ExerciseError::Matrix(err)) => {
                error!(%err, ?exercise, "Exercise aborted");
            }
        }
    }

    info!(runs, "Leaving menu");
    console.say(Message::Goodbye)?;
    Ok(runs)
}
