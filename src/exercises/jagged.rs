//! Exercise 11: rows of user-chosen, independent lengths.

use super::ExerciseError;
use crate::console::Console;
use crate::i18n::Message;
use crate::matrix::JaggedMatrix;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Prompts the row count (>= 2) and each row's length (>= 1), fills with `[1, 5]`.
#[instrument(skip(console, rng))]
pub fn jagged<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<JaggedMatrix, ExerciseError> {
    let rows = console.ask_size(Message::JaggedRowCountPrompt, 2, None)?;
    let mut lengths = Vec::new();
    for row in 0..rows {
        lengths.push(console.ask_size(Message::JaggedColumnCountPrompt(row), 1, None)?);
    }
    debug!(?lengths, "Row lengths chosen");

    let matrix = JaggedMatrix::random(&lengths, 1..=5, rng);
    console.say(Message::JaggedTitle)?;
    for (index, values) in matrix.rows().iter().enumerate() {
        console.say(Message::JaggedRow { index, values })?;
    }

    Ok(matrix)
}
