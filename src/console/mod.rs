//! Line-based terminal I/O: prompts, validated integers and printers.

mod error;
mod input;

pub use error::{ConsoleError, ConsoleErrorKind};
pub use input::{Bounds, InputRejection, parse_integer};

use crate::games::tictactoe::Board;
use crate::i18n::{Language, Message};
use crate::matrix::Matrix;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Default right-alignment width of matrix cells.
pub const DEFAULT_CELL_WIDTH: usize = 4;

/// Prompt/response channel over any reader and writer.
///
/// The binary wires this to stdin/stdout; tests use an in-memory cursor
/// and a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    language: Language,
    cell_width: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console speaking `language`.
    pub fn new(input: R, output: W, language: Language, cell_width: usize) -> Self {
        Self {
            input,
            output,
            language,
            cell_width,
        }
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a message followed by a newline.
    pub fn say(&mut self, message: Message<'_>) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message.render(self.language))?;
        Ok(())
    }

    /// Prints an empty line.
    pub fn blank_line(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompts until the reply is an integer within `bounds`.
    ///
    /// Each refused reply prints its own message (not a number, too small,
    /// too large) and the prompt repeats. End of input is reported as
    /// [`ConsoleErrorKind::InputClosed`].
    #[instrument(skip(self, prompt))]
    pub fn ask_integer(&mut self, prompt: Message<'_>, bounds: Bounds) -> Result<i64, ConsoleError> {
        loop {
            write!(self.output, "{}", prompt.render(self.language))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input while prompting");
                writeln!(self.output)?;
                return Err(ConsoleError::new(ConsoleErrorKind::InputClosed));
            }

            match parse_integer(&line, bounds) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(%rejection, input = line.trim(), "Input rejected");
                    self.say(rejection.message())?;
                }
            }
        }
    }

    /// Prompts for a non-negative size or index in `[minimum, maximum]`.
    #[instrument(skip(self, prompt))]
    pub fn ask_size(
        &mut self,
        prompt: Message<'_>,
        minimum: usize,
        maximum: Option<usize>,
    ) -> Result<usize, ConsoleError> {
        let min = minimum as i64;
        let bounds = match maximum {
            Some(max) => Bounds::between(min, max as i64),
            None => Bounds::at_least(min),
        };
        let value = self.ask_integer(prompt, bounds)?;
        usize::try_from(value).map_err(|_| ConsoleError::new(ConsoleErrorKind::Overflow(value)))
    }

    /// Prints a matrix with aligned columns, then a blank line.
    pub fn print_matrix(&mut self, matrix: &Matrix) -> Result<(), ConsoleError> {
        if !matrix.rows().is_empty() {
            writeln!(self.output, "{}", matrix.render(self.cell_width))?;
        }
        self.blank_line()
    }

    /// Prints the tic-tac-toe board, then a blank line.
    pub fn print_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", board.display())?;
        self.blank_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Language::English,
            DEFAULT_CELL_WIDTH,
        )
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut c = console("abc\n-1\n9\n4\n");
        let value = c.ask_integer(Message::ChooseOption, Bounds::between(0, 6)).unwrap();
        assert_eq!(value, 4);

        let out = output(c);
        assert_eq!(out.matches("Choose an option: ").count(), 4);
        assert!(out.contains("Invalid input. You must enter a whole number."));
        assert!(out.contains("The value must be >= 0."));
        assert!(out.contains("The value must be <= 6."));
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let mut c = console("x\n");
        let err = c.ask_integer(Message::ChooseOption, Bounds::any()).unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_ask_size_honours_minimum() {
        let mut c = console("0\n3\n");
        assert_eq!(c.ask_size(Message::RowCountPrompt, 1, None).unwrap(), 3);
        assert!(output(c).contains("The value must be >= 1."));
    }

    #[test]
    fn test_print_matrix_adds_blank_line() {
        let mut c = console("");
        c.print_matrix(&Matrix::sequential(2, 2)).unwrap();
        assert_eq!(output(c), "   1    2\n   3    4\n\n");
    }
}
