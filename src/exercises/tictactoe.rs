//! Exercise 7: two humans share the keyboard for one tic-tac-toe game.

use super::ExerciseError;
use crate::console::Console;
use crate::games::tictactoe::{Board, Game, GameStatus, MoveError, Position};
use crate::i18n::Message;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Plays until a win or a full board and returns the finished game.
#[instrument(skip(console))]
pub fn tic_tac_toe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Game, ExerciseError> {
    let mut game = Game::new();
    let last = Board::SIZE - 1;

    loop {
        console.say(Message::PlayerTurn(game.to_move()))?;
        console.print_board(game.board())?;

        let row = console.ask_size(Message::BoardRowPrompt, 0, Some(last))?;
        let col = console.ask_size(Message::BoardColumnPrompt, 0, Some(last))?;
        let Some(pos) = Position::new(row, col) else {
            continue;
        };

        match game.make_move(pos) {
            Ok(GameStatus::InProgress) => {}
            Ok(GameStatus::Won(player)) => {
                console.print_board(game.board())?;
                console.say(Message::PlayerWins(player))?;
                break;
            }
            Ok(GameStatus::Draw) => {
                console.print_board(game.board())?;
                console.say(Message::Tie)?;
                break;
            }
            Err(MoveError::SquareOccupied(_)) => console.say(Message::SquareOccupied)?,
            Err(MoveError::GameOver) => {
                debug!("Move after game end ignored");
                break;
            }
        }
    }

    Ok(game)
}
