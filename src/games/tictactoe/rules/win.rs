//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// Every row, column and both diagonals as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns true if `player` holds a complete row, column or diagonal.
#[instrument(skip(board))]
pub fn has_winner(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board.rows()[r][c] == target))
}

/// Returns the player holding a complete line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_winner(board, player))
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    fn place(board: &mut Board, row: usize, col: usize, player: Player) {
        board.set(Position::new(row, col).unwrap(), Square::Occupied(player));
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_winner(&board, Player::X));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        place(&mut board, 0, 0, Player::X);
        place(&mut board, 0, 1, Player::X);
        place(&mut board, 0, 2, Player::X);
        place(&mut board, 1, 1, Player::O);
        place(&mut board, 2, 2, Player::O);
        assert!(has_winner(&board, Player::X));
        assert!(!has_winner(&board, Player::O));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for row in 0..3 {
            place(&mut board, row, 2, Player::O);
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        place(&mut board, 0, 2, Player::O);
        place(&mut board, 1, 1, Player::O);
        place(&mut board, 2, 0, Player::O);
        assert!(has_winner(&board, Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        place(&mut board, 0, 0, Player::X);
        place(&mut board, 0, 1, Player::X);
        assert_eq!(check_winner(&board), None);
    }
}
