//! Game rules: winning lines, win detection, and derived outcome.
//!
//! Rules are pure functions over a [`Board`] so the move selector and the
//! game engine can share them without sharing state.

use crate::board::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning index triples: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of a game, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Player won the game.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once play can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "game in progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Checks whether `player` has completed any winning line.
///
/// Called once per node visited by the move selector.
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(player))))
}

/// Derives the outcome from board contents.
///
/// X is checked before O: reachable states never have two winners, but the
/// tie-break keeps the result deterministic even for malformed boards.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Player::X) {
        Outcome::Won(Player::X)
    } else if has_won(board, Player::O) {
        Outcome::Won(Player::O)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        for player in <Player as strum::IntoEnumIterator>::iter() {
            assert!(!has_won(&board, player));
        }
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_win_top_row_only_for_x() {
        let board: Board = "XXX......".parse().unwrap();
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_win_column_and_diagonal() {
        let column: Board = "O..O..O..".parse().unwrap();
        assert!(has_won(&column, Player::O));

        let diagonal: Board = "X...X...X".parse().unwrap();
        assert!(has_won(&diagonal, Player::X));
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_detected_before_full() {
        // X wins the bottom row with empty cells remaining; not a draw.
        let board: Board = "O.O...XXX".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_malformed_double_win_prefers_x() {
        // Unreachable board where both players hold a line.
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board: Board = "XX.......".parse().unwrap();
        assert!(!has_won(&board, Player::X));
    }
}
