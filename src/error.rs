//! Error types for move validation, search, and board parsing.
//!
//! All errors here are local, synchronous, and recoverable: they are
//! propagated to the caller, which decides how to surface a rejection.

use crate::board::Player;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("cell index {} is out of range (valid cells are 0-8)", _0)]
    OutOfRange(usize),

    /// The cell at the index is already occupied.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),

    /// It's not this player's turn.
    #[display("it is not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error that can occur when asking the move selector for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is full; no legal move exists.
    #[display("no move available: the board is full")]
    NoMoveAvailable,
}

impl std::error::Error for SearchError {}

/// Error that can occur when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The string does not have exactly nine cells.
    #[display("expected 9 cells, got {}", _0)]
    BadLength(usize),

    /// A character is not one of `X`, `O`, or `.`.
    #[display("invalid cell character {:?} (expected X, O, or .)", _0)]
    BadCell(char),
}

impl std::error::Error for ParseBoardError {}
