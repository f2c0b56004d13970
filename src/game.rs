//! The game engine: board, turn state, and the move lifecycle.

use crate::board::{Board, Player, Square};
use crate::error::MoveError;
use crate::rules::{self, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A tic-tac-toe game.
///
/// Owns the board, the turn state, and the AI-mode flag. The outcome is
/// never stored: it is derived from board contents on every query, so it
/// cannot diverge from the board.
///
/// The engine validates and applies moves for both players; it does not
/// schedule the computer's turn. A front end asks [`crate::best_move`] for
/// the computer's move and applies it through [`Game::apply_move`] like any
/// other move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    ai_enabled: bool,
}

impl Game {
    /// Creates a new game with an empty board, X to move, AI disabled.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            ai_enabled: false,
        }
    }

    /// Starts a new game: clears the board and gives the turn to X.
    ///
    /// The AI-mode flag is a session setting and survives the reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns whether the computer opponent is enabled.
    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// Enables or disables the computer opponent.
    ///
    /// Consulted only by the front end; the engine itself treats every move
    /// the same way regardless of who chose it.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
    }

    /// Applies `player`'s move at `index`.
    ///
    /// On success the cell bears `player`'s mark and the turn passes to the
    /// opponent. A failed call never mutates the board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfRange`] if `index` is not in 0-8.
    /// - [`MoveError::WrongPlayer`] if it is not `player`'s turn.
    /// - [`MoveError::Occupied`] if the cell is already marked.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if index >= Board::CELLS {
            return Err(MoveError::OutOfRange(index));
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::Occupied(index));
        }

        self.board.set(index, Square::Occupied(player));
        self.to_move = player.opponent();
        Ok(())
    }

    /// Derives the current outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
