//! Unbeatable tic-tac-toe.
//!
//! A pure game core: a 3x3 board with turn state, and a minimax move
//! selector that plays perfectly. Presentation is an external concern —
//! any front end (terminal, graphical, or a headless test harness) drives
//! the same small synchronous API.
//!
//! # Example
//!
//! ```
//! use oxo::{best_move, Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(4, Player::X)?;
//!
//! // The computer plays O.
//! let reply = best_move(game.board(), Player::O)?;
//! game.apply_move(reply, Player::O)?;
//!
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod rules;
mod search;

pub use board::{Board, Player, Square};
pub use error::{MoveError, ParseBoardError, SearchError};
pub use game::Game;
pub use rules::Outcome;
pub use search::best_move;
