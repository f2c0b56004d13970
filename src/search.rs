//! Move selection by exhaustive minimax search.
//!
//! The search explores every remaining line of play, at most nine plies
//! deep, scoring terminal states relative to the maximizing player. All
//! hypothetical placements happen on a scratch copy of the board; the
//! caller's board is never touched.

use crate::board::{Board, Player, Square};
use crate::error::SearchError;
use crate::rules;
use tracing::{debug, instrument};

/// Score of a won game at the search root. Subtracting depth rewards
/// faster wins and slower losses among otherwise equal lines.
const WIN_SCORE: i32 = 10;

/// Computes the optimal move for `player`, assuming optimal adversarial
/// play from the opponent thereafter.
///
/// Every empty cell is tried in ascending index order and scored by
/// `minimax` with the opponent to move; the cell with the strictly
/// greatest score wins, so ties keep the first-found index and the result
/// is reproducible.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the board is full.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Result<usize, SearchError> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_index = None;

    for index in 0..Board::CELLS {
        if !scratch.is_empty(index) {
            continue;
        }
        scratch.set(index, Square::Occupied(player));
        let score = minimax(&mut scratch, player, 0, false);
        scratch.set(index, Square::Empty);

        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    match best_index {
        Some(index) => {
            debug!(index, score = best_score, %player, "selected move");
            Ok(index)
        }
        None => Err(SearchError::NoMoveAvailable),
    }
}

/// Returns the best achievable score for `maximizer` from this position.
///
/// `depth` counts plies from the root of the current search; `maximizing`
/// says whether the player to move at this ply is the maximizer. Terminal
/// scores are `WIN_SCORE - depth` for a maximizer win, `depth - WIN_SCORE`
/// for a loss, and `0` for a full board.
fn minimax(board: &mut Board, maximizer: Player, depth: i32, maximizing: bool) -> i32 {
    if rules::has_won(board, maximizer) {
        return WIN_SCORE - depth;
    }
    if rules::has_won(board, maximizer.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..Board::CELLS {
        if !board.is_empty(index) {
            continue;
        }
        board.set(index, Square::Occupied(mark));
        let score = minimax(board, maximizer, depth + 1, !maximizing);
        board.set(index, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
