//! Tests for the unbeatable-AI properties of the move selector.

use oxo::{Board, Game, Outcome, Player, SearchError, best_move};

/// Plays a game to completion with both sides choosing optimally.
fn optimal_self_play(mut game: Game) -> Outcome {
    while game.outcome() == Outcome::InProgress {
        let player = game.to_move();
        let index = best_move(game.board(), player).expect("non-terminal board has a move");
        game.apply_move(index, player).expect("selected move is legal");
    }
    game.outcome()
}

#[test]
fn test_optimal_self_play_from_empty_is_a_draw() {
    let outcome = optimal_self_play(Game::new());
    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn test_o_never_loses_after_any_x_opening() {
    for opening in 0..9 {
        let mut game = Game::new();
        game.apply_move(opening, Player::X).expect("valid opening");
        let outcome = optimal_self_play(game);
        assert_ne!(
            outcome,
            Outcome::Won(Player::X),
            "O lost after X opened at {opening}"
        );
    }
}

#[test]
fn test_o_punishes_a_greedy_opponent() {
    // X plays the first empty cell every turn; optimal O must not lose,
    // and against this opponent it wins outright.
    let mut game = Game::new();
    while game.outcome() == Outcome::InProgress {
        let player = game.to_move();
        let index = match player {
            Player::X => game
                .board()
                .empty_cells()
                .next()
                .expect("non-terminal board has an empty cell"),
            Player::O => best_move(game.board(), Player::O).expect("move available"),
        };
        game.apply_move(index, player).expect("legal move");
    }
    assert_eq!(game.outcome(), Outcome::Won(Player::O));
}

#[test]
fn test_never_picks_a_losing_move_when_avoidable() {
    // X threatens two in a row everywhere it can; after X takes 0 and 1,
    // any O move other than 2 loses immediately.
    let mut game = Game::new();
    game.apply_move(0, Player::X).unwrap();
    game.apply_move(4, Player::O).unwrap();
    game.apply_move(1, Player::X).unwrap();

    let index = best_move(game.board(), Player::O).expect("move available");
    assert_eq!(index, 2);
}

#[test]
fn test_full_board_yields_no_move() {
    let board: Board = "XOXXOOOXX".parse().expect("valid board");
    assert_eq!(
        best_move(&board, Player::O),
        Err(SearchError::NoMoveAvailable)
    );
}

#[test]
fn test_selection_is_deterministic() {
    let board: Board = "X...O....".parse().expect("valid board");
    let first = best_move(&board, Player::X);
    for _ in 0..3 {
        assert_eq!(best_move(&board, Player::X), first);
    }
}
