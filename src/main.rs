//! Terminal front end for the oxo game core.
//!
//! A thin shell: it reads cells from stdin, applies moves through the
//! engine, and asks the move selector for the computer's turn. All game
//! rules live in the library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use oxo::{Board, Game, Outcome, Player, best_move};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { ai, delay_ms } => play(ai, delay_ms),
        Command::Solve {
            board,
            player,
            json,
        } => solve(&board, &player, json),
    }
}

/// Runs the interactive game loop until the player quits.
fn play(ai: bool, delay_ms: u64) -> Result<()> {
    let mut game = Game::new();
    game.set_ai_enabled(ai);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Cells are numbered 0-8. Commands: r = restart, a = toggle AI, q = quit.");
    print_state(&game);

    loop {
        print!("{}> ", game.to_move());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line.context("reading stdin")?;

        match input.trim() {
            "q" => break,
            "r" => {
                game.reset();
                println!("New game.");
                print_state(&game);
            }
            "a" => {
                game.set_ai_enabled(!game.ai_enabled());
                println!(
                    "Computer opponent {}.",
                    if game.ai_enabled() { "on" } else { "off" }
                );
            }
            cell => {
                let Ok(index) = cell.parse::<usize>() else {
                    println!("Enter a cell number 0-8, or r/a/q.");
                    continue;
                };
                if let Err(e) = human_turn(&mut game, index, delay_ms) {
                    println!("{e}");
                    continue;
                }
                print_state(&game);
                if game.outcome().is_terminal() {
                    println!("Play again with r, or quit with q.");
                }
            }
        }
    }

    Ok(())
}

/// Applies the human move and, if the AI is on, the computer's reply.
fn human_turn(game: &mut Game, index: usize, delay_ms: u64) -> Result<()> {
    let player = game.to_move();
    game.apply_move(index, player)?;
    debug!(index, %player, "applied move");

    if game.ai_enabled() && !game.outcome().is_terminal() && game.to_move() == Player::O {
        // Pacing only: the search itself is synchronous and already done
        // by the time the move is applied below.
        std::thread::sleep(Duration::from_millis(delay_ms));
        let reply = best_move(game.board(), Player::O)?;
        game.apply_move(reply, Player::O)?;
        info!(reply, "computer played");
    }

    Ok(())
}

/// Prints the board and, when the game is over, the result.
fn print_state(game: &Game) {
    println!("{}", game.board().display());
    match game.outcome() {
        Outcome::InProgress => {}
        outcome => println!("{outcome}!"),
    }
}

#[derive(Debug, Serialize)]
struct Solution {
    best_move: usize,
    player: Player,
}

/// Parses a board position and prints the optimal move.
fn solve(board: &str, player: &str, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let player = match player.trim() {
        "X" | "x" => Player::X,
        "O" | "o" => Player::O,
        other => bail!("invalid player {other:?} (expected X or O)"),
    };

    let index = best_move(&board, player)?;

    if json {
        let solution = Solution {
            best_move: index,
            player,
        };
        println!("{}", serde_json::to_string(&solution)?);
    } else {
        println!("{index}");
    }

    Ok(())
}
