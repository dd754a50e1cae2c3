//! Terminal xiangqi: human against the minimax AI (or a random mover).
//!
//! Reads commands from stdin, one per line. `help` prints the command
//! summary; a bare move like `b0c2` moves the piece on b0 to c2.

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Command;
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};
use xiangqi_ai::Minimax;
use xiangqi_core::{Color, MoveRecord};
use xiangqi_engine::Game;

#[derive(Parser)]
#[command(name = "xiangqi-cli")]
#[command(about = "Play xiangqi in the terminal")]
struct Cli {
    /// Search depth of the minimax opponent, in plies
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Which side the human plays
    #[arg(long, value_enum, default_value = "red")]
    play: Side,

    /// Opponent strategy
    #[arg(long, value_enum, default_value = "minimax")]
    opponent: Opponent,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Red,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Red => Color::Red,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Iterative-deepening minimax with alpha-beta pruning
    Minimax,
    /// Uniformly random legal moves
    Random,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let human: Color = cli.play.into();
    let ai = Minimax::new(cli.depth);
    let mut game = Game::new();

    println!("{}", game);
    print_help();

    let stdin = io::stdin();
    loop {
        if let Some(result) = game.result() {
            println!("Game over: {} wins.", result.winner());
            println!("Type 'new' for another game or 'quit' to leave.");
        } else if game.side_to_move() != human {
            let reply = match cli.opponent {
                Opponent::Minimax => ai.find_best_move(&mut game, human.opposite()),
                Opponent::Random => random_move(&game, human.opposite()),
            };
            match reply {
                Some(m) => {
                    game.make_move(m.from, m.to);
                    announce(&m, human.opposite());
                    println!("{}", game);
                }
                None => {
                    println!("{} has no legal moves.", human.opposite());
                    break;
                }
            }
            continue;
        }

        print!("{} > ", game.side_to_move());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match Command::parse(&line) {
            Ok(c) => c,
            Err(commands::CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Move { from, to } => {
                if game.is_game_over() {
                    println!("The game is over; type 'new' to play again.");
                } else if game.make_move(from, to) {
                    println!("{}", game);
                } else {
                    println!("Illegal move: {}{}", from, to);
                }
            }
            Command::Moves(square) => {
                let moves = game.valid_moves(square, game.side_to_move());
                if moves.is_empty() {
                    println!("No moves from {}.", square);
                } else {
                    let list: Vec<String> = moves.iter().map(|s| s.to_string()).collect();
                    println!("{}: {}", square, list.join(" "));
                }
            }
            Command::Undo => {
                // Take back the opponent's reply and the human move so the
                // human is on the clock again.
                game.undo_last_move();
                if game.side_to_move() != human {
                    game.undo_last_move();
                }
                println!("{}", game);
            }
            Command::New => {
                game = Game::new();
                println!("{}", game);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}

/// Picks a uniformly random legal move for `color`.
fn random_move(game: &Game, color: Color) -> Option<MoveRecord> {
    let moves = game.moves_for(color);
    moves.choose(&mut rand::thread_rng()).copied()
}

fn announce(m: &MoveRecord, color: Color) {
    match m.captured {
        Some(captured) => println!("{} plays {} taking the {}", color, m, captured.kind),
        None => println!("{} plays {}", color, m),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  b0c2 / move b0c2   move the piece on b0 to c2");
    println!("  moves b0           list legal destinations for b0");
    println!("  undo               take back the last move pair");
    println!("  new                start a fresh game");
    println!("  help               show this summary");
    println!("  quit               leave");
}
