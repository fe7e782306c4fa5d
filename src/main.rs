use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Stdin, Write};
use std::time::Duration;

use tictactoe_ai::*;

mod display;

/// Play Tic-tac-toe against a perfect opponent, or watch two of them draw
#[derive(Parser, Debug)]
#[command(name = "tictactoe_cli", version)]
struct Cli {
    /// Let the engine play X (asked interactively if neither side is chosen)
    #[arg(long)]
    x_ai: bool,

    /// Let the engine play O (asked interactively if neither side is chosen)
    #[arg(long)]
    o_ai: bool,

    /// Search the engine's candidate moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Seconds to pause before each move when the engine plays both sides
    #[arg(long, default_value_t = 1)]
    delay: u64,

    /// Increase log output (-v for info, -vv for debug), RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn engine_move(board: &Board, parallel: bool) -> Option<Move> {
    let mut solver = Solver::new(*board);
    let (score, best_move) = if parallel {
        solver.solve_parallel()?
    } else {
        solver.solve()?
    };
    info!(nodes = solver.node_count, score, "engine searched");

    match score.cmp(&0) {
        Ordering::Greater => println!("X can force a win."),
        Ordering::Less => println!("O can force a win."),
        Ordering::Equal => println!("Best play from here is a draw."),
    }
    println!("Best move: {}", best_move.cell_number());
    Some(best_move)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = stdin();

    println!("Welcome to Tic-tac-toe\n");

    let ai_players = if cli.x_ai || cli.o_ai {
        (cli.x_ai, cli.o_ai)
    } else {
        (
            ask_yes_no(&stdin, "Is X AI controlled?")?,
            ask_yes_no(&stdin, "Is O AI controlled?")?,
        )
    };

    let mut board = initial_board();

    // game loop
    loop {
        display::draw(&board).expect("Failed to draw board!");

        let player = match board.state() {
            GameState::Playing => board.current_player(),
            GameState::Won(player) => {
                println!("{} wins!", player);
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        };

        let ai_controlled = match player {
            Player::X => ai_players.0,
            Player::O => ai_players.1,
        };

        let next_move = if ai_controlled {
            println!("AI is thinking...");
            stdout().flush().expect("Failed to flush to stdout!");

            // slow down play if both players are AI
            if ai_players == (true, true) {
                std::thread::sleep(Duration::from_secs(cli.delay));
            }

            match engine_move(&board, cli.parallel) {
                Some(mv) => mv,
                None => {
                    warn!("engine found no move on a game in progress");
                    break;
                }
            }
        } else {
            print!("{} to play, cell 1-{} > ", player, CELLS);
            stdout().flush().expect("Failed to flush to stdout!");
            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                // stdin closed
                break;
            }

            match input_str
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(Move::from_cell_number)
            {
                Some(mv) => mv,
                None => {
                    println!("Invalid cell: {}", input_str.trim());
                    continue;
                }
            }
        };

        match board.apply_move(next_move) {
            Ok(next) => board = next,
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
        }
    }
    Ok(())
}
