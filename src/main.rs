//! Aduk: Go rules engine.
//!
//! ## Usage
//!
//! - `aduk` - Show a demo
//! - `aduk gtp` - Start GTP server for GUI integration
//! - `aduk demo` - Play a random game and print the board
//!
//! Set `RUST_LOG=aduk=debug` (or `trace`) to see engine diagnostics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use aduk::board::{Board, Color};
use aduk::constants::{DEFAULT_SIZE, MAX_GAME_LEN};
use aduk::coord::format_move;
use aduk::gtp::GtpEngine;
use aduk::playout::random_game;
use aduk::rules::play_with;
use aduk::trace::LogObserver;

/// Aduk: Go board and move legality engine
#[derive(Parser)]
#[command(name = "aduk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Initial board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
    /// Play a random game and print the result
    Demo {
        /// Board size
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Maximum number of moves
        #[arg(long, default_value_t = MAX_GAME_LEN)]
        moves: usize,
        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let mut engine = GtpEngine::new(size)?;
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Demo { size, moves, seed }) => run_demo(size, moves, seed)?,
        None => run_demo(9, MAX_GAME_LEN, None)?,
    }
    Ok(())
}

fn run_demo(size: usize, moves: usize, seed: Option<u64>) -> Result<()> {
    println!("Aduk: Go rules engine\n");

    // Demo 1: a single capture
    println!("=== Capture Demo ===");
    let mut board = Board::new(5)?;
    let mut trace = LogObserver;
    for (x, y, color) in [
        (2, 2, Color::Black),
        (1, 2, Color::White),
        (3, 2, Color::White),
        (2, 1, Color::White),
        (2, 3, Color::White),
    ] {
        play_with(&mut board, x, y, color, &mut trace)?;
    }
    if let Some(mv) = board.peek_top() {
        println!("Last move: {mv}");
    }
    println!("{board}");

    // Demo 2: random game
    println!("=== Random Game Demo ===");
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let mut board = Board::new(size).with_context(|| format!("cannot create {size}x{size} board"))?;
    let played = random_game(&mut board, moves, &mut rng);
    log::info!("random game finished after {played} moves");

    let last: Vec<String> = board
        .history()
        .iter()
        .rev()
        .take(5)
        .map(|mv| format!("{} {}", mv.color(), format_move(mv, size)))
        .collect();
    println!("Moves played: {played}");
    println!("Last moves: {}", last.join(", "));
    println!(
        "Prisoners: black {}, white {}",
        board.prisoners(Color::Black),
        board.prisoners(Color::White)
    );
    println!("{board}");
    Ok(())
}
