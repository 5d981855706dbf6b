//! Go Text Protocol (GTP) front-end.
//!
//! Lets the rules engine be driven by GTP v2 controllers such as GoGui or
//! Sabaki. There is no search: `genmove` plays a random legal move.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Resize and clear the board (1 to 25)
//! - `clear_board` - Reset the board and history
//! - `play <color> <vertex>` - Play a move (`pass` allowed)
//! - `genmove <color>` - Play a random legal move
//! - `undo` - Take back the last move
//! - `showboard` - Print the board diagram
//!
//! ## Example
//!
//! ```ignore
//! use aduk::gtp::GtpEngine;
//! let mut engine = GtpEngine::new(19)?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color};
use crate::constants::MAX_GTP_SIZE;
use crate::coord::{format_vertex, parse_vertex};
use crate::error::{GoError, GtpError};
use crate::moves::Move;
use crate::playout::random_move;
use crate::rules::{play_move_with, play_with, undo_with};
use crate::trace::LogObserver;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

fn check_size(size: usize) -> Result<(), GtpError> {
    if size > MAX_GTP_SIZE {
        return Err(GtpError::UnsupportedSize {
            size,
            max: MAX_GTP_SIZE,
        });
    }
    Ok(())
}

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
    rng: fastrand::Rng,
    trace: LogObserver,
}

impl GtpEngine {
    /// Create an engine with an empty board of `size` (1 to 25).
    pub fn new(size: usize) -> Result<Self, GtpError> {
        Self::with_rng(Board::new(size)?, fastrand::Rng::new())
    }

    /// Create an engine around an existing board and random generator.
    ///
    /// # Errors
    /// [`GtpError::UnsupportedSize`] if the board is larger than GTP
    /// vertices can address.
    pub fn with_rng(board: Board, rng: fastrand::Rng) -> Result<Self, GtpError> {
        check_size(board.size())?;
        Ok(Self {
            board,
            rng,
            trace: LogObserver,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            log::debug!("gtp <- {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(arg: &str) -> Option<Color> {
        match arg.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                let board = check_size(size).and_then(|()| Board::new(size).map_err(GtpError::from));
                match board {
                    Ok(board) => {
                        self.board = board;
                        (true, String::new())
                    }
                    Err(e) => (false, format!("unacceptable size: {e}")),
                }
            }

            "clear_board" => {
                self.board.clear();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = Self::parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let mv = match parse_vertex(args[1], self.board.size()) {
                    Ok(Some(p)) => Move::placement(p.x, p.y, color),
                    Ok(None) => Move::pass(color),
                    Err(e) => return (false, e.to_string()),
                };
                match play_move_with(&mut self.board, &mv, &mut self.trace) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, format!("illegal move: {e}")),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|a| Self::parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                match random_move(&mut self.board, color, &mut self.rng) {
                    Some(p) => (true, format_vertex(p, self.board.size())),
                    None => (true, "pass".to_string()),
                }
            }

            "undo" => match undo_with(&mut self.board, &mut self.trace) {
                Some(_) => (true, String::new()),
                None => (false, "cannot undo".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.board.render().trim_end())),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Place a stone directly, bypassing text parsing.
    pub fn play(&mut self, x: usize, y: usize, color: Color) -> Result<(), GoError> {
        play_with(&mut self.board, x, y, color, &mut self.trace)
    }
}
