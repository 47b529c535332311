//! Provably fair rock-paper-scissors
//!
//! Usage: fairplay [-v] [--no-color] <MOVES>...
//!
//! An odd number (>= 3) of unique moves, in cyclic order. Each round the
//! computer commits to its move with an HMAC, then reveals the key.

use clap::Parser;
use colored::Colorize;
use fairplay::moves::MoveSet;
use fairplay::players::*;
use fairplay::round::Game;
use std::io::IsTerminal;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Provably fair rock-paper-scissors with any odd number of moves", long_about = None)]
struct Args {
    /// Moves in cyclic order; each beats the n/2 moves listed before it
    moves: Vec<String>,
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Rejects a bad move set before any round is dealt, reporting it to `sink`.
fn validate<W>(names: Vec<String>, sink: &mut W) -> Result<MoveSet, ExitCode>
where
    W: Write,
{
    MoveSet::try_from(names).map_err(|e| {
        let _ = writeln!(sink, "{}", e.to_string().red());
        let _ = writeln!(sink, "example: fairplay rock paper scissors");
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    fairplay::log(args.level());
    if args.no_color {
        colored::control::set_override(false);
    }
    let moves = match validate(args.moves, &mut std::io::stdout()) {
        Ok(moves) => moves,
        Err(code) => return code,
    };
    log::info!("playing {} moves: {}", moves.len(), moves);
    let stdout = std::io::stdout();
    let result = match std::io::stdin().is_terminal() {
        true => Game::new(moves, Human, stdout).run(),
        false => Game::new(moves, Piped::new(std::io::stdin().lock()), stdout).run(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("game aborted: {:#}", e);
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}
