//! Verify Binary
//!
//! Checks a revealed move and key against the HMAC published before the
//! player answered. Exits 0 on a match, 1 otherwise.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use fairplay::fairness::*;
use std::process::ExitCode;
use std::str::FromStr;

#[derive(Parser)]
#[command(author, version, about = "Verify a fairplay commitment after the key is revealed", long_about = None)]
struct Args {
    /// The HMAC shown before you moved
    #[arg(long, value_name = "HEX")]
    hmac: String,
    /// The HMAC key revealed after the round
    #[arg(long, value_name = "HEX")]
    key: String,
    /// The computer's move, exactly as revealed
    #[arg(required = true)]
    computer: String,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn check(args: &Args) -> anyhow::Result<bool> {
    let tag = Commitment::from_str(&args.hmac).context("malformed --hmac")?;
    let key = SecretKey::from_str(&args.key).context("malformed --key")?;
    Ok(tag.verify(&args.computer, &key))
}

fn main() -> ExitCode {
    let args = Args::parse();
    fairplay::log(log::LevelFilter::Warn);
    if args.no_color {
        colored::control::set_override(false);
    }
    match check(&args) {
        Ok(true) => {
            println!("{}", "commitment verified".green());
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!(
                "{}",
                "commitment MISMATCH: the move or key differs from what was committed".red()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}
