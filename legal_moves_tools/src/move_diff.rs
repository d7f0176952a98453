use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use legal_moves::{check_moves, parse_move_list};

/// Compares the moves produced by some other move generator against the legal moves of a position.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// FEN string of the position to check
    fen: String,

    /// File containing the moves to check, one per line. Read from stdin if omitted
    #[arg(short, long)]
    moves: Option<PathBuf>,
}

fn read_candidate(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read moves from {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read moves from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let candidate = parse_move_list(&read_candidate(args.moves.as_ref())?);
    let diff = check_moves(&args.fen, &candidate)?;

    if diff.is_match() {
        println!("{}", "Move lists match".green());
        return Ok(());
    }

    if !diff.missing.is_empty() {
        println!("{}", "Missing moves:".red().bold());
        for mv in &diff.missing {
            println!("\t{}", mv.red());
        }
    }

    if !diff.extra.is_empty() {
        println!("{}", "Extra moves:".yellow().bold());
        for mv in &diff.extra {
            println!("\t{}", mv.yellow());
        }
    }

    std::process::exit(1);
}
