use std::{path::PathBuf, process::Command};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use legal_moves::{compare_moves, legal_moves, parse_move_list};
use log::info;

const DEFAULT_SUITE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/suites/positions.csv");

/// Checks legal move counts over a suite of positions, and optionally checks another move generator against them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suite file with a header line, then `group,name,fen,expected_moves` rows
    #[arg(default_value = DEFAULT_SUITE)]
    suite: PathBuf,

    /// Move generator to check. Invoked as `<generator> <fen>`, it must print the moves it finds
    #[arg(short, long)]
    generator: Option<String>,
}

/// One row of a position suite.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SuiteEntry {
    group: String,
    name: String,
    fen: String,
    expected: usize,
}

/// Parses the contents of a suite file. The first line is a header and is skipped.
fn parse_suite(contents: &str) -> Result<Vec<SuiteEntry>> {
    let mut entries = Vec::new();

    for (i, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
        let [group, name, fen, expected] = fields.as_slice() else {
            bail!(
                "Line {}: expected 4 fields, found {}: {line:?}",
                i + 1,
                fields.len()
            );
        };

        let expected = expected
            .parse::<usize>()
            .context(format!("Line {}: invalid move count {expected:?}", i + 1))?;

        entries.push(SuiteEntry {
            group: group.to_string(),
            name: name.to_string(),
            fen: fen.to_string(),
            expected,
        });
    }

    Ok(entries)
}

/// Runs the user-supplied move generator on `fen` and collects the moves it prints.
fn run_generator(generator: &str, fen: &str) -> Result<Vec<String>> {
    let mut cmd = Command::new(generator);
    let output = cmd
        .arg(fen)
        .output()
        .context(format!("Failed to execute move generator:\n{cmd:?}"))?;

    let stdout = String::from_utf8(output.stdout)
        .context("Failed to convert stdout of child process to String")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Error: Move generator crashed on: {fen:?}\n\nFull error:\n{stderr}");
    }

    Ok(parse_move_list(&stdout))
}

/// Checks a single entry, returning a description of every problem found.
fn check_entry(entry: &SuiteEntry, generator: Option<&str>) -> Result<Vec<String>> {
    let legal = legal_moves(&entry.fen)
        .context(format!("Invalid position in {}/{}", entry.group, entry.name))?;

    let mut problems = Vec::new();
    if legal.len() != entry.expected {
        problems.push(format!(
            "Expected {} legal moves, found {}",
            entry.expected,
            legal.len()
        ));
    }

    if let Some(generator) = generator {
        let generated = run_generator(generator, &entry.fen)?;
        let diff = compare_moves(&legal, &generated);
        if !diff.is_match() {
            problems.push(diff.to_string());
        }
    }

    Ok(problems)
}

/// Like [`check_entry`], but reports an error (an invalid position, a crashed generator) as a problem.
fn problems_for(entry: &SuiteEntry, generator: Option<&str>) -> Vec<String> {
    check_entry(entry, generator).unwrap_or_else(|e| vec![format!("{e:#}")])
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let contents = std::fs::read_to_string(&args.suite)
        .context(format!("Failed to read suite {}", args.suite.display()))?;
    let entries =
        parse_suite(&contents).context(format!("Malformed suite {}", args.suite.display()))?;
    info!("Loaded {} positions from {}", entries.len(), args.suite.display());

    let mut failures = 0;
    for entry in &entries {
        let problems = problems_for(entry, args.generator.as_deref());
        let label = format!("{}/{}", entry.group, entry.name);

        if problems.is_empty() {
            println!("{} {label}", "[ok]".green());
        } else {
            failures += 1;
            println!("{} {label}: {}", "[FAIL]".red().bold(), entry.fen);
            for problem in problems {
                for line in problem.lines() {
                    println!("\t{line}");
                }
            }
        }
    }

    println!();
    println!("Positions: {}", entries.len());
    println!("Failures:  {failures}");

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
