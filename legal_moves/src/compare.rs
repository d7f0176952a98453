use std::{collections::BTreeSet, fmt};

use anyhow::Result;
use log::debug;

use crate::legal_moves;

/// The difference between the legal moves of a position and a candidate list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveListDiff {
    /// Legal moves that the candidate list does not contain, sorted.
    pub missing: Vec<String>,

    /// Moves in the candidate list that are not legal, sorted.
    ///
    /// A move that appears more than once in the candidate list is extra from its second occurrence on.
    pub extra: Vec<String>,
}

impl MoveListDiff {
    /// Returns `true` if the candidate list contained exactly the legal moves.
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

impl fmt::Display for MoveListDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "Move lists match");
        }

        if !self.missing.is_empty() {
            write!(f, "Missing moves: {}", self.missing.join(", "))?;
            if !self.extra.is_empty() {
                writeln!(f)?;
            }
        }

        if !self.extra.is_empty() {
            write!(f, "Extra moves: {}", self.extra.join(", "))?;
        }

        Ok(())
    }
}

/// Compares a `candidate` move list against the `legal` moves of some position.
///
/// Order does not matter in either list.
///
/// # Example
/// ```
/// # use legal_moves::compare_moves;
/// let diff = compare_moves(&["e2e4", "d2d4"], &["d2d4", "e2e5"]);
/// assert_eq!(diff.missing, ["e2e4"]);
/// assert_eq!(diff.extra, ["e2e5"]);
/// ```
pub fn compare_moves<L, C>(legal: &[L], candidate: &[C]) -> MoveListDiff
where
    L: AsRef<str>,
    C: AsRef<str>,
{
    let mut unmatched = legal.iter().map(|mv| mv.as_ref()).collect::<BTreeSet<&str>>();

    let mut extra = candidate
        .iter()
        .map(|mv| mv.as_ref())
        .filter(|mv| !unmatched.remove(mv))
        .map(String::from)
        .collect::<Vec<_>>();
    extra.sort();

    let missing = unmatched.into_iter().map(String::from).collect();

    MoveListDiff { missing, extra }
}

/// Compares a `candidate` move list against the legal moves of the position described by `fen`.
pub fn check_moves<C: AsRef<str>>(fen: &str, candidate: &[C]) -> Result<MoveListDiff> {
    let legal = legal_moves(fen)?;
    let diff = compare_moves(&legal, candidate);
    debug!(
        "Compared {} candidate moves against {} legal moves: {} missing, {} extra",
        candidate.len(),
        legal.len(),
        diff.missing.len(),
        diff.extra.len()
    );

    Ok(diff)
}

/// Extracts moves from the output of a move generator.
///
/// Moves may be separated by whitespace or commas, and may be wrapped in quotes or brackets,
/// so both one-move-per-line output and a printed list like `["e2e4", "g1f3"]` are understood.
pub fn parse_move_list(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.trim_matches(|c: char| matches!(c, '[' | ']' | '"' | '\'')))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
