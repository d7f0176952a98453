use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chess::{Board, ChessMove, MoveGen};

/// A move that can be written in coordinate notation.
///
/// Coordinate notation is the origin square followed by the destination square,
/// with a lowercase promotion letter appended if the move promotes a pawn: `e2e4`, `e7e8q`.
pub trait CoordinateMove {
    /// Renders this move in coordinate notation.
    fn to_coordinate(&self) -> String;
}

impl CoordinateMove for ChessMove {
    fn to_coordinate(&self) -> String {
        self.to_string()
    }
}

impl CoordinateMove for &str {
    fn to_coordinate(&self) -> String {
        self.to_string()
    }
}

/// The two things this crate needs from a chess rules library.
///
/// Anything implementing this can be handed to [`crate::enumerate`], which makes it easy to
/// swap the rules library, or to stand in a fake one in tests.
pub trait Rules {
    /// The library's board state. Built once per call and dropped after enumeration.
    type Position;

    /// The library's move type.
    type Move: CoordinateMove;

    /// Builds a board state from a FEN string, failing if the string is not a valid position.
    fn parse_position(&self, fen: &str) -> Result<Self::Position>;

    /// Returns every legal move for the side to move, in whatever order the library produces them.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;
}

/// [`Rules`] backed by the [`chess`](https://docs.rs/chess) crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChessRules;

impl Rules for ChessRules {
    type Position = Board;
    type Move = ChessMove;

    fn parse_position(&self, fen: &str) -> Result<Self::Position> {
        check_layout(fen)?;

        // The library's message is passed through unchanged.
        Board::from_str(fen).map_err(|e| anyhow!("{e}"))
    }

    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move> {
        MoveGen::new_legal(position).collect()
    }
}

/// Rejects a FEN whose piece placement is not 8 ranks of 8 squares, or whose en passant
/// target is not `-` or a square on the third or sixth rank.
///
/// The `chess` crate wraps rank and file indices around while parsing, so these would
/// otherwise produce a board.
fn check_layout(fen: &str) -> Result<()> {
    let mut fields = fen.split_ascii_whitespace();

    let Some(placement) = fields.next() else {
        bail!("Invalid FEN string: {fen:?} is empty");
    };

    let ranks = placement.split('/').collect::<Vec<_>>();
    if ranks.len() != 8 {
        bail!(
            "Invalid FEN string: expected 8 ranks, found {} in {fen:?}",
            ranks.len()
        );
    }

    for (i, rank) in ranks.iter().enumerate() {
        let squares = rank
            .chars()
            .map(|c| c.to_digit(10).unwrap_or(1))
            .sum::<u32>();

        if squares != 8 {
            bail!(
                "Invalid FEN string: rank {} has {squares} squares in {fen:?}",
                8 - i
            );
        }
    }

    if let Some(ep) = fields.nth(2) {
        if !matches!(ep.as_bytes(), b"-" | [b'a'..=b'h', b'3' | b'6']) {
            bail!("Invalid FEN string: bad en passant square {ep:?} in {fen:?}");
        }
    }

    Ok(())
}
