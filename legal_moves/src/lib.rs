//! Legal move enumeration for chess positions given in [FEN](https://www.chessprogramming.org/Forsyth-Edwards_Notation).
//!
//! All of the rules of chess live in an external rules library, reached through the [`Rules`] trait.
//! This crate parses a position, asks the rules library for the legal moves, and renders them in
//! coordinate notation (`e2e4`, `g1f3`, `e7e8q`).
//!
//! ```
//! let moves = legal_moves::legal_moves(legal_moves::FEN_STARTPOS).unwrap();
//! assert_eq!(moves.len(), 20);
//! assert!(moves.contains(&String::from("e2e4")));
//! ```

/// The boundary between this crate and the library that knows the rules of chess.
pub mod rules;
/// Turning a FEN string into a list of legal moves.
pub mod moves;
/// Comparing a move list produced elsewhere against the legal moves of a position.
pub mod compare;

pub use compare::*;
pub use moves::*;
pub use rules::*;

/// FEN string of the standard starting position.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN string of the "Kiwipete" position, which exercises castling, pins, en passant and promotions.
pub const FEN_KIWIPETE: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
