use anyhow::Result;
use log::{debug, trace};

use crate::{ChessRules, CoordinateMove, Rules};

/// Returns every legal move in the position described by `fen`, in coordinate notation.
///
/// Moves come back in the order the [`chess`](https://docs.rs/chess) crate generates them.
/// Any error from parsing `fen` is returned as-is.
///
/// # Example
/// ```
/// # use legal_moves::legal_moves;
/// // Fool's mate: white is checkmated
/// let moves = legal_moves("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
/// assert!(moves.is_empty());
/// ```
pub fn legal_moves(fen: &str) -> Result<Vec<String>> {
    enumerate(&ChessRules, fen)
}

/// Returns every legal move in the position described by `fen`, as decided by `rules`.
pub fn enumerate<R: Rules>(rules: &R, fen: &str) -> Result<Vec<String>> {
    let position = rules.parse_position(fen)?;
    debug!("Parsed position {fen:?}");

    let moves = rules
        .legal_moves(&position)
        .iter()
        .map(|mv| {
            let mv = mv.to_coordinate();
            trace!("Legal move: {mv}");
            mv
        })
        .collect::<Vec<_>>();

    debug!("Found {} legal moves in {fen:?}", moves.len());
    Ok(moves)
}
