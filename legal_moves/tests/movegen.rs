use std::collections::HashSet;

use legal_moves::{legal_moves, FEN_KIWIPETE, FEN_STARTPOS};

/// Checks that `moves` and `legal_moves` contain the same elements, ignoring order
fn lists_match<'a>(fen: &str, moves: &[String], legal_moves: impl IntoIterator<Item = &'a str>) {
    let mut moves = moves.to_vec();
    let mut legal_moves = legal_moves
        .into_iter()
        .map(String::from)
        .collect::<Vec<String>>();

    moves.sort();
    legal_moves.sort();

    assert_eq!(
        moves, legal_moves,
        "\nPosition: {fen}\nMoves: {moves:?}\nLegal: {legal_moves:?}"
    );
}

fn count(fen: &str) -> usize {
    legal_moves(fen).unwrap().len()
}

#[test]
#[rustfmt::skip]
fn startpos_has_twenty_moves() {
    let moves = legal_moves(FEN_STARTPOS).unwrap();
    let legal = [ "a2a3", "a2a4", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4", "e2e3", "e2e4", "f2f3", "f2f4", "g2g3", "g2g4", "h2h3", "h2h4", "b1a3", "b1c3", "g1f3", "g1h3" ];

    lists_match(FEN_STARTPOS, &moves, legal);
}

#[test]
#[rustfmt::skip]
fn black_reply_to_e4() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let moves = legal_moves(fen).unwrap();
    let legal = [ "a7a6", "a7a5", "b7b6", "b7b5", "c7c6", "c7c5", "d7d6", "d7d5", "e7e6", "e7e5", "f7f6", "f7f5", "g7g6", "g7g5", "h7h6", "h7h5", "b8a6", "b8c6", "g8f6", "g8h6" ];

    lists_match(fen, &moves, legal);
}

#[test]
fn checkmate_has_no_moves() {
    // Fool's mate
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    assert!(legal_moves(fen).unwrap().is_empty());

    // Back rank mate
    let fen = "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1";
    assert!(legal_moves(fen).unwrap().is_empty());
}

#[test]
fn stalemate_has_no_moves() {
    let fen = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    assert!(legal_moves(fen).unwrap().is_empty());
}

#[test]
fn malformed_positions_fail() {
    let bad = [
        "",
        "this is not a position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
        // Wrong number of ranks
        "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        // Wrong number of files
        "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPP/RNBQKBNR w - - 0 1",
        // En passant square off the board
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
    ];

    for fen in bad {
        assert!(legal_moves(fen).is_err(), "{fen:?} should be rejected");
    }
}

#[test]
fn enumeration_is_idempotent() {
    for fen in [FEN_STARTPOS, FEN_KIWIPETE] {
        assert_eq!(legal_moves(fen).unwrap(), legal_moves(fen).unwrap());
    }
}

#[test]
fn moves_are_unique_coordinate_strings() {
    for fen in [FEN_STARTPOS, FEN_KIWIPETE] {
        let moves = legal_moves(fen).unwrap();
        let unique = moves.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), moves.len(), "Duplicate moves in {fen}");

        for mv in &moves {
            assert!(
                (4..=5).contains(&mv.len()),
                "{mv:?} is not in coordinate notation"
            );
        }
    }
}

#[test]
fn castling_is_king_two_squares() {
    let moves = legal_moves(FEN_KIWIPETE).unwrap();
    assert!(moves.contains(&String::from("e1g1")));
    assert!(moves.contains(&String::from("e1c1")));
}

#[test]
fn en_passant_is_generated() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let moves = legal_moves(fen).unwrap();
    assert!(moves.contains(&String::from("e5f6")));
    assert!(!moves.contains(&String::from("e5d6")));
}

#[test]
fn promotions_render_all_four_pieces() {
    let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
    let moves = legal_moves(fen).unwrap();

    for promo in ["d7c8q", "d7c8r", "d7c8b", "d7c8n"] {
        assert!(moves.contains(&String::from(promo)), "Missing {promo}");
    }
}

#[cfg(test)]
mod perft_depth_one {
    use super::*;

    #[test]
    fn kiwipete() {
        assert_eq!(count(FEN_KIWIPETE), 48);
    }

    #[test]
    fn position_3() {
        assert_eq!(count("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"), 14);
    }

    #[test]
    fn position_4() {
        assert_eq!(
            count("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1"),
            6
        );
    }

    #[test]
    fn position_4_mirrored() {
        assert_eq!(
            count("r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1"),
            6
        );
    }

    #[test]
    fn position_5() {
        assert_eq!(
            count("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8"),
            44
        );
    }
}
