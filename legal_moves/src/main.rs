use anyhow::anyhow;
use legal_moves::legal_moves;

/// Prints every legal move in the position given as the first argument.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let fen = std::env::args()
        .nth(1)
        .ok_or(anyhow!("Index out of range: no FEN string was provided"))?;

    let moves = legal_moves(&fen)?;
    println!("{moves:?}");

    Ok(())
}
