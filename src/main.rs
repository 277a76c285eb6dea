use anyhow::{Context, Result};
use rookery_core::GameState;
use rookery_engine::{MAX_DEPTH, Searcher, Strategy};
use tracing::info;

/// Hard cap on game length: the core detects no repetition draws, so two
/// engines can shuffle forever.
const MAX_PLIES: usize = 200;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut state = GameState::new();
    let mut white = Searcher::new(Strategy::NegamaxAlphaBeta { depth: MAX_DEPTH });
    let mut black = Searcher::new(Strategy::Greedy);
    info!(white = ?white.strategy(), black = ?black.strategy(), "self-play starting");

    for ply in 0..MAX_PLIES {
        let _ = state.generate_valid_moves();
        if state.checkmate() {
            let winner = if state.white_to_move() { "black" } else { "white" };
            info!(ply, winner, "checkmate");
            break;
        }
        if state.stalemate() {
            info!(ply, "stalemate");
            break;
        }

        let side = state.side_to_move();
        let searcher = if state.white_to_move() {
            &mut white
        } else {
            &mut black
        };
        let mv = searcher
            .find_move(&mut state)
            .context("no move found in a live position")?;
        info!(ply, %side, notation = %mv.chess_notation(), "move");
        state.make_move(mv);
    }

    println!("{}", state.pretty());
    println!("{}", state.to_fen());
    Ok(())
}
