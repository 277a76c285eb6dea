//! Perft: move-path counting for validating generation and make/undo.

use crate::chess_move::Move;
use crate::game::GameState;

/// Count the leaf nodes of the legal move tree to the given depth.
///
/// Every position is explored by making and undoing moves on the one
/// shared state, so a correct count also witnesses that undo restores
/// positions exactly. Counts reflect this engine's rules; promotion is
/// always to a queen.
pub fn perft(state: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = state.generate_valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves.iter().copied() {
        state.make_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Perft split by root move: each legal move paired with the node count of
/// its subtree. The counts sum to `perft(state, depth)`.
pub fn divide(state: &mut GameState, depth: u32) -> Vec<(Move, u64)> {
    let moves = state.generate_valid_moves();
    let mut results = Vec::with_capacity(moves.len());
    for mv in moves.iter().copied() {
        state.make_move(mv);
        let nodes = if depth > 1 {
            perft(state, depth - 1)
        } else {
            1
        };
        state.undo_move();
        results.push((mv, nodes));
    }
    results
}
