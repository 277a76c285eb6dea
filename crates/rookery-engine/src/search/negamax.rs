//! Negamax search, with and without alpha-beta pruning.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rookery_core::{GameState, Move, MoveSet};

use crate::eval::{CHECKMATE, score_board};

/// Pick a move by plain negamax to the given depth.
///
/// Ties at the root are broken uniformly at random.
pub(crate) fn find_move(
    state: &mut GameState,
    root_moves: &MoveSet,
    depth: u8,
    rng: &mut SmallRng,
) -> Option<Move> {
    let mut best_moves = Vec::new();
    let white_to_move = state.white_to_move();
    let _ = negamax(state, root_moves, white_to_move, depth, depth, &mut best_moves);
    best_moves.choose(rng).copied()
}

/// Pick a move by negamax with alpha-beta pruning to the given depth.
///
/// Explores the same tree as [`find_move`] minus branches already proven
/// no better than an earlier alternative; the root score is identical.
pub(crate) fn find_move_alpha_beta(
    state: &mut GameState,
    root_moves: &MoveSet,
    depth: u8,
    rng: &mut SmallRng,
) -> Option<Move> {
    let mut best_moves = Vec::new();
    let white_to_move = state.white_to_move();
    let _ = negamax_alpha_beta(
        state,
        root_moves,
        -CHECKMATE,
        CHECKMATE,
        white_to_move,
        depth,
        depth,
        &mut best_moves,
    );
    best_moves.choose(rng).copied()
}

/// Single-sided recursion: each ply negates the child's score, so both
/// colors run the same maximizing code. Leaves evaluate the board times a
/// turn multiplier (+1 for White to move, -1 for Black).
fn negamax(
    state: &mut GameState,
    moves: &MoveSet,
    white_to_move: bool,
    depth: u8,
    max_depth: u8,
    best_moves: &mut Vec<Move>,
) -> i32 {
    if depth == 0 {
        let turn_multiplier = if white_to_move { 1 } else { -1 };
        return turn_multiplier * score_board(state);
    }

    let mut max_score = -CHECKMATE;
    for mv in moves.iter().copied() {
        state.make_move(mv);
        let next_moves = state.generate_valid_moves();
        let score = -negamax(
            state,
            &next_moves,
            !white_to_move,
            depth - 1,
            max_depth,
            best_moves,
        );
        if score > max_score {
            max_score = score;
            if depth == max_depth {
                best_moves.clear();
                best_moves.push(mv);
            }
        } else if score == max_score && depth == max_depth {
            best_moves.push(mv);
        }
        state.undo_move();
    }
    max_score
}

/// Negamax threading an (alpha, beta) window with the standard negation
/// swap: the child searches (-beta, -alpha). Once alpha meets beta the
/// remaining siblings cannot improve the result and the loop cuts.
#[allow(clippy::too_many_arguments)]
fn negamax_alpha_beta(
    state: &mut GameState,
    moves: &MoveSet,
    mut alpha: i32,
    beta: i32,
    white_to_move: bool,
    depth: u8,
    max_depth: u8,
    best_moves: &mut Vec<Move>,
) -> i32 {
    if depth == 0 {
        let turn_multiplier = if white_to_move { 1 } else { -1 };
        return turn_multiplier * score_board(state);
    }

    let mut max_score = -CHECKMATE;
    for mv in moves.iter().copied() {
        state.make_move(mv);
        let next_moves = state.generate_valid_moves();
        let score = -negamax_alpha_beta(
            state,
            &next_moves,
            -beta,
            -alpha,
            !white_to_move,
            depth - 1,
            max_depth,
            best_moves,
        );
        if score > max_score {
            max_score = score;
            if depth == max_depth {
                best_moves.clear();
                best_moves.push(mv);
            }
        } else if score == max_score && depth == max_depth {
            best_moves.push(mv);
        }
        state.undo_move();
        if max_score > alpha {
            alpha = max_score;
        }
        if alpha >= beta {
            break;
        }
    }
    max_score
}
