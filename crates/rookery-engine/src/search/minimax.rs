//! Depth-limited minimax over the positional evaluation.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rookery_core::{GameState, Move, MoveSet};

use crate::eval::{CHECKMATE, score_board};

/// Pick a move by minimax to the given depth.
///
/// White maximizes and Black minimizes the White-relative board score.
/// Ties at the root are broken uniformly at random.
pub(crate) fn find_move(
    state: &mut GameState,
    root_moves: &MoveSet,
    depth: u8,
    rng: &mut SmallRng,
) -> Option<Move> {
    let mut best_moves = Vec::new();
    let white_to_move = state.white_to_move();
    let _ = minimax(state, root_moves, white_to_move, depth, depth, &mut best_moves);
    best_moves.choose(rng).copied()
}

/// Recursive minimax. Leaves evaluate the board; the best-move list is
/// maintained only at the root (`depth == max_depth`), replaced on strict
/// improvement and appended to on ties.
fn minimax(
    state: &mut GameState,
    moves: &MoveSet,
    white_to_move: bool,
    depth: u8,
    max_depth: u8,
    best_moves: &mut Vec<Move>,
) -> i32 {
    if depth == 0 {
        return score_board(state);
    }

    if white_to_move {
        let mut max_score = -CHECKMATE;
        for mv in moves.iter().copied() {
            state.make_move(mv);
            let next_moves = state.generate_valid_moves();
            let score = minimax(state, &next_moves, false, depth - 1, max_depth, best_moves);
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
    } else {
        let mut min_score = CHECKMATE;
        for mv in moves.iter().copied() {
            state.make_move(mv);
            let next_moves = state.generate_valid_moves();
            let score = minimax(state, &next_moves, true, depth - 1, max_depth, best_moves);
            if score < min_score {
                min_score = score;
                if depth == max_depth {
                    best_moves.clear();
                    best_moves.push(mv);
                }
            } else if score == min_score && depth == max_depth {
                best_moves.push(mv);
            }
            state.undo_move();
        }
        min_score
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rookery_core::GameState;

    use super::find_move;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11)
    }

    #[test]
    fn finds_mate_in_one_as_white() {
        // Scholar's mate: Qxf7#.
        let mut state: GameState =
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
                .parse()
                .unwrap();
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, 1, &mut rng()).unwrap();
        assert_eq!(mv.chess_notation(), "H5F7");
    }

    #[test]
    fn finds_mate_in_one_as_black() {
        // Fool's mate one ply early: ...Qh4#.
        let mut state = GameState::new();
        for notation in ["F2F3", "E7E5", "G2G4"] {
            let moves = state.generate_valid_moves();
            let mv = moves.iter().find(|m| m.chess_notation() == notation).copied().unwrap();
            state.make_move(mv);
        }
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, 2, &mut rng()).unwrap();
        assert_eq!(mv.chess_notation(), "D8H4");
    }

    #[test]
    fn takes_a_free_queen_at_depth_two() {
        let mut state: GameState = "k7/8/8/3q4/8/8/8/K2R4 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, 2, &mut rng()).unwrap();
        assert_eq!(mv.chess_notation(), "D1D5");
    }

    #[test]
    fn leaves_the_state_where_it_found_it() {
        let mut state = GameState::new();
        let before = state.to_fen();
        let moves = state.generate_valid_moves();
        let _ = find_move(&mut state, &moves, 2, &mut rng());
        assert_eq!(state.to_fen(), before);
    }

    #[test]
    fn returns_none_without_moves() {
        let mut state: GameState = "k7/2Q5/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(find_move(&mut state, &moves, 2, &mut rng()).is_none());
    }
}
