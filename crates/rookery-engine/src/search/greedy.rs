//! Greedy search: one ply of minimax over raw material.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rookery_core::{GameState, Move, MoveSet};

use crate::eval::{CHECKMATE, STALEMATE, score_material};

/// Pick the move whose best opponent reply concedes the least material.
///
/// For each of our moves: make it, let the opponent maximize the material
/// swing in their favor one move deep, and undo. Game end short-circuits
/// at both levels. A move that mates the opponent outright is the best
/// possible outcome and one that stalemates them is neutral; within the
/// reply loop, a reply that mates us scores `CHECKMATE` for the opponent
/// and one that stalemates us scores `STALEMATE`, overriding the material
/// count. Ties are broken uniformly at random.
pub(crate) fn find_move(
    state: &mut GameState,
    root_moves: &MoveSet,
    rng: &mut SmallRng,
) -> Option<Move> {
    let mut best_reply_score = CHECKMATE;
    let mut best_moves: Vec<Move> = Vec::new();

    for mv in root_moves.iter().copied() {
        state.make_move(mv);
        let replies = state.generate_valid_moves();
        let opponent_best = if state.stalemate() {
            STALEMATE
        } else if state.checkmate() {
            -CHECKMATE
        } else {
            let mut best = -CHECKMATE;
            for reply in replies.iter().copied() {
                state.make_move(reply);
                // The mate flags only refresh on generation.
                let _ = state.generate_valid_moves();
                let score = if state.checkmate() {
                    CHECKMATE
                } else if state.stalemate() {
                    STALEMATE
                } else {
                    // score_material is relative to the side to move, which
                    // is us again here; negate for the opponent's view.
                    -score_material(state)
                };
                if score > best {
                    best = score;
                }
                state.undo_move();
            }
            best
        };

        if opponent_best < best_reply_score {
            best_reply_score = opponent_best;
            best_moves.clear();
            best_moves.push(mv);
        } else if opponent_best == best_reply_score {
            best_moves.push(mv);
        }
        state.undo_move();
    }

    best_moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rookery_core::{GameState, Piece, Tile};

    use super::find_move;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut state: GameState = "k7/8/8/3q4/8/8/8/K2R4 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, &mut rng()).unwrap();
        assert_eq!(mv.end(), Tile::from_notation("D5").unwrap());
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn prefers_mate_over_material() {
        // Ra8 is mate; every other rook move just shuffles material.
        let mut state: GameState = "6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, &mut rng()).unwrap();
        assert_eq!(mv.chess_notation(), "A1A8");
    }

    #[test]
    fn avoids_a_move_that_allows_mate_in_reply() {
        // Rxa7 grabs a pawn but abandons the back rank, and ...Rd1 is then
        // mate: the reply loop must score that line as CHECKMATE for the
        // opponent, not as a one-pawn material swing.
        let mut state: GameState = "3r2k1/p7/8/8/8/8/5PPP/R5K1 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let mv = find_move(&mut state, &moves, &mut rng()).unwrap();
        assert_ne!(mv.chess_notation(), "A1A7");
        // Whatever was chosen, no opponent reply mates on the spot.
        state.make_move(mv);
        let replies = state.generate_valid_moves();
        for reply in replies.iter().copied().collect::<Vec<_>>() {
            state.make_move(reply);
            let _ = state.generate_valid_moves();
            assert!(!state.checkmate(), "{mv} allows mate by {reply}");
            state.undo_move();
        }
    }

    #[test]
    fn leaves_the_state_where_it_found_it() {
        let mut state = GameState::new();
        let before = state.to_fen();
        let moves = state.generate_valid_moves();
        let _ = find_move(&mut state, &moves, &mut rng());
        assert_eq!(state.to_fen(), before);
    }

    #[test]
    fn returns_none_without_moves() {
        let mut state: GameState = "k7/2Q5/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.is_empty());
        assert!(find_move(&mut state, &moves, &mut rng()).is_none());
    }
}
