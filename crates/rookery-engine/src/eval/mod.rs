//! Board evaluation: material, piece-square bonuses, and game-end scores.

pub mod material;
pub mod pst;

use rookery_core::{Color, GameState, Tile};

pub use material::{MATERIAL_VALUES, material_value, score_material};
pub use pst::position_score;

/// Score of a delivered checkmate, far outside any material swing.
pub const CHECKMATE: i32 = 100_000;

/// Score of a stalemated position.
pub const STALEMATE: i32 = 0;

/// Evaluate material plus piece-square bonuses from White's point of view:
/// positive favors White, negative favors Black.
pub fn score_position(state: &GameState) -> i32 {
    let mut total = 0;
    for tile in Tile::all() {
        if let Some(piece) = state.piece_at(tile) {
            let score = material_value(piece.kind()) + position_score(piece, tile);
            match piece.color() {
                Color::White => total += score,
                Color::Black => total -= score,
            }
        }
    }
    total
}

/// Evaluate the board from White's point of view, honoring game over.
///
/// Checkmate scores `-CHECKMATE` when White is the side to move (White has
/// been mated) and `+CHECKMATE` otherwise; stalemate scores [`STALEMATE`].
/// Reads the flags refreshed by the last
/// [`generate_valid_moves`](GameState::generate_valid_moves).
pub fn score_board(state: &GameState) -> i32 {
    if state.checkmate() {
        if state.white_to_move() {
            -CHECKMATE
        } else {
            CHECKMATE
        }
    } else if state.stalemate() {
        STALEMATE
    } else {
        score_position(state)
    }
}
