//! Material values and the raw material balance.

use rookery_core::{GameState, PieceKind, Tile};

/// Material values in centipawns, indexed by [`PieceKind::index`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   |     0 |
pub const MATERIAL_VALUES: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 0];

/// Return the material value of a piece kind.
#[inline]
pub fn material_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUES[kind.index()]
}

/// Sum the material on the board relative to the side to move: positive
/// when the mover is ahead, negative when behind.
pub fn score_material(state: &GameState) -> i32 {
    let ally = state.side_to_move();
    let mut score = 0;
    for tile in Tile::all() {
        if let Some(piece) = state.piece_at(tile) {
            let value = material_value(piece.kind());
            if piece.color() == ally {
                score += value;
            } else {
                score -= value;
            }
        }
    }
    score
}
