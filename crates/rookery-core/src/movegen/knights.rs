//! Knight move generation.

use crate::chess_move::Move;
use crate::game::GameState;
use crate::movegen::MoveSet;
use crate::tile::Tile;

/// The eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl GameState {
    /// Emit knight moves from `tile`.
    ///
    /// A pinned knight generates nothing: every jump leaves the pin ray.
    pub(crate) fn knight_moves(&self, tile: Tile, moves: &mut MoveSet) {
        if self.pin_on(tile).is_some() {
            return;
        }
        let ally = self.side_to_move();
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(target) = tile.offset(dr, dc)
                && self.piece_at(target).is_none_or(|p| p.color() != ally)
            {
                moves.insert(Move::new(tile, target, self.board()));
            }
        }
    }
}
