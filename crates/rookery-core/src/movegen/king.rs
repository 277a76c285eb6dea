//! King move generation and castling.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::game::GameState;
use crate::movegen::MoveSet;
use crate::tile::Tile;

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl GameState {
    /// Emit the king's single-square steps from `tile`.
    ///
    /// Legality is tested by relocating the recorded king location to the
    /// target and re-running the pin/check analyzer. The board square the
    /// king stands on is left untouched during the trial; the analyzer
    /// treats allied kings as transparent, so the vacated square does not
    /// shield rays that pass through it. The location is restored before
    /// the next candidate.
    pub(crate) fn king_moves(&mut self, tile: Tile, moves: &mut MoveSet) {
        let ally = self.side_to_move();
        for (dr, dc) in KING_OFFSETS {
            let Some(target) = tile.offset(dr, dc) else {
                continue;
            };
            if self.piece_at(target).is_some_and(|p| p.color() == ally) {
                continue;
            }
            self.set_king_location(ally, target);
            let (in_check, _, _) = self.pins_and_checks(ally);
            if !in_check {
                moves.insert(Move::new(tile, target, self.board()));
            }
            self.set_king_location(ally, tile);
        }
    }

    /// Append legal castling moves for the king on `tile`.
    ///
    /// Castling requires the right to still be held, the lane between king
    /// and rook to be empty, and neither the king's current, transit, nor
    /// destination square to be attacked.
    pub(crate) fn castle_moves(&mut self, tile: Tile, moves: &mut MoveSet) {
        if self.tile_under_attack(tile) {
            return;
        }
        let us = self.side_to_move();
        if self.castling.has(us, CastleSide::KingSide) {
            self.king_side_castle(tile, moves);
        }
        if self.castling.has(us, CastleSide::QueenSide) {
            self.queen_side_castle(tile, moves);
        }
    }

    fn king_side_castle(&mut self, tile: Tile, moves: &mut MoveSet) {
        let (Some(transit), Some(target)) = (tile.offset(0, 1), tile.offset(0, 2)) else {
            return;
        };
        if self.piece_at(transit).is_none()
            && self.piece_at(target).is_none()
            && !self.tile_under_attack(transit)
            && !self.tile_under_attack(target)
        {
            moves.insert(Move::castle(tile, target, self.board()));
        }
    }

    fn queen_side_castle(&mut self, tile: Tile, moves: &mut MoveSet) {
        let (Some(transit), Some(target), Some(rook_lane)) =
            (tile.offset(0, -1), tile.offset(0, -2), tile.offset(0, -3))
        else {
            return;
        };
        if self.piece_at(transit).is_none()
            && self.piece_at(target).is_none()
            && self.piece_at(rook_lane).is_none()
            && !self.tile_under_attack(transit)
            && !self.tile_under_attack(target)
        {
            moves.insert(Move::castle(tile, target, self.board()));
        }
    }
}
