//! Pawn move generation: pushes, captures, and en passant.

use crate::chess_move::Move;
use crate::color::Color;
use crate::game::GameState;
use crate::movegen::MoveSet;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

impl GameState {
    /// Emit pawn moves from `tile`.
    ///
    /// A pinned pawn may push only when the pin runs along its file, and
    /// capture only along the pin diagonal or its negation.
    pub(crate) fn pawn_moves(&self, tile: Tile, moves: &mut MoveSet) {
        let pin = self.pin_on(tile);
        let (direction, start_row, enemy, king) = match self.side_to_move() {
            Color::White => (-1i8, 6, Color::Black, self.white_king_location),
            Color::Black => (1i8, 1, Color::White, self.black_king_location),
        };

        // Single push, and a double push from the starting rank.
        if let Some(forward) = tile.offset(direction, 0)
            && self.piece_at(forward).is_none()
            && (pin.is_none() || pin == Some((direction, 0)))
        {
            moves.insert(Move::new(tile, forward, self.board()));
            if tile.row() == start_row
                && let Some(double) = tile.offset(2 * direction, 0)
                && self.piece_at(double).is_none()
            {
                moves.insert(Move::new(tile, double, self.board()));
            }
        }

        // Diagonal captures, one square toward the enemy on either side.
        for lr in [-1i8, 1] {
            if let Some((pr, pc)) = pin
                && (pr, pc) != (direction, lr)
                && (pr, pc) != (-direction, -lr)
            {
                continue;
            }
            let Some(target) = tile.offset(direction, lr) else {
                continue;
            };
            if let Some(captured) = self.piece_at(target) {
                if captured.color() == enemy {
                    moves.insert(Move::new(tile, target, self.board()));
                }
            } else if Some(target) == self.en_passant_possible
                && self.en_passant_keeps_rank_safe(tile, target, king, enemy)
            {
                moves.insert(Move::en_passant(tile, target, self.board()));
            }
        }
    }

    /// An en passant capture removes two pawns from one rank at once. When
    /// the king shares that rank, scan outward from it past the vanishing
    /// pair: if the first piece beyond is an enemy rook or queen, the
    /// capture would expose the king and is illegal.
    fn en_passant_keeps_rank_safe(
        &self,
        pawn: Tile,
        target: Tile,
        king: Tile,
        enemy: Color,
    ) -> bool {
        if king.row() != pawn.row() {
            return true;
        }
        let step: i8 = if king.col() < pawn.col() { 1 } else { -1 };
        let captured_col = target.col();
        let mut tile = king;
        while let Some(next) = tile.offset(0, step) {
            tile = next;
            if tile.col() == pawn.col() || tile.col() == captured_col {
                continue;
            }
            if let Some(piece) = self.piece_at(tile) {
                return !(piece.color() == enemy
                    && matches!(piece.kind(), PieceKind::Rook | PieceKind::Queen));
            }
        }
        true
    }
}
