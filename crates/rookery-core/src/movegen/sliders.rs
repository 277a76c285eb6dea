//! Sliding piece move generation: rooks, bishops, and queens.

use crate::chess_move::Move;
use crate::game::GameState;
use crate::movegen::MoveSet;
use crate::tile::Tile;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

impl GameState {
    /// Emit rook moves from `tile`.
    pub(crate) fn rook_moves(&self, tile: Tile, moves: &mut MoveSet) {
        self.slider_moves(tile, &ROOK_DIRECTIONS, moves);
    }

    /// Emit bishop moves from `tile`.
    pub(crate) fn bishop_moves(&self, tile: Tile, moves: &mut MoveSet) {
        self.slider_moves(tile, &BISHOP_DIRECTIONS, moves);
    }

    /// Emit queen moves from `tile`: the union of rook and bishop rays.
    pub(crate) fn queen_moves(&self, tile: Tile, moves: &mut MoveSet) {
        self.rook_moves(tile, moves);
        self.bishop_moves(tile, moves);
    }

    /// Walk each ray until the edge or the first occupied tile, which is
    /// included only as an enemy capture. A pinned slider may move only
    /// along the pin direction or its negation.
    fn slider_moves(&self, tile: Tile, directions: &[(i8, i8)], moves: &mut MoveSet) {
        let pin = self.pin_on(tile);
        let ally = self.side_to_move();
        for &(dr, dc) in directions {
            if let Some((pr, pc)) = pin
                && (pr, pc) != (dr, dc)
                && (pr, pc) != (-dr, -dc)
            {
                continue;
            }
            for i in 1..8i8 {
                let Some(target) = tile.offset(dr * i, dc * i) else {
                    break;
                };
                match self.piece_at(target) {
                    None => moves.insert(Move::new(tile, target, self.board())),
                    Some(piece) if piece.color() != ally => {
                        moves.insert(Move::new(tile, target, self.board()));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
