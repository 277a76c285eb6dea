//! Making and undoing moves in place.
//!
//! The search explores positions by mutating a single [`GameState`] and
//! reversing each transition with the matching undo, so nothing here
//! allocates a new board. Enough is logged on every made move (the move
//! record itself plus castling-rights and en-passant snapshots) to restore
//! the prior position exactly.

use tracing::warn;

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::game::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

impl GameState {
    /// Apply a move.
    ///
    /// Callers must only pass moves obtained from
    /// [`generate_valid_moves`](GameState::generate_valid_moves); the state
    /// trusts the caller and debug-asserts that the start square holds the
    /// recorded piece. Clears the checkmate and stalemate flags; the next
    /// generation recomputes them.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.piece_at(mv.start()),
            Some(mv.piece_moved()),
            "move does not match the board: {mv:?}"
        );

        let piece = mv.piece_moved();
        self.set_piece(mv.start(), None);
        self.set_piece(mv.end(), Some(piece));
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;

        if piece.kind() == PieceKind::King {
            self.set_king_location(piece.color(), mv.end());
        }

        // Promotion is always to a queen.
        if mv.is_pawn_promotion() {
            self.set_piece(mv.end(), Some(Piece::new(PieceKind::Queen, piece.color())));
        }

        // The pawn captured en passant stands on the start row, end column.
        if mv.is_en_passant() {
            self.set_piece(Tile::new(mv.start().row(), mv.end().col()), None);
        }

        // A double step opens the skipped tile to en passant for one ply.
        if piece.kind() == PieceKind::Pawn && mv.start().row().abs_diff(mv.end().row()) == 2 {
            let skipped = Tile::new((mv.start().row() + mv.end().row()) / 2, mv.end().col());
            self.en_passant_possible = Some(skipped);
        } else {
            self.en_passant_possible = None;
        }

        if mv.is_castle() {
            let row = mv.end().row();
            if mv.end().col() > mv.start().col() {
                // King side: rook hops from the corner to the king's near side.
                let rook = self.board[row][mv.end().col() + 1].take();
                self.board[row][mv.end().col() - 1] = rook;
            } else {
                // Queen side.
                let rook = self.board[row][mv.end().col() - 2].take();
                self.board[row][mv.end().col() + 1] = rook;
            }
        }

        self.update_castle_rights(&mv);
        self.castle_rights_log.push(self.castling);
        self.en_passant_log.push(self.en_passant_possible);
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Undo the last move, restoring the prior position exactly.
    ///
    /// With an empty history this is a logged no-op.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            warn!("undo_move called with no moves to undo");
            return;
        };

        let piece = mv.piece_moved();
        self.set_piece(mv.start(), Some(piece));
        if mv.is_en_passant() {
            // The end tile was empty before the capture; the captured pawn
            // goes back beside the capturing pawn's start row.
            self.set_piece(mv.end(), None);
            self.set_piece(Tile::new(mv.start().row(), mv.end().col()), mv.piece_captured());
        } else {
            self.set_piece(mv.end(), mv.piece_captured());
        }
        self.white_to_move = !self.white_to_move;

        if piece.kind() == PieceKind::King {
            self.set_king_location(piece.color(), mv.start());
        }

        self.castle_rights_log.pop();
        self.castling = *self
            .castle_rights_log
            .last()
            .expect("castle rights log retains the initial snapshot");
        self.en_passant_log.pop();
        self.en_passant_possible = *self
            .en_passant_log
            .last()
            .expect("en passant log retains the initial snapshot");

        if mv.is_castle() {
            let row = mv.end().row();
            if mv.end().col() > mv.start().col() {
                let rook = self.board[row][mv.end().col() - 1].take();
                self.board[row][mv.end().col() + 1] = rook;
            } else {
                let rook = self.board[row][mv.end().col() + 1].take();
                self.board[row][mv.end().col() - 2] = rook;
            }
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    /// Revoke castling rights affected by a move: a king move loses both
    /// of its color's rights; a rook moving from, or captured on, its
    /// home corner loses that corner's right.
    fn update_castle_rights(&mut self, mv: &Move) {
        let piece = mv.piece_moved();
        match piece.kind() {
            PieceKind::King => {
                self.castling = self.castling.remove_color(piece.color());
            }
            PieceKind::Rook => {
                if mv.start().row() == piece.color().back_row() {
                    if mv.start().col() == 0 {
                        self.castling = self
                            .castling
                            .remove(queen_side_flag(piece.color()));
                    } else if mv.start().col() == 7 {
                        self.castling = self.castling.remove(king_side_flag(piece.color()));
                    }
                }
            }
            _ => {}
        }

        if let Some(captured) = mv.piece_captured()
            && captured.kind() == PieceKind::Rook
            && mv.end().row() == captured.color().back_row()
        {
            if mv.end().col() == 0 {
                self.castling = self.castling.remove(queen_side_flag(captured.color()));
            } else if mv.end().col() == 7 {
                self.castling = self.castling.remove(king_side_flag(captured.color()));
            }
        }
    }
}

fn king_side_flag(color: Color) -> CastleRights {
    match color {
        Color::White => CastleRights::WHITE_KING_SIDE,
        Color::Black => CastleRights::BLACK_KING_SIDE,
    }
}

fn queen_side_flag(color: Color) -> CastleRights {
    match color {
        Color::White => CastleRights::WHITE_QUEEN_SIDE,
        Color::Black => CastleRights::BLACK_QUEEN_SIDE,
    }
}
