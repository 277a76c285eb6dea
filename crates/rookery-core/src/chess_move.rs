//! Chess move records.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

/// Identifier derived from a move's coordinates:
/// `start_row * 1000 + start_col * 100 + end_row * 10 + end_col`.
///
/// Unique among the moves available in any single position.
pub type MoveId = u16;

/// An immutable record of a single move.
///
/// Captures everything needed to reverse the move later: the piece that
/// moved, the piece that was captured (if any), and the special-move flags.
/// Pawn promotion is detected at construction time; en passant and castling
/// are declared by the generator through their dedicated constructors.
#[derive(Clone, Copy)]
pub struct Move {
    start: Tile,
    end: Tile,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_pawn_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
}

impl Move {
    /// Create a normal (quiet or capturing) move.
    ///
    /// # Panics
    ///
    /// Panics if the start square is empty; move constructors are only
    /// called for occupied squares.
    pub fn new(start: Tile, end: Tile, board: &Board) -> Move {
        let piece_moved =
            board[start.row()][start.col()].expect("move start square must be occupied");
        let piece_captured = board[end.row()][end.col()];
        let is_pawn_promotion = piece_moved.kind() == PieceKind::Pawn
            && end.row() == piece_moved.color().promotion_row();
        Move {
            start,
            end,
            piece_moved,
            piece_captured,
            is_pawn_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Create an en passant capture.
    ///
    /// The end square is empty; the captured pawn is the enemy pawn that
    /// just double-stepped past, recorded here so undo can restore it.
    pub fn en_passant(start: Tile, end: Tile, board: &Board) -> Move {
        let piece_moved =
            board[start.row()][start.col()].expect("move start square must be occupied");
        let captured = Piece::new(PieceKind::Pawn, piece_moved.color().flip());
        Move {
            start,
            end,
            piece_moved,
            piece_captured: Some(captured),
            is_pawn_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Create a castling move, expressed as the king's two-square step.
    pub fn castle(start: Tile, end: Tile, board: &Board) -> Move {
        let piece_moved =
            board[start.row()][start.col()].expect("move start square must be occupied");
        Move {
            start,
            end,
            piece_moved,
            piece_captured: None,
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Return the start tile.
    #[inline]
    pub const fn start(&self) -> Tile {
        self.start
    }

    /// Return the end tile.
    #[inline]
    pub const fn end(&self) -> Tile {
        self.end
    }

    /// Return the piece that moved.
    #[inline]
    pub const fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    /// Return the piece that was captured, if any.
    #[inline]
    pub const fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    /// Return `true` if this move promotes a pawn.
    #[inline]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    /// Return `true` if this move is an en passant capture.
    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    /// Return `true` if this move is a castle.
    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// Return the move id. Two moves are equal iff their ids match.
    #[inline]
    pub fn id(&self) -> MoveId {
        (self.start.row() * 1000 + self.start.col() * 100 + self.end.row() * 10 + self.end.col())
            as MoveId
    }

    /// Return the concatenated algebraic squares, e.g. "B1C3".
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chess_notation())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?}", self.chess_notation(), self.piece_moved)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{captured:?}")?;
        }
        if self.is_pawn_promotion {
            write!(f, " promotion")?;
        }
        if self.is_en_passant {
            write!(f, " en-passant")?;
        }
        if self.is_castle {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game::GameState;
    use crate::piece::Piece;
    use crate::tile::Tile;

    fn tile(s: &str) -> Tile {
        Tile::from_notation(s).unwrap()
    }

    #[test]
    fn id_formula() {
        let state = GameState::new();
        // B1 = (7, 1), C3 = (5, 2)
        let mv = Move::new(tile("B1"), tile("C3"), state.board());
        assert_eq!(mv.id(), 7 * 1000 + 1 * 100 + 5 * 10 + 2);
    }

    #[test]
    fn equality_is_by_id() {
        let state = GameState::new();
        let a = Move::new(tile("E2"), tile("E4"), state.board());
        let b = Move::new(tile("E2"), tile("E4"), state.board());
        let c = Move::new(tile("D2"), tile("D4"), state.board());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn chess_notation() {
        let state = GameState::new();
        let mv = Move::new(tile("B1"), tile("C3"), state.board());
        assert_eq!(mv.chess_notation(), "B1C3");
        assert_eq!(format!("{mv}"), "B1C3");
    }

    #[test]
    fn records_capture() {
        let state: GameState = "4k3/8/8/3p4/4B3/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::new(tile("E4"), tile("D5"), state.board());
        assert_eq!(mv.piece_moved(), Piece::WHITE_BISHOP);
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn promotion_detected_at_construction() {
        let state: GameState = "7k/P7/8/8/8/8/7p/4K3 w - - 0 1".parse().unwrap();
        let white = Move::new(tile("A7"), tile("A8"), state.board());
        assert!(white.is_pawn_promotion());
        let black = Move::new(tile("H2"), tile("H1"), state.board());
        assert!(black.is_pawn_promotion());
        let quiet = Move::new(tile("A7"), tile("A8"), state.board());
        assert!(!quiet.is_en_passant());
        assert!(!quiet.is_castle());
    }

    #[test]
    fn non_promotion_pawn_move() {
        let state = GameState::new();
        let mv = Move::new(tile("E2"), tile("E4"), state.board());
        assert!(!mv.is_pawn_promotion());
    }

    #[test]
    fn en_passant_records_captured_pawn() {
        let state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let mv = Move::en_passant(tile("E5"), tile("D6"), state.board());
        assert!(mv.is_en_passant());
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_PAWN));
        assert_eq!(mv.piece_moved(), Piece::WHITE_PAWN);
    }

    #[test]
    fn castle_flag() {
        let state: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let mv = Move::castle(tile("E1"), tile("G1"), state.board());
        assert!(mv.is_castle());
        assert_eq!(mv.piece_captured(), None);
    }
}
