//! The game state: board, side to move, king locations, castling rights,
//! en passant target, and the move history that makes undo exact.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::StateError;
use crate::movegen::MoveSet;
use crate::movegen::pins::{Check, Pin};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

/// The 8x8 board. Row 0 is Black's back rank, row 7 is White's; column 0
/// is file A. Empty squares hold `None`.
pub type Board = [[Option<Piece>; 8]; 8];

const INITIAL_BOARD: Board = [
    [
        Some(Piece::BLACK_ROOK),
        Some(Piece::BLACK_KNIGHT),
        Some(Piece::BLACK_BISHOP),
        Some(Piece::BLACK_QUEEN),
        Some(Piece::BLACK_KING),
        Some(Piece::BLACK_BISHOP),
        Some(Piece::BLACK_KNIGHT),
        Some(Piece::BLACK_ROOK),
    ],
    [Some(Piece::BLACK_PAWN); 8],
    [None; 8],
    [None; 8],
    [None; 8],
    [None; 8],
    [Some(Piece::WHITE_PAWN); 8],
    [
        Some(Piece::WHITE_ROOK),
        Some(Piece::WHITE_KNIGHT),
        Some(Piece::WHITE_BISHOP),
        Some(Piece::WHITE_QUEEN),
        Some(Piece::WHITE_KING),
        Some(Piece::WHITE_BISHOP),
        Some(Piece::WHITE_KNIGHT),
        Some(Piece::WHITE_ROOK),
    ],
];

/// A complete game of chess in progress.
///
/// All mutation goes through [`make_move`](GameState::make_move),
/// [`undo_move`](GameState::undo_move), and
/// [`generate_valid_moves`](GameState::generate_valid_moves). The search
/// explores positions by making and undoing moves on this one state; the
/// state is not re-entrant, so at most one traversal may be in flight.
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) white_king_location: Tile,
    pub(crate) black_king_location: Tile,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) in_check: bool,
    /// Pins of the side to move, rebuilt by every move generation.
    pub(crate) pins: Vec<Pin>,
    /// Checks against the side to move, rebuilt by every move generation.
    pub(crate) checks: Vec<Check>,
    /// The tile a pawn just jumped over, if the last move was a double step.
    pub(crate) en_passant_possible: Option<Tile>,
    pub(crate) castling: CastleRights,
    /// Castling rights after each made move; starts with the initial rights.
    pub(crate) castle_rights_log: Vec<CastleRights>,
    /// En passant target after each made move; starts with the initial target.
    pub(crate) en_passant_log: Vec<Option<Tile>>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) valid_moves: MoveSet,
}

impl GameState {
    /// Return the initial position: White to move, all four castling
    /// rights, no en passant target.
    pub fn new() -> GameState {
        GameState::from_parts(INITIAL_BOARD, true, CastleRights::ALL, None)
    }

    /// Assemble a state from its components. King locations are scanned
    /// from the board; callers validate afterwards.
    pub(crate) fn from_parts(
        board: Board,
        white_to_move: bool,
        castling: CastleRights,
        en_passant_possible: Option<Tile>,
    ) -> GameState {
        let mut white_king_location = Tile::new(7, 4);
        let mut black_king_location = Tile::new(0, 4);
        for tile in Tile::all() {
            if let Some(piece) = board[tile.row()][tile.col()]
                && piece.kind() == PieceKind::King
            {
                match piece.color() {
                    Color::White => white_king_location = tile,
                    Color::Black => black_king_location = tile,
                }
            }
        }
        GameState {
            board,
            white_to_move,
            white_king_location,
            black_king_location,
            checkmate: false,
            stalemate: false,
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            en_passant_possible,
            castling,
            castle_rights_log: vec![castling],
            en_passant_log: vec![en_passant_possible],
            move_log: Vec::new(),
            valid_moves: MoveSet::new(),
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the piece on a tile, if any.
    #[inline]
    pub fn piece_at(&self, tile: Tile) -> Option<Piece> {
        self.board[tile.row()][tile.col()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, tile: Tile, piece: Option<Piece>) {
        self.board[tile.row()][tile.col()] = piece;
    }

    /// Return `true` if it is White's turn.
    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Return `true` if the side to move is checkmated.
    ///
    /// Refreshed by [`generate_valid_moves`](GameState::generate_valid_moves).
    #[inline]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// Return `true` if the side to move is stalemated.
    ///
    /// Refreshed by [`generate_valid_moves`](GameState::generate_valid_moves).
    #[inline]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    /// Return `true` if the side to move is in check.
    ///
    /// Refreshed by [`generate_valid_moves`](GameState::generate_valid_moves).
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Return the white king's tile.
    #[inline]
    pub fn white_king_location(&self) -> Tile {
        self.white_king_location
    }

    /// Return the black king's tile.
    #[inline]
    pub fn black_king_location(&self) -> Tile {
        self.black_king_location
    }

    /// Return the king tile for a color.
    #[inline]
    pub fn king_location(&self, color: Color) -> Tile {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    #[inline]
    pub(crate) fn set_king_location(&mut self, color: Color, tile: Tile) {
        match color {
            Color::White => self.white_king_location = tile,
            Color::Black => self.black_king_location = tile,
        }
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target tile, if any.
    #[inline]
    pub fn en_passant_possible(&self) -> Option<Tile> {
        self.en_passant_possible
    }

    /// Return the moves made so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Return the legal moves cached by the last
    /// [`generate_valid_moves`](GameState::generate_valid_moves).
    #[inline]
    pub fn valid_moves(&self) -> &MoveSet {
        &self.valid_moves
    }

    /// Validate structural invariants: one king per side, recorded king
    /// locations matching the board, and no pawns on a back rank.
    pub fn validate(&self) -> Result<(), StateError> {
        for color in Color::ALL {
            let name = match color {
                Color::White => "white",
                Color::Black => "black",
            };
            let king = Piece::new(PieceKind::King, color);
            let count = Tile::all().filter(|&t| self.piece_at(t) == Some(king)).count();
            if count != 1 {
                return Err(StateError::InvalidKingCount { color: name, count });
            }
            if self.piece_at(self.king_location(color)) != Some(king) {
                return Err(StateError::KingLocationMismatch { color: name });
            }
        }
        for row in [0, 7] {
            for col in 0..8 {
                if let Some(piece) = self.board[row][col]
                    && piece.kind() == PieceKind::Pawn
                {
                    return Err(StateError::PawnsOnBackRank);
                }
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this state's board.
    pub fn pretty(&self) -> PrettyState<'_> {
        PrettyState(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{}\")", self.to_fen())
    }
}

/// Wrapper that prints the board as an 8x8 diagram with rank and file legends.
pub struct PrettyState<'a>(&'a GameState);

impl fmt::Display for PrettyState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let c = match self.0.board[row][col] {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
