//! Castling rights, four flags packed into a `u8`.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which wing of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// The four castling rights: bit 0 = white king-side, bit 1 = white
/// queen-side, bit 2 = black king-side, bit 3 = black queen-side.
///
/// A full snapshot is logged on every made move so undo restores rights
/// exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White king-side.
    pub const WHITE_KING_SIDE: CastleRights = CastleRights(0b0001);
    /// White queen-side.
    pub const WHITE_QUEEN_SIDE: CastleRights = CastleRights(0b0010);
    /// Black king-side.
    pub const BLACK_KING_SIDE: CastleRights = CastleRights(0b0100);
    /// Black queen-side.
    pub const BLACK_QUEEN_SIDE: CastleRights = CastleRights(0b1000);

    /// Return the flag for one color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING_SIDE,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN_SIDE,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING_SIDE,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN_SIDE,
        }
    }

    /// Return `true` if the given color may castle on the given side.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side).0 != 0
    }

    /// Return `true` if every flag in `other` is present.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return rights with the flags of `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return rights with the flags of `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Return rights with both flags of a color removed (its king moved).
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        match color {
            Color::White => self.remove(Self::WHITE_KING_SIDE).remove(Self::WHITE_QUEEN_SIDE),
            Color::Black => self.remove(Self::BLACK_KING_SIDE).remove(Self::BLACK_QUEEN_SIDE),
        }
    }

    /// Parse the FEN castling field ("KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KING_SIDE,
                'Q' => Self::WHITE_QUEEN_SIDE,
                'k' => Self::BLACK_KING_SIDE,
                'q' => Self::BLACK_QUEEN_SIDE,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.insert(flag);
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.contains(Self::WHITE_KING_SIDE) {
            s.push('K');
        }
        if self.contains(Self::WHITE_QUEEN_SIDE) {
            s.push('Q');
        }
        if self.contains(Self::BLACK_KING_SIDE) {
            s.push('k');
        }
        if self.contains(Self::BLACK_QUEEN_SIDE) {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
