//! Board coordinates.
//!
//! A [`Tile`] is a (row, col) pair with row 0 as Black's back rank and
//! row 7 as White's, so the board reads top-down the way a diagram does.
//! Column 0 is file A. Rank notation maps rank 1 to row 7 and rank 8 to
//! row 0.

use std::fmt;

/// A square on the board, addressed by (row, col).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    row: u8,
    col: u8,
}

impl Tile {
    /// Create a tile from a row and column.
    ///
    /// Debug-asserts that both coordinates are within 0..8.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Tile {
        debug_assert!(row < 8 && col < 8);
        Tile {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Return the row (0 = Black's back rank).
    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Return the column (0 = file A).
    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Step by a signed (row, col) offset, returning `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Tile> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Tile {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Parse algebraic notation ("B1", case-insensitive) into a tile.
    pub fn from_notation(s: &str) -> Option<Tile> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_uppercase();
        let rank = bytes[1];
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        let col = file - b'A';
        let row = b'8' - rank;
        Some(Tile { row, col })
    }

    /// Iterate over all 64 tiles in row-major order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..8).flat_map(|row| (0..8).map(move |col| Tile::new(row, col)))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({self})")
    }
}
