//! Piece-square tables.
//!
//! Each table is written from White's point of view with row 0 at the top
//! (Black's back rank), matching the board's indexing. Black's bonus for a
//! square is read from the vertically mirrored row, so the tables stay
//! symmetric between the colors. Kings carry no positional bonus.

use rookery_core::{Color, Piece, PieceKind, Tile};

#[rustfmt::skip]
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
pub const ROOK_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
pub const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

/// Return the table for a piece kind, or `None` for kings.
pub fn position_table(kind: PieceKind) -> Option<&'static [[i32; 8]; 8]> {
    match kind {
        PieceKind::Pawn => Some(&PAWN_TABLE),
        PieceKind::Knight => Some(&KNIGHT_TABLE),
        PieceKind::Bishop => Some(&BISHOP_TABLE),
        PieceKind::Rook => Some(&ROOK_TABLE),
        PieceKind::Queen => Some(&QUEEN_TABLE),
        PieceKind::King => None,
    }
}

/// Return the positional bonus for a piece standing on a tile.
///
/// White reads the table directly; Black reads the row-reversed mirror.
pub fn position_score(piece: Piece, tile: Tile) -> i32 {
    match position_table(piece.kind()) {
        None => 0,
        Some(table) => match piece.color() {
            Color::White => table[tile.row()][tile.col()],
            Color::Black => table[7 - tile.row()][tile.col()],
        },
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Color, Piece, PieceKind, Tile};

    use super::{position_score, position_table};

    #[test]
    fn black_tables_are_the_white_tables_mirrored() {
        for kind in PieceKind::ALL {
            for row in 0..8 {
                for col in 0..8 {
                    let tile = Tile::new(row, col);
                    let mirrored = Tile::new(7 - row, col);
                    assert_eq!(
                        position_score(Piece::new(kind, Color::White), tile),
                        position_score(Piece::new(kind, Color::Black), mirrored),
                        "mirror mismatch for {kind:?} at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn kings_have_no_table() {
        assert!(position_table(PieceKind::King).is_none());
        let king_tile = Tile::from_notation("E1").unwrap();
        assert_eq!(position_score(Piece::WHITE_KING, king_tile), 0);
    }

    #[test]
    fn white_pawn_advances_gain_value() {
        let pawn = Piece::WHITE_PAWN;
        let home = position_score(pawn, Tile::from_notation("E2").unwrap());
        let center = position_score(pawn, Tile::from_notation("E4").unwrap());
        let seventh = position_score(pawn, Tile::from_notation("E7").unwrap());
        assert!(center > home);
        assert!(seventh > center);
    }

    #[test]
    fn sample_lookups() {
        // Central knight vs corner knight.
        let knight = Piece::WHITE_KNIGHT;
        assert_eq!(position_score(knight, Tile::from_notation("A1").unwrap()), -50);
        assert_eq!(position_score(knight, Tile::from_notation("D4").unwrap()), 20);
        // Black pawn on e5 mirrors a white pawn on e4.
        let black_pawn = Piece::BLACK_PAWN;
        assert_eq!(position_score(black_pawn, Tile::from_notation("E5").unwrap()), 20);
    }
}
