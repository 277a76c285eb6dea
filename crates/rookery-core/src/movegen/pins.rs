//! Pin and check detection.
//!
//! The analyzer walks the eight sliding rays out from a king and then the
//! eight knight offsets. At most one allied piece per ray is tracked as a
//! pin candidate; the first enemy piece on the ray either turns that
//! candidate into a pin, delivers check, or ends the ray.

use crate::color::Color;
use crate::game::GameState;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

use super::knights::KNIGHT_OFFSETS;

/// Ray directions from the king: indices 0..3 are orthogonal, 4..7 diagonal.
const RAY_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An allied piece that may not leave its ray: moving it off the
/// direction from the king would expose the king to a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pin {
    pub tile: Tile,
    /// Direction from the king toward the pinned piece.
    pub dir: (i8, i8),
}

/// An enemy piece giving check, with the direction it checks from.
/// For a knight the direction is its jump offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Check {
    pub tile: Tile,
    pub dir: (i8, i8),
}

impl GameState {
    /// Compute whether `color`'s king is in check, which of `color`'s
    /// pieces are pinned, and by whom the king is checked.
    ///
    /// Allied kings are transparent to the ray walk. That property is what
    /// makes king-move legality testable by relocating the recorded king
    /// location alone: the vacated board square cannot shield the ray.
    pub(crate) fn pins_and_checks(&self, color: Color) -> (bool, Vec<Pin>, Vec<Check>) {
        let enemy = color.flip();
        let king = self.king_location(color);
        let mut in_check = false;
        let mut pins = Vec::new();
        let mut checks = Vec::new();

        for (j, &(dr, dc)) in RAY_DIRECTIONS.iter().enumerate() {
            let mut candidate: Option<Pin> = None;
            for i in 1..8i8 {
                let Some(tile) = king.offset(dr * i, dc * i) else {
                    break;
                };
                let Some(piece) = self.piece_at(tile) else {
                    continue;
                };
                if piece.color() == color {
                    if piece.kind() == PieceKind::King {
                        continue;
                    }
                    if candidate.is_none() {
                        candidate = Some(Pin { tile, dir: (dr, dc) });
                    } else {
                        // A second allied piece means the first is not pinned.
                        break;
                    }
                } else {
                    let threatens = match piece.kind() {
                        PieceKind::Rook => j <= 3,
                        PieceKind::Bishop => j >= 4,
                        PieceKind::Queen => true,
                        PieceKind::King => i == 1,
                        // A pawn threatens one square along its own capture
                        // diagonals: from a white king's view those are the
                        // upward diagonals, from a black king's the downward.
                        PieceKind::Pawn => {
                            i == 1
                                && match enemy {
                                    Color::White => (6..=7).contains(&j),
                                    Color::Black => (4..=5).contains(&j),
                                }
                        }
                        PieceKind::Knight => false,
                    };
                    if threatens {
                        match candidate {
                            None => {
                                in_check = true;
                                checks.push(Check { tile, dir: (dr, dc) });
                            }
                            Some(pin) => {
                                pins.push(pin);
                                break;
                            }
                        }
                    } else {
                        break;
                    }
                }
            }
        }

        // Knights jump, so their checks are found by offset rather than ray.
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(tile) = king.offset(dr, dc)
                && let Some(piece) = self.piece_at(tile)
                && piece.color() == enemy
                && piece.kind() == PieceKind::Knight
            {
                in_check = true;
                checks.push(Check { tile, dir: (dr, dc) });
            }
        }

        (in_check, pins, checks)
    }

    /// Look up the pin on a tile from the current generation's pin list.
    #[inline]
    pub(crate) fn pin_on(&self, tile: Tile) -> Option<(i8, i8)> {
        self.pins.iter().find(|pin| pin.tile == tile).map(|pin| pin.dir)
    }
}
