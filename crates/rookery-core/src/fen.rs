//! FEN parsing and serialization for [`GameState`].

use std::fmt::Write as _;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::error::FenError;
use crate::game::{Board, GameState};
use crate::piece::Piece;
use crate::tile::Tile;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for GameState {
    type Err = FenError;

    /// Parse a FEN position.
    ///
    /// The move counters are optional and ignored: the rules engine tracks
    /// no halfmove clock, so four fields (placement, color, castling,
    /// en passant) are enough.
    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Piece placement: FEN ranks run 8 down to 1, which is row 0 to 7.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board: Board = [[None; 8]; 8];
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    if col >= 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: col + 1,
                        });
                    }
                    board[rank_index][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        let white_to_move = match fields[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            s => {
                let tile = Tile::from_notation(s).ok_or_else(|| FenError::InvalidEnPassant {
                    found: s.to_string(),
                })?;
                // The target is the jumped-over tile, always on row 2 or 5.
                if tile.row() != 2 && tile.row() != 5 {
                    return Err(FenError::InvalidEnPassant {
                        found: s.to_string(),
                    });
                }
                Some(tile)
            }
        };

        let state = GameState::from_parts(board, white_to_move, castling, en_passant);
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Serialize the position to FEN.
    ///
    /// The halfmove clock is not tracked and serializes as 0; the fullmove
    /// number is derived from the move log.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.board()[row][col] {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = if self.white_to_move() { 'w' } else { 'b' };
        let castling = self.castling().to_fen();
        let en_passant = match self.en_passant_possible() {
            Some(tile) => format!("{tile}").to_ascii_lowercase(),
            None => "-".to_string(),
        };
        let fullmove = self.move_log().len() / 2 + 1;
        let _ = write!(fen, " {side} {castling} {en_passant} 0 {fullmove}");
        fen
    }
}
