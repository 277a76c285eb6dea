//! Core chess rules: board state, legal move generation, and make/undo.

mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod tile;

pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveId};
pub use color::Color;
pub use error::{FenError, StateError};
pub use fen::STARTING_FEN;
pub use game::{Board, GameState, PrettyState};
pub use movegen::MoveSet;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use tile::Tile;
