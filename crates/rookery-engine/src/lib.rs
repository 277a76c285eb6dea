//! Evaluation and search for rookery.

pub mod eval;
pub mod search;

pub use eval::{CHECKMATE, STALEMATE, score_board, score_material, score_position};
pub use search::{MAX_DEPTH, Searcher, Strategy};
