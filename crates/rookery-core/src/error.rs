//! Error types for position parsing and validation.

/// Errors from parsing a FEN position string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string does not have the expected number of fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// The piece placement does not describe exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index within the placement field.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character in the piece placement.
    #[error("invalid piece character '{character}'")]
    InvalidPieceChar {
        /// The offending character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color \"{found}\"")]
    InvalidColor {
        /// The offending field.
        found: String,
    },
    /// An unrecognized character in the castling field.
    #[error("invalid castling character '{character}'")]
    InvalidCastlingChar {
        /// The offending character.
        character: char,
    },
    /// The en passant field is not "-" or a square a pawn just jumped over.
    #[error("invalid en passant square \"{found}\"")]
    InvalidEnPassant {
        /// The offending field.
        found: String,
    },
    /// The parsed position fails structural validation.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying validation error.
        #[from]
        source: StateError,
    },
}

/// Errors from structural validation of a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A side does not have exactly one king.
    #[error("expected 1 {color} king, found {count}")]
    InvalidKingCount {
        /// Which side ("white" or "black").
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// A recorded king location does not match the board.
    #[error("{color} king location does not match the board")]
    KingLocationMismatch {
        /// Which side ("white" or "black").
        color: &'static str,
    },
    /// Pawns occupy a back rank.
    #[error("pawns on the back rank")]
    PawnsOnBackRank,
}
