//! Error types for the shogi core crate

use thiserror::Error;

use crate::types::{PieceKind, Side, Square};

/// Malformed board notation or move token. The codec rejects the whole input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} whitespace-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("expected 9 ranks separated by '/', found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} describes {width} files instead of 9")]
    RankWidth { rank: usize, width: usize },

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidBoardChar { ch: char, rank: usize },

    #[error("promotion marker in rank {rank} is not followed by a promotable piece")]
    DanglingPromotion { rank: usize },

    #[error("invalid side to move '{token}' (expected 'b' or 'w')")]
    InvalidSide { token: String },

    #[error("invalid hand '{token}': {reason}")]
    InvalidHand { token: String, reason: String },

    #[error("invalid move token '{token}': {reason}")]
    InvalidMove { token: String, reason: String },
}

impl ParseError {
    pub(crate) fn hand(token: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidHand {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mv(token: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidMove {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// A board transition was requested whose precondition does not hold.
///
/// Callers are expected to check legality first, so this points at a caller bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalState {
    #[error("square {square:?} is off the board")]
    OffBoard { square: Square },

    #[error("no piece on {square:?}")]
    EmptySquare { square: Square },

    #[error("{side:?} has no {kind:?} in hand")]
    NotInHand { kind: PieceKind, side: Side },

    #[error("{kind:?} cannot be dropped")]
    NotDroppable { kind: PieceKind },

    #[error("drop target {square:?} is occupied")]
    Occupied { square: Square },

    #[error("{token} is not a legal move here")]
    IllegalMove { token: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    IllegalState(#[from] IllegalState),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
