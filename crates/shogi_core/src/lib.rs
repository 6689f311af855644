//! Shogi rules engine used by the problem authoring tools.
//!
//! Board model and transitions (`board`), board notation and move tokens
//! (`notation`), pseudo-legal generation (`movegen`) and legality, check and
//! mate detection (`rules`). Every state transition returns a new value.

pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::{Error, IllegalState, ParseError, Result};
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Opponent trait: implemented by every scripted reply strategy
// =============================================================================

/// Reply chosen by an opponent
#[derive(Debug, Clone)]
pub struct Reply {
    /// The chosen move (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Static score the opponent assigned to the chosen move
    pub score: i32,
    /// Number of candidate moves examined
    pub nodes: u64,
}

impl Reply {
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }
}

/// Trait that all scripted opponents must implement.
///
/// The opponent answers for `state.side_to_move`. Implementations pick a
/// plausible move quickly; none of them search.
pub trait Opponent: Send {
    /// Choose a reply in the given position.
    fn reply(&mut self, state: &BoardState) -> Reply;

    /// Returns the opponent's name for logs and tool output
    fn name(&self) -> &str;

    /// Reset internal state before a new problem is played.
    fn new_problem(&mut self) {}
}
