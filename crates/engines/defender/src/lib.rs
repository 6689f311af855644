//! Defender opponent
//!
//! Answers a checking move the way a tsume problem's defending side would:
//! every legal reply is scored statically (see [`score`]) and the first
//! highest-scoring one is played. There is no search beyond a one-ply look
//! for the attacker's mate.

pub mod score;

use shogi_core::{checkers, legal_moves, BoardState, Move, Opponent, Reply, Side};
use tracing::{debug, trace};

pub use score::{piece_value, score_reply};

#[cfg(test)]
mod lib_tests;

/// Best reply of `defender` in `state` with its score.
///
/// Ties keep the earliest move in generation order. `None` when the defender
/// has no legal move.
pub fn pick_defense(state: &BoardState, defender: Side) -> Option<(Move, i32)> {
    scan_replies(state, defender).0
}

/// Best reply and the number of legal replies scored.
fn scan_replies(state: &BoardState, defender: Side) -> (Option<(Move, i32)>, u64) {
    let checking = checkers(&state.board, defender);
    let candidates = legal_moves(state, defender);
    let mut best: Option<(Move, i32)> = None;

    for &mv in &candidates {
        let score = score_reply(state, &mv, &checking);
        trace!(reply = %mv, score, "scored reply");
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    (best, candidates.len() as u64)
}

#[derive(Debug, Clone, Default)]
pub struct DefenderEngine {
    nodes: u64,
}

impl DefenderEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Opponent for DefenderEngine {
    fn reply(&mut self, state: &BoardState) -> Reply {
        let (best, nodes) = scan_replies(state, state.side_to_move);
        self.nodes = nodes;

        match best {
            Some((mv, score)) => {
                debug!(reply = %mv, score, candidates = self.nodes, "defender picked reply");
                Reply {
                    best_move: Some(mv),
                    score,
                    nodes: self.nodes,
                }
            }
            None => {
                debug!(sfen = %state, "defender has no legal reply");
                Reply::none()
            }
        }
    }

    fn name(&self) -> &str {
        "Defender v1.0"
    }

    fn new_problem(&mut self) {
        self.nodes = 0;
    }
}
