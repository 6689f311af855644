//! Random opponent
//!
//! Replies with a move picked uniformly at random from all legal moves.
//! Useful for:
//! - Exercising problem lines against replies nobody scripted
//! - Stress testing move generation

use rand::seq::SliceRandom;
use rand::thread_rng;
use shogi_core::{legal_moves_into, BoardState, Opponent, Reply};

#[cfg(test)]
mod lib_tests;

/// An opponent that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Opponent for RandomEngine {
    fn reply(&mut self, state: &BoardState) -> Reply {
        let mut moves = Vec::with_capacity(128);
        legal_moves_into(state, state.side_to_move, &mut moves);
        self.nodes = moves.len() as u64;

        Reply {
            best_move: moves.choose(&mut thread_rng()).copied(),
            score: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_problem(&mut self) {
        self.nodes = 0;
    }
}
