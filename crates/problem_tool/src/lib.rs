//! Problem checking for ML-shogi
//!
//! This crate provides:
//! - Loading problem files (TOML: name, start position, solution lines)
//! - Replaying every line against the rules and reporting bad moves
//! - Picking an opponent by name for reply checks
//!
//! # Usage
//!
//! ```bash
//! cargo run -p problem_tool -- check problems/corner_mate.toml
//! cargo run -p problem_tool -- reply "4k4/4G4/9/9/9/9/9/9/4K4 w -" --opponent defender
//! cargo run -p problem_tool -- perft "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b -" 3
//! ```

mod problem;

pub use problem::*;

use defender_engine::DefenderEngine;
use random_engine::RandomEngine;
use shogi_core::Opponent;

/// Opponent by name; `None` for an unknown name.
pub fn create_opponent(name: &str) -> Option<Box<dyn Opponent>> {
    match name.to_lowercase().as_str() {
        "defender" | "def" => Some(Box::new(DefenderEngine::new())),
        "random" | "rand" => Some(Box::new(RandomEngine::new())),
        _ => None,
    }
}
