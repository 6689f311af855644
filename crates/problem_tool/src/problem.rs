//! Problem files and line replay

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use move_tree::MoveTree;
use serde::{Deserialize, Serialize};
use shogi_core::{is_checkmate, play_usi, BoardState};
use tracing::{debug, warn};

/// An authored problem as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    /// Board notation of the starting position.
    pub start: String,
    /// Accepted lines of play, player move first.
    #[serde(default)]
    pub lines: Vec<Vec<String>>,
}

/// One bad move found while replaying a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    /// Index of the line in the tree's sequence order.
    pub line: usize,
    /// Zero-based ply within the line.
    pub ply: usize,
    pub token: String,
    pub reason: String,
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} ply {}: {} ({})",
            self.line + 1,
            self.ply + 1,
            self.token,
            self.reason
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Distinct lines after merging shared prefixes.
    pub lines: usize,
    /// Lines that replay cleanly and end with the side to move mated.
    pub mates: usize,
    pub issues: Vec<LineIssue>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Problem {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse problem")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize problem")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }

    pub fn start_state(&self) -> Result<BoardState> {
        BoardState::from_sfen(&self.start)
            .with_context(|| format!("Invalid start position '{}'", self.start))
    }

    pub fn tree(&self) -> MoveTree {
        MoveTree::from_sequences(self.start.clone(), &self.lines)
    }

    /// Replays every line of the problem's tree from the start position.
    ///
    /// Only an unreadable start position is an error; bad moves are collected
    /// in the report and end the replay of their line.
    pub fn check(&self) -> Result<Report> {
        let start = self.start_state()?;
        let sequences = self.tree().to_sequences();
        let mut report = Report {
            lines: sequences.len(),
            ..Report::default()
        };

        for (line, sequence) in sequences.iter().enumerate() {
            match replay(&start, sequence) {
                Ok(end) => {
                    let mated = is_checkmate(&end, end.side_to_move);
                    debug!(problem = %self.name, line, mated, "line replayed");
                    if mated {
                        report.mates += 1;
                    }
                }
                Err((ply, reason)) => {
                    let issue = LineIssue {
                        line,
                        ply,
                        token: sequence[ply].clone(),
                        reason,
                    };
                    warn!(problem = %self.name, %issue, "bad move");
                    report.issues.push(issue);
                }
            }
        }
        Ok(report)
    }
}

/// The position after `tokens`, or the failing ply and why it failed.
pub fn replay(start: &BoardState, tokens: &[String]) -> std::result::Result<BoardState, (usize, String)> {
    let mut state = start.clone();
    for (ply, token) in tokens.iter().enumerate() {
        state = play_usi(&state, token).map_err(|e| (ply, e.to_string()))?;
    }
    Ok(state)
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod problem_tests;
