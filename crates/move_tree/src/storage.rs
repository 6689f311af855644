//! Stored form of a tree: the start position and one move list per line.

use serde::{Deserialize, Serialize};

use crate::{error::Result, tree::MoveTree};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemLines {
    pub start: String,
    pub sequences: Vec<Vec<String>>,
}

impl ProblemLines {
    pub fn from_tree(tree: &MoveTree) -> Self {
        Self {
            start: tree.start.clone(),
            sequences: tree.to_sequences(),
        }
    }

    pub fn to_tree(&self) -> MoveTree {
        MoveTree::from_sequences(self.start.clone(), &self.sequences)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
