use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("branch path does not match the tree at depth {depth}")]
    StalePath { depth: usize },

    #[error("move at depth {depth} must have is_player_move = {expected}")]
    TurnMismatch { depth: usize, expected: bool },

    #[error("an empty branch path does not address a node")]
    EmptyPath,

    #[error("depth {depth} is beyond a branch path of length {len}")]
    DepthOutOfRange { depth: usize, len: usize },

    #[error("no alternative {index} at depth {depth}")]
    NoSuchSibling { depth: usize, index: usize },

    #[error("invalid stored lines: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
