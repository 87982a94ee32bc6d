// Error types for ariatui.
// Handles widget misuse, config loading, and filesystem errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Tab not owned by this group: {0}")]
    UnknownTab(String),

    #[error("Tab index {index} out of range (group has {len} tabs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
