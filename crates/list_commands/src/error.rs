//! Error types for list commands

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Paste from Word is only available for <ul> elements, got <{0}>")]
    UnsupportedTarget(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Undo stack is empty")]
    UndoStackEmpty,

    #[error("Redo stack is empty")]
    RedoStackEmpty,
}

pub type Result<T> = std::result::Result<T, CommandError>;
