//! Error types
//!
//! Defines domain-specific error types for the tree model and the shell front end.

use thiserror::Error;

/// Tree and storage errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("No such entry: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Node is no longer part of the tree")]
    NodeMissing,

    #[error("Permission denied: cannot {} {name}", .action.verb())]
    PermissionDenied { name: String, action: Access },

    #[error("Invalid mode: {0}")]
    InvalidMode(String),
}

/// Kind of file access that was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    pub fn verb(self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::Write => "write",
        }
    }
}

/// Errors raised while turning input into a handler invocation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}: missing operand")]
    MissingOperand(String),

    #[error("Command too long")]
    CommandTooLong,

    #[error(transparent)]
    Fs(#[from] FsError),
}
