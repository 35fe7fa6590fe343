//! Module `commands`
//!
//! Data structures describing the outcome of a shell command.

/// Represents the outcome status of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The command did nothing; the reason is for logs only.
    Failure(String),
    /// The terminal should be cleared.
    ClearScreen,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: CommandStatus,
    /// Lines to show the user, possibly none
    pub output: Vec<String>,
}

impl CommandResult {
    pub fn success(output: Vec<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            output,
        }
    }

    /// Successful command with nothing to print
    pub fn done() -> Self {
        Self::success(Vec::new())
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::success(vec![line.into()])
    }

    /// A failed command that stays silent
    pub fn silent(reason: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            output: Vec::new(),
        }
    }

    /// A failed command that tells the user why
    pub fn reported(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            output: vec![message.into()],
        }
    }

    pub fn clear_screen() -> Self {
        Self {
            status: CommandStatus::ClearScreen,
            output: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, CommandStatus::Success | CommandStatus::ClearScreen)
    }
}
