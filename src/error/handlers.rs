//! Error handlers
//!
//! Turns recoverable errors into the literal lines shown to the user.

use crate::error::types::{Access, FsError, ShellError};
use crate::protocol::responses;
use log::warn;

/// Log a reported condition
pub fn handle_error(err: &ShellError) {
    warn!("Shell error: {}", err);
}

/// Convert a filesystem error into its user-facing line.
///
/// Returns `None` for conditions the shell keeps silent about.
pub fn error_to_message(err: &FsError) -> Option<String> {
    match err {
        FsError::PermissionDenied {
            name,
            action: Access::Read,
        } => Some(responses::read_denied(name)),
        FsError::PermissionDenied {
            name,
            action: Access::Write,
        } => Some(responses::write_denied(name)),
        FsError::InvalidMode(arg) => Some(responses::invalid_mode(arg)),
        FsError::EmptyName
        | FsError::NotFound(_)
        | FsError::NotADirectory(_)
        | FsError::NotAFile(_)
        | FsError::NodeMissing => None,
    }
}

/// Convert a shell error into its user-facing line
pub fn shell_error_to_message(err: &ShellError) -> Option<String> {
    match err {
        ShellError::UnknownCommand(name) => Some(responses::unknown_command(name)),
        ShellError::MissingOperand(cmd) => Some(responses::missing_operand(cmd)),
        ShellError::CommandTooLong => Some(responses::COMMAND_TOO_LONG.to_string()),
        ShellError::Fs(e) => error_to_message(e),
    }
}
