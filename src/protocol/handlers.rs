//! Command handlers for the shell.
//!
//! One handler per command verb. Every handler takes the session and the
//! arguments that followed the command name, and either produces a
//! `CommandResult` or a `ShellError` that the dispatcher turns into one.

use log::{debug, warn};

use crate::error::{FsError, ShellError};
use crate::navigate::{self, CdOutcome};
use crate::protocol::commands::CommandResult;
use crate::protocol::{manual, responses};
use crate::session::Session;
use crate::storage::operations;

/// Signature shared by all command handlers
pub type Handler = fn(&mut Session, &[String]) -> Result<CommandResult, ShellError>;

/// Returns the argument at `index`, treating an empty token as missing.
fn operand<'a>(command: &str, args: &'a [String], index: usize) -> Result<&'a str, ShellError> {
    match args.get(index) {
        Some(arg) if !arg.is_empty() => Ok(arg.as_str()),
        _ => Err(ShellError::MissingOperand(command.to_string())),
    }
}

/// Handles `pwd`: prints the absolute path of the current directory.
pub fn handle_cmd_pwd(session: &mut Session, _args: &[String]) -> Result<CommandResult, ShellError> {
    let path = navigate::current_path(session)?;
    Ok(CommandResult::line(path))
}

/// Handles `ls`: lists the current directory, or the named child directory.
pub fn handle_cmd_ls(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let target = args.first().map(String::as_str).filter(|name| !name.is_empty());
    let entries = operations::list_directory(session, target)?;
    Ok(CommandResult::success(entries))
}

/// Handles `cd`: enters a child directory or, with `..`, the parent.
///
/// A missing or empty operand leaves the session where it is.
pub fn handle_cmd_cd(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let Some(target) = args.first() else {
        return Ok(CommandResult::silent("No target directory"));
    };

    match navigate::change_directory(session, target)? {
        CdOutcome::Moved => Ok(CommandResult::done()),
        CdOutcome::Unchanged => Ok(CommandResult::silent(format!("Stayed in place for {}", target))),
        CdOutcome::NotADirectory(name) => {
            warn!("cd into file {}", name);
            Ok(CommandResult::reported(
                format!("Not a directory: {}", name),
                responses::cd_into_file(&name),
            ))
        }
    }
}

/// Handles `mkdir`: creates an empty directory under the current one.
pub fn handle_cmd_mkdir(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("mkdir", args, 0)?;
    operations::create_directory(session, name)?;
    Ok(CommandResult::done())
}

/// Handles `touch`: creates an empty read-write file under the current directory.
pub fn handle_cmd_touch(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("touch", args, 0)?;
    operations::create_file(session, name)?;
    Ok(CommandResult::done())
}

/// Handles `cat`: prints the content of a readable file.
pub fn handle_cmd_cat(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("cat", args, 0)?;
    let content = operations::read_file(session, name)?;
    Ok(CommandResult::line(content))
}

/// Handles `write`: replaces a writeable file's content with the remaining
/// arguments joined by single spaces.
pub fn handle_cmd_write(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("write", args, 0)?;
    let content = args[1..].join(" ");
    operations::write_file(session, name, content)?;
    Ok(CommandResult::done())
}

/// Handles `rm`: removes a file, or a directory and its whole subtree.
pub fn handle_cmd_rm(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("rm", args, 0)?;
    operations::delete_entry(session, name)?;
    Ok(CommandResult::done())
}

/// Handles `mv`: renames an entry of the current directory.
pub fn handle_cmd_mv(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let old = operand("mv", args, 0)?;
    let new = operand("mv", args, 1)?;
    operations::rename_entry(session, old, new)?;
    Ok(CommandResult::done())
}

/// Handles `chmod`: applies a numbered mode to a file.
pub fn handle_cmd_chmod(session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = operand("chmod", args, 0)?;
    let mode = operand("chmod", args, 1)?;
    operations::change_mode(session, name, mode)?;
    Ok(CommandResult::done())
}

/// Handles `clear`: asks the terminal to clear itself.
pub fn handle_cmd_clear(_session: &mut Session, _args: &[String]) -> Result<CommandResult, ShellError> {
    Ok(CommandResult::clear_screen())
}

/// Handles `help`: prints the command summary.
pub fn handle_cmd_help(_session: &mut Session, _args: &[String]) -> Result<CommandResult, ShellError> {
    Ok(CommandResult::success(manual::help_lines()))
}

/// Handles `man`: prints the usage text of a command.
pub fn handle_cmd_man(_session: &mut Session, args: &[String]) -> Result<CommandResult, ShellError> {
    let name = args
        .first()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("man");

    match manual::manual_page(name) {
        Some(page) => Ok(CommandResult::success(page)),
        None => {
            debug!("No manual page for {}", name);
            Ok(CommandResult::reported(
                format!("No manual: {}", name),
                responses::no_manual(name),
            ))
        }
    }
}

/// Converts a filesystem error into a result, reported or silent.
pub fn fs_error_result(err: FsError) -> CommandResult {
    let reason = err.to_string();
    match crate::error::handlers::error_to_message(&err) {
        Some(message) => {
            warn!("{}", reason);
            CommandResult::reported(reason, message)
        }
        None => {
            debug!("Ignored: {}", reason);
            CommandResult::silent(reason)
        }
    }
}
