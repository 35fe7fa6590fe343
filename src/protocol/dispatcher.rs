//! Command dispatch
//!
//! Maps command names to handlers through a registry handed to the
//! dispatcher at construction.

use std::collections::HashMap;

use log::{debug, info};

use crate::error::ShellError;
use crate::error::handlers::{handle_error, shell_error_to_message};
use crate::protocol::commands::CommandResult;
use crate::protocol::handlers::{self, Handler, fs_error_result};
use crate::protocol::parser::parse_line;
use crate::session::Session;

/// Table of command names and their handlers.
///
/// Names are matched exactly; `LS` is not `ls`.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in command
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register("pwd", handlers::handle_cmd_pwd)
            .register("ls", handlers::handle_cmd_ls)
            .register("cd", handlers::handle_cmd_cd)
            .register("mkdir", handlers::handle_cmd_mkdir)
            .register("touch", handlers::handle_cmd_touch)
            .register("cat", handlers::handle_cmd_cat)
            .register("write", handlers::handle_cmd_write)
            .register("rm", handlers::handle_cmd_rm)
            .register("mv", handlers::handle_cmd_mv)
            .register("chmod", handlers::handle_cmd_chmod)
            .register("clear", handlers::handle_cmd_clear)
            .register("help", handlers::handle_cmd_help)
            .register("man", handlers::handle_cmd_man);
        registry
    }

    /// Adds or replaces the handler for `name`.
    pub fn register(&mut self, name: &str, handler: Handler) -> &mut Self {
        self.handlers.insert(name.to_string(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Runs commands against a session.
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(CommandRegistry::standard())
    }
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatches a command to its handler.
    ///
    /// Never fails: unknown names and handler errors come back as a
    /// `CommandResult` carrying the message to show, if any.
    pub fn dispatch(&self, session: &mut Session, name: &str, args: &[String]) -> CommandResult {
        debug!("Dispatching {:?} {:?}", name, args);

        let outcome = match self.registry.get(name) {
            Some(handler) => handler(session, args),
            None => Err(ShellError::UnknownCommand(name.to_string())),
        };

        match outcome {
            Ok(result) => {
                info!("{} -> {:?}", name, result.status);
                result
            }
            Err(ShellError::Fs(err)) => fs_error_result(err),
            Err(err) => error_result(&err),
        }
    }

    /// Tokenizes and dispatches a raw input line. Blank lines yield `None`.
    pub fn dispatch_line(&self, session: &mut Session, line: &str) -> Option<CommandResult> {
        let parsed = parse_line(line)?;
        Some(self.dispatch(session, &parsed.name, &parsed.args))
    }
}

/// Converts a shell error into a reported result
pub fn error_result(err: &ShellError) -> CommandResult {
    handle_error(err);
    match shell_error_to_message(err) {
        Some(message) => CommandResult::reported(err.to_string(), message),
        None => CommandResult::silent(err.to_string()),
    }
}
