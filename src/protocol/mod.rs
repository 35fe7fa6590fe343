//! Shell command protocol
//!
//! Handles input parsing, command dispatch, handlers and the text they produce.

pub mod commands;
pub mod dispatcher;
pub mod handlers;
pub mod manual;
pub mod parser;
pub mod responses;

pub use commands::{CommandResult, CommandStatus};
pub use dispatcher::{CommandRegistry, Dispatcher};
pub use parser::{ParsedLine, parse_line};
