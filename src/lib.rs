//! nanofs - an in-memory filesystem driven by a Unix-like command shell.
//!
//! The tree lives for one session only; nothing is written to disk.

pub mod config;
pub mod error;
pub mod navigate;
pub mod protocol;
pub mod session;
pub mod storage;
pub mod tree;

pub use config::ShellConfig;
pub use protocol::{CommandRegistry, CommandResult, CommandStatus, Dispatcher};
pub use session::Session;
