//! Session management
//!
//! Holds the per-run filesystem state and drives the interactive loop.

pub mod handler;
pub mod state;

pub use handler::run_shell;
pub use state::Session;
