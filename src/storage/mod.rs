//! File system storage management
//!
//! Handles entry operations and file permissions on the session tree.

pub mod operations;
pub mod permissions;

pub use permissions::{Mode, Permissions};
