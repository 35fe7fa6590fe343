//! Error handling
//!
//! Defines error types and how they are reported to the user.

pub mod handlers;
pub mod types;

pub use types::*;
