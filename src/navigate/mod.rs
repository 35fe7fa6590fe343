//! Navigate module
//!
//! Handles directory navigation: changing the current directory and
//! rebuilding its absolute path.

mod operations;

pub use operations::{CdOutcome, PARENT_DIRECTORY, change_directory, current_path, path_of};
