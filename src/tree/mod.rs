//! In-memory node tree
//!
//! Holds every directory and file of a session in a single arena. Directories own
//! their children by id; children point back at their parent by id only.

mod arena;
mod node;

pub use arena::Tree;
pub use node::{Directory, File, Node, NodeId, NodeKind};
