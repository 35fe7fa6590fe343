//! Module `state`
//!
//! Defines the `Session` struct: the node tree of one shell run and the
//! directory commands currently operate in.

use crate::error::FsError;
use crate::tree::{NodeId, Tree};

/// State of a shell session.
///
/// Created once at startup and dropped when the shell exits; nothing is persisted.
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    current_directory: NodeId,
}

impl Default for Session {
    fn default() -> Self {
        let tree = Tree::new();
        let current_directory = tree.root();
        Self {
            tree,
            current_directory,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Returns the directory commands resolve names against.
    pub fn current_directory(&self) -> NodeId {
        self.current_directory
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Moves the session into `dir`.
    ///
    /// `dir` must be a live directory of this session's tree.
    pub fn set_current_directory(&mut self, dir: NodeId) -> Result<(), FsError> {
        self.tree.directory(dir)?;
        self.current_directory = dir;
        Ok(())
    }
}
