//! Arena owning every node of a session.

use std::collections::HashMap;

use log::debug;

use super::node::{Directory, File, Node, NodeId, NodeKind};
use crate::error::FsError;

/// Name the root directory is created with
pub const ROOT_NAME: &str = "/";

/// The node tree.
///
/// Nodes are only ever created fresh under an existing directory, so no
/// directory can become its own descendant.
#[derive(Debug)]
pub struct Tree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                name: ROOT_NAME.to_string(),
                parent: None,
                kind: NodeKind::Directory(Directory::default()),
            },
        );

        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, FsError> {
        self.nodes.get(&id).ok_or(FsError::NodeMissing)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, FsError> {
        Ok(self.get(id)?.parent)
    }

    pub fn directory(&self, id: NodeId) -> Result<&Directory, FsError> {
        let node = self.get(id)?;
        node.as_directory()
            .ok_or_else(|| FsError::NotADirectory(node.name.clone()))
    }

    fn directory_mut(&mut self, id: NodeId) -> Result<&mut Directory, FsError> {
        let node = self.nodes.get_mut(&id).ok_or(FsError::NodeMissing)?;
        match &mut node.kind {
            NodeKind::Directory(dir) => Ok(dir),
            NodeKind::File(_) => Err(FsError::NotADirectory(node.name.clone())),
        }
    }

    pub fn file(&self, id: NodeId) -> Result<&File, FsError> {
        let node = self.get(id)?;
        node.as_file().ok_or_else(|| FsError::NotAFile(node.name.clone()))
    }

    pub fn file_mut(&mut self, id: NodeId) -> Result<&mut File, FsError> {
        let node = self.nodes.get_mut(&id).ok_or(FsError::NodeMissing)?;
        match &mut node.kind {
            NodeKind::File(file) => Ok(file),
            NodeKind::Directory(_) => Err(FsError::NotAFile(node.name.clone())),
        }
    }

    /// Exact, case-sensitive lookup of `name` among the children of `dir`.
    pub fn lookup(&self, dir: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.directory(dir)?
            .child(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))
    }

    /// Child names of `dir` in listing order
    pub fn child_names(&self, dir: NodeId) -> Result<Vec<String>, FsError> {
        Ok(self.directory(dir)?.names().map(str::to_string).collect())
    }

    pub fn create_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.attach(parent, name, NodeKind::Directory(Directory::default()))
    }

    pub fn create_file(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.attach(parent, name, NodeKind::File(File::default()))
    }

    /// Insert a fresh node under `parent`, replacing any entry of the same name.
    fn attach(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        if name.is_empty() {
            return Err(FsError::EmptyName);
        }
        // Fail before allocating if the parent is unusable
        self.directory(parent)?;

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                parent: Some(parent),
                kind,
            },
        );

        let replaced = self.directory_mut(parent)?.children.insert(name.to_string(), id);
        if let Some(old) = replaced {
            debug!("Replacing existing entry {}", name);
            self.free_subtree(old);
        }

        Ok(id)
    }

    /// Detach `name` from `dir` and drop it together with its descendants.
    pub fn remove(&mut self, dir: NodeId, name: &str) -> Result<(), FsError> {
        let id = self
            .directory_mut(dir)?
            .children
            .shift_remove(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        self.free_subtree(id);
        Ok(())
    }

    /// Give the entry `old` of `dir` the name `new`.
    ///
    /// An entry already called `new` is dropped. The renamed entry moves to the
    /// end of the listing.
    pub fn rename(&mut self, dir: NodeId, old: &str, new: &str) -> Result<(), FsError> {
        if new.is_empty() {
            return Err(FsError::EmptyName);
        }
        let id = self.lookup(dir, old)?;
        if old == new {
            return Ok(());
        }

        let children = &mut self.directory_mut(dir)?.children;
        children.shift_remove(old);
        let replaced = children.shift_remove(new);
        children.insert(new.to_string(), id);

        if let Some(node) = self.nodes.get_mut(&id) {
            node.name = new.to_string();
        }
        if let Some(old_target) = replaced {
            self.free_subtree(old_target);
        }
        Ok(())
    }

    /// Drop `id` and every node below it without recursion.
    fn free_subtree(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                if let NodeKind::Directory(dir) = node.kind {
                    pending.extend(dir.children.into_values());
                }
            }
        }
    }
}
