//! Node types stored in the tree arena.

use crate::storage::permissions::{Mode, Permissions};
use indexmap::IndexMap;

/// Handle to a node inside a [`Tree`](super::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u64);

/// A directory: named children in insertion order.
#[derive(Debug, Default)]
pub struct Directory {
    pub(super) children: IndexMap<String, NodeId>,
}

impl Directory {
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

/// A file: text content guarded by its permissions.
#[derive(Debug, Default)]
pub struct File {
    content: String,
    permissions: Permissions,
}

impl File {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.permissions.set_mode(mode);
    }
}

#[derive(Debug)]
pub enum NodeKind {
    Directory(Directory),
    File(File),
}

/// Any entry of the tree.
///
/// `name` always equals the key the parent directory stores this node under;
/// only [`Tree::rename`](super::Tree::rename) changes it.
#[derive(Debug)]
pub struct Node {
    pub(super) name: String,
    pub(super) parent: Option<NodeId>,
    pub(super) kind: NodeKind,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match &self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match &mut self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }
}
