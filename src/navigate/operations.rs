//! Navigation operations implementation

use log::debug;

use crate::error::FsError;
use crate::session::Session;
use crate::tree::{NodeId, Tree};

/// Operand that moves to the parent directory
pub const PARENT_DIRECTORY: &str = "..";

/// Separator used when rendering paths
const SEPARATOR: char = '/';

/// What a `cd` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdOutcome {
    Moved,
    /// Target missing, or `..` at the root
    Unchanged,
    /// Target exists but is a file
    NotADirectory(String),
}

/// Absolute path of the session's current directory
pub fn current_path(session: &Session) -> Result<String, FsError> {
    path_of(session.tree(), session.current_directory())
}

/// Builds the absolute path of `dir` by walking parent links up to the root.
///
/// Every directory below the root renders as `name/`, so `/a/b/` is the path
/// of `b` inside `a`. The walk is a loop to stay flat on deep trees.
pub fn path_of(tree: &Tree, dir: NodeId) -> Result<String, FsError> {
    let mut names = Vec::new();
    let mut current = tree.get(dir)?;
    while let Some(parent) = current.parent() {
        names.push(current.name());
        current = tree.get(parent)?;
    }

    let mut path = String::from(SEPARATOR);
    for name in names.iter().rev() {
        path.push_str(name);
        path.push(SEPARATOR);
    }
    Ok(path)
}

/// Changes the working directory of a session.
///
/// Only single names are understood; `..` moves up one level.
pub fn change_directory(session: &mut Session, target: &str) -> Result<CdOutcome, FsError> {
    let current = session.current_directory();

    if target == PARENT_DIRECTORY {
        return match session.tree().parent(current)? {
            Some(parent) => {
                session.set_current_directory(parent)?;
                Ok(CdOutcome::Moved)
            }
            None => Ok(CdOutcome::Unchanged),
        };
    }

    let child = match session.tree().lookup(current, target) {
        Ok(id) => id,
        Err(FsError::NotFound(_)) => {
            debug!("cd: no entry named {:?}", target);
            return Ok(CdOutcome::Unchanged);
        }
        Err(e) => return Err(e),
    };

    if !session.tree().get(child)?.is_directory() {
        return Ok(CdOutcome::NotADirectory(target.to_string()));
    }

    session.set_current_directory(child)?;
    Ok(CdOutcome::Moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_dirs(names: &[&str]) -> Session {
        let mut session = Session::new();
        let mut dir = session.tree().root();
        for name in names {
            dir = session.tree_mut().create_directory(dir, name).unwrap();
        }
        session
    }

    #[test]
    fn test_root_path() {
        let session = Session::new();
        assert_eq!(current_path(&session).unwrap(), "/");
    }

    #[test]
    fn test_nested_path() {
        let mut session = session_with_dirs(&["a", "b"]);
        change_directory(&mut session, "a").unwrap();
        assert_eq!(current_path(&session).unwrap(), "/a/");
        change_directory(&mut session, "b").unwrap();
        assert_eq!(current_path(&session).unwrap(), "/a/b/");
    }

    #[test]
    fn test_parent_at_root_is_noop() {
        let mut session = Session::new();
        assert_eq!(
            change_directory(&mut session, "..").unwrap(),
            CdOutcome::Unchanged
        );
        assert_eq!(session.current_directory(), session.tree().root());
    }

    #[test]
    fn test_parent_returns_to_same_directory() {
        let mut session = session_with_dirs(&["a", "b"]);
        change_directory(&mut session, "a").unwrap();
        let a = session.current_directory();
        change_directory(&mut session, "b").unwrap();
        assert_eq!(
            change_directory(&mut session, "..").unwrap(),
            CdOutcome::Moved
        );
        assert_eq!(session.current_directory(), a);
    }

    #[test]
    fn test_missing_target_is_silent() {
        let mut session = Session::new();
        assert_eq!(
            change_directory(&mut session, "nope").unwrap(),
            CdOutcome::Unchanged
        );
        assert_eq!(
            change_directory(&mut session, "").unwrap(),
            CdOutcome::Unchanged
        );
    }

    #[test]
    fn test_file_target_reported() {
        let mut session = Session::new();
        let root = session.tree().root();
        session.tree_mut().create_file(root, "f").unwrap();
        assert_eq!(
            change_directory(&mut session, "f").unwrap(),
            CdOutcome::NotADirectory("f".into())
        );
        assert_eq!(session.current_directory(), root);
    }

    #[test]
    fn test_multi_segment_not_traversed() {
        let mut session = session_with_dirs(&["a", "b"]);
        assert_eq!(
            change_directory(&mut session, "a/b").unwrap(),
            CdOutcome::Unchanged
        );
    }

    #[test]
    fn test_deep_path_does_not_recurse() {
        let mut session = Session::new();
        let mut dir = session.tree().root();
        for _ in 0..50_000 {
            dir = session.tree_mut().create_directory(dir, "x").unwrap();
        }
        let path = path_of(session.tree(), dir).unwrap();
        assert_eq!(path.len(), 1 + 50_000 * 2);
    }
}
