//! Storage operations
//!
//! Tree operations behind the shell commands: list, create, read, write,
//! delete, rename and permission changes. Every name is resolved against the
//! session's current directory.

use log::{debug, info};

use crate::error::{Access, FsError};
use crate::session::Session;
use crate::storage::permissions::Mode;
use crate::tree::NodeId;

/// Lists the current directory, or the child directory `name` when given.
pub fn list_directory(session: &Session, name: Option<&str>) -> Result<Vec<String>, FsError> {
    let tree = session.tree();
    let dir = match name {
        Some(name) => tree.lookup(session.current_directory(), name)?,
        None => session.current_directory(),
    };
    let entries = tree.child_names(dir)?;
    debug!("Listed {} entries", entries.len());
    Ok(entries)
}

/// Creates an empty directory, replacing any entry of the same name
pub fn create_directory(session: &mut Session, name: &str) -> Result<NodeId, FsError> {
    let parent = session.current_directory();
    let id = session.tree_mut().create_directory(parent, name)?;
    info!("Created directory {}", name);
    Ok(id)
}

/// Creates an empty read-write file, replacing any entry of the same name
pub fn create_file(session: &mut Session, name: &str) -> Result<NodeId, FsError> {
    let parent = session.current_directory();
    let id = session.tree_mut().create_file(parent, name)?;
    info!("Created file {}", name);
    Ok(id)
}

fn resolve(session: &Session, name: &str) -> Result<NodeId, FsError> {
    session.tree().lookup(session.current_directory(), name)
}

/// Returns the content of a readable file
pub fn read_file(session: &Session, name: &str) -> Result<String, FsError> {
    let id = resolve(session, name)?;
    let file = session.tree().file(id)?;
    if !file.permissions().is_readable() {
        return Err(FsError::PermissionDenied {
            name: name.to_string(),
            action: Access::Read,
        });
    }
    Ok(file.content().to_string())
}

/// Replaces the content of a writeable file
pub fn write_file(session: &mut Session, name: &str, content: String) -> Result<(), FsError> {
    let id = resolve(session, name)?;
    let file = session.tree_mut().file_mut(id)?;
    if !file.permissions().is_writeable() {
        return Err(FsError::PermissionDenied {
            name: name.to_string(),
            action: Access::Write,
        });
    }
    let len = content.len();
    file.set_content(content);
    info!("Wrote {} bytes to {}", len, name);
    Ok(())
}

/// Deletes a file, or a directory with everything below it
pub fn delete_entry(session: &mut Session, name: &str) -> Result<(), FsError> {
    let dir = session.current_directory();
    session.tree_mut().remove(dir, name)?;
    info!("Deleted {}", name);
    Ok(())
}

/// Renames an entry of the current directory
pub fn rename_entry(session: &mut Session, old: &str, new: &str) -> Result<(), FsError> {
    let dir = session.current_directory();
    session.tree_mut().rename(dir, old, new)?;
    info!("Renamed {} to {}", old, new);
    Ok(())
}

/// Applies the mode numbered `mode` to a file.
///
/// The mode is validated before the target is looked up.
pub fn change_mode(session: &mut Session, name: &str, mode: &str) -> Result<Mode, FsError> {
    let mode: Mode = mode.parse()?;
    let id = resolve(session, name)?;
    session.tree_mut().file_mut(id)?.set_mode(mode);
    info!("Set mode of {} to {:?}", name, mode);
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_child_directory() {
        let mut session = Session::new();
        let d = create_directory(&mut session, "d").unwrap();
        session.tree_mut().create_file(d, "inner").unwrap();
        create_file(&mut session, "f").unwrap();

        assert_eq!(list_directory(&session, None).unwrap(), vec!["d", "f"]);
        assert_eq!(
            list_directory(&session, Some("d")).unwrap(),
            vec!["inner"]
        );
        assert_eq!(
            list_directory(&session, Some("f")),
            Err(FsError::NotADirectory("f".into()))
        );
        assert_eq!(
            list_directory(&session, Some("x")),
            Err(FsError::NotFound("x".into()))
        );
    }

    #[test]
    fn test_write_then_read() {
        let mut session = Session::new();
        create_file(&mut session, "f").unwrap();
        assert_eq!(read_file(&session, "f").unwrap(), "");
        write_file(&mut session, "f", "hello there".into()).unwrap();
        assert_eq!(read_file(&session, "f").unwrap(), "hello there");
    }

    #[test]
    fn test_touch_resets_content_and_mode() {
        let mut session = Session::new();
        create_file(&mut session, "f").unwrap();
        write_file(&mut session, "f", "data".into()).unwrap();
        change_mode(&mut session, "f", "0").unwrap();

        create_file(&mut session, "f").unwrap();
        assert_eq!(read_file(&session, "f").unwrap(), "");
    }

    #[test]
    fn test_permissions_enforced() {
        let mut session = Session::new();
        create_file(&mut session, "f").unwrap();
        write_file(&mut session, "f", "secret".into()).unwrap();

        change_mode(&mut session, "f", "2").unwrap();
        assert_eq!(
            read_file(&session, "f"),
            Err(FsError::PermissionDenied {
                name: "f".into(),
                action: Access::Read
            })
        );
        write_file(&mut session, "f", "new".into()).unwrap();

        change_mode(&mut session, "f", "1").unwrap();
        assert_eq!(
            write_file(&mut session, "f", "again".into()),
            Err(FsError::PermissionDenied {
                name: "f".into(),
                action: Access::Write
            })
        );
        assert_eq!(read_file(&session, "f").unwrap(), "new");

        change_mode(&mut session, "f", "3").unwrap();
        write_file(&mut session, "f", "again".into()).unwrap();
        assert_eq!(read_file(&session, "f").unwrap(), "again");
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let mut session = Session::new();
        create_directory(&mut session, "d").unwrap();
        assert_eq!(read_file(&session, "d"), Err(FsError::NotAFile("d".into())));
        assert_eq!(
            write_file(&mut session, "d", "x".into()),
            Err(FsError::NotAFile("d".into()))
        );
    }

    #[test]
    fn test_change_mode_errors() {
        let mut session = Session::new();
        create_directory(&mut session, "d").unwrap();
        assert_eq!(
            change_mode(&mut session, "d", "abc"),
            Err(FsError::InvalidMode("abc".into()))
        );
        assert_eq!(
            change_mode(&mut session, "d", "1"),
            Err(FsError::NotAFile("d".into()))
        );
        assert_eq!(
            change_mode(&mut session, "missing", "1"),
            Err(FsError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_rename_preserves_content() {
        let mut session = Session::new();
        create_file(&mut session, "a").unwrap();
        write_file(&mut session, "a", "kept".into()).unwrap();
        rename_entry(&mut session, "a", "b").unwrap();
        assert_eq!(read_file(&session, "b").unwrap(), "kept");
        assert_eq!(read_file(&session, "a"), Err(FsError::NotFound("a".into())));
    }

    #[test]
    fn test_delete_entry() {
        let mut session = Session::new();
        create_directory(&mut session, "d").unwrap();
        delete_entry(&mut session, "d").unwrap();
        assert!(list_directory(&session, None).unwrap().is_empty());
        assert_eq!(
            delete_entry(&mut session, "d"),
            Err(FsError::NotFound("d".into()))
        );
    }
}
