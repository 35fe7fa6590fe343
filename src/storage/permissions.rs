//! File permissions
//!
//! Maps a file's mode to the readable/writeable flags that gate `cat` and `write`.

use crate::error::FsError;
use std::str::FromStr;

/// Permission mode of a file, numbered the way `chmod` expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    None = 0,
    ReadOnly = 1,
    WriteOnly = 2,
    #[default]
    ReadWrite = 3,
}

impl Mode {
    /// Returns the (readable, writeable) pair for this mode.
    ///
    /// `ReadWrite` grants both; the shell this replaces handed out read-only
    /// access here, which left no way to make a file writable again.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Mode::None => (false, false),
            Mode::ReadOnly => (true, false),
            Mode::WriteOnly => (false, true),
            Mode::ReadWrite => (true, true),
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Mode::None),
            1 => Some(Mode::ReadOnly),
            2 => Some(Mode::WriteOnly),
            3 => Some(Mode::ReadWrite),
            _ => None,
        }
    }
}

impl FromStr for Mode {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .ok()
            .and_then(Mode::from_ordinal)
            .ok_or_else(|| FsError::InvalidMode(s.to_string()))
    }
}

/// Read/write flags carried by every file.
///
/// The flags are only ever produced from a `Mode`, so they cannot drift apart from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writeable: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self::from_mode(Mode::default())
    }
}

impl Permissions {
    pub fn from_mode(mode: Mode) -> Self {
        let (readable, writeable) = mode.flags();
        Self {
            readable,
            writeable,
        }
    }

    /// Check if file is readable
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Check if file is writable
    pub fn is_writeable(&self) -> bool {
        self.writeable
    }

    pub fn set_mode(&mut self, mode: Mode) {
        *self = Self::from_mode(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        assert_eq!(Mode::None.flags(), (false, false));
        assert_eq!(Mode::ReadOnly.flags(), (true, false));
        assert_eq!(Mode::WriteOnly.flags(), (false, true));
        assert_eq!(Mode::ReadWrite.flags(), (true, true));
    }

    #[test]
    fn test_default_is_read_write() {
        let perms = Permissions::default();
        assert!(perms.is_readable());
        assert!(perms.is_writeable());
        assert_eq!(perms, Permissions::from_mode(Mode::ReadWrite));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("0".parse::<Mode>(), Ok(Mode::None));
        assert_eq!("3".parse::<Mode>(), Ok(Mode::ReadWrite));
        assert_eq!(
            "rw".parse::<Mode>(),
            Err(FsError::InvalidMode("rw".to_string()))
        );
        assert_eq!(
            "4".parse::<Mode>(),
            Err(FsError::InvalidMode("4".to_string()))
        );
        assert_eq!(
            "-1".parse::<Mode>(),
            Err(FsError::InvalidMode("-1".to_string()))
        );
    }

    #[test]
    fn test_read_write_restores_both_flags() {
        let mut perms = Permissions::default();
        perms.set_mode(Mode::None);
        assert!(!perms.is_readable() && !perms.is_writeable());
        perms.set_mode(Mode::ReadWrite);
        assert!(perms.is_readable() && perms.is_writeable());
    }
}
