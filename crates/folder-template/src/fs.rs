//! Directory creation capabilities
//!
//! The template never touches the filesystem directly. Materialization goes
//! through a [`DirectoryCreator`], and project creation additionally needs the
//! existence check and recursive delete of [`ProjectFs`]. Tests substitute
//! recording or failing implementations.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Creates directories on demand
pub trait DirectoryCreator {
    /// Create `path` and any missing parents
    ///
    /// Must succeed if `path` already exists as a directory.
    fn ensure(&self, path: &Path) -> io::Result<()>;
}

/// Filesystem operations needed to (re)create a project folder
pub trait ProjectFs: DirectoryCreator {
    /// Returns true if `path` is an existing directory
    ///
    /// A regular file at `path` does not count.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Delete the directory `path` and everything below it
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`ProjectFs`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryCreator;

impl DirectoryCreator for FsDirectoryCreator {
    fn ensure(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

impl ProjectFs for FsDirectoryCreator {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        debug!("Removing {}", path.display());
        fs::remove_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b");

        FsDirectoryCreator.ensure(&path).unwrap();
        FsDirectoryCreator.ensure(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("soubor");
        fs::write(&blocker, "obsah").unwrap();

        assert!(FsDirectoryCreator.ensure(&blocker.join("dir")).is_err());
    }

    #[test]
    fn test_remove_dir_all() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("projekt");
        fs::create_dir_all(dir.join("Dokumentace")).unwrap();
        fs::write(dir.join("Dokumentace/zprava.txt"), "text").unwrap();

        assert!(FsDirectoryCreator.dir_exists(&dir));
        FsDirectoryCreator.remove_dir_all(&dir).unwrap();
        assert!(!FsDirectoryCreator.dir_exists(&dir));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Projekt");
        fs::write(&file, "obsah").unwrap();

        assert!(!FsDirectoryCreator.dir_exists(&file));
        assert!(FsDirectoryCreator.remove_dir_all(&file).is_err());
        assert!(file.is_file());
    }
}
