//! Working directory for per-frame SVG files.
//!
//! A `WorkDir` is either a directory chosen by the user, which is created when
//! missing and never removed, or a temporary directory owned by the run. The
//! temporary variant is deleted recursively when the guard is dropped, so it
//! disappears on success, on early `?` returns and while unwinding.
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::WorkDirKind;

const TEMP_PREFIX: &str = "testvid-frames-";

#[derive(Debug)]
pub enum WorkDir {
    User(PathBuf),
    Temporary(TempDir),
}

impl WorkDir {
    /// Use `path` as the working directory, creating it (and its parents) if absent.
    pub fn user(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            debug!("Working directory {:?} does not exist, creating it", path);
            fs::create_dir_all(&path)?;
        }
        Ok(WorkDir::User(path))
    }

    /// Allocate a fresh directory under the system temp location.
    pub fn temporary() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
        debug!("Allocated temporary working directory {:?}", dir.path());
        Ok(WorkDir::Temporary(dir))
    }

    pub fn path(&self) -> &Path {
        match self {
            WorkDir::User(path) => path,
            WorkDir::Temporary(dir) => dir.path(),
        }
    }

    pub fn kind(&self) -> WorkDirKind {
        match self {
            WorkDir::User(_) => WorkDirKind::User,
            WorkDir::Temporary(_) => WorkDirKind::Temporary,
        }
    }

    /// Release the directory, reporting removal errors for the temporary
    /// variant instead of swallowing them as `Drop` would.
    pub fn close(self) -> Result<()> {
        match self {
            WorkDir::User(_) => Ok(()),
            WorkDir::Temporary(dir) => {
                let path = dir.path().to_path_buf();
                dir.close().map_err(|e| {
                    warn!("Failed to remove temporary working directory {:?}: {}", path, e);
                    e
                })?;
                debug!("Removed temporary working directory {:?}", path);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_dir_is_created_and_kept() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("nested/frames");
        let wd = WorkDir::user(&path).unwrap();
        assert!(path.is_dir());
        assert_eq!(wd.kind(), WorkDirKind::User);
        fs::write(path.join("000001.svg"), "<svg/>").unwrap();
        wd.close().unwrap();
        assert!(path.join("000001.svg").is_file());
    }

    #[test]
    fn temporary_dir_is_removed_on_drop() {
        let wd = WorkDir::temporary().unwrap();
        let path = wd.path().to_path_buf();
        fs::write(path.join("000001.svg"), "<svg/>").unwrap();
        assert!(path.is_dir());
        drop(wd);
        assert!(!path.exists());
    }

    #[test]
    fn temporary_dir_is_removed_on_close() {
        let wd = WorkDir::temporary().unwrap();
        let path = wd.path().to_path_buf();
        assert_eq!(wd.kind(), WorkDirKind::Temporary);
        wd.close().unwrap();
        assert!(!path.exists());
    }
}
