//! Path resolution: `~` expansion, absolutization and lexical normalization.
use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Expand a leading `~` or `~/` to the current user's home directory.
/// `~user` forms and paths without a tilde are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Drop `.` components and fold `..` into their parent without touching the
/// filesystem. A `..` that would climb above the root is discarded.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Tilde-expanded, absolute, normalized form of `path`, relative paths being
/// taken against the current directory.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path);
    let absolute = std::path::absolute(&expanded)?;
    Ok(normalize(&absolute))
}
