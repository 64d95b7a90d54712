//! File-system resource helpers.
use std::path::{Component, Path, PathBuf};

use crate::resources::error::ResourceError;

/// Ensure the directory `path` exists, creating it (and any ancestors) if
/// necessary. An existing directory is not an error.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), ResourceError> {
    std::fs::create_dir_all(path).map_err(|source| ResourceError::CreateDir {
        path: path.display().to_string(),
        source,
    })
}

/// Ensure the parent directory of `path` exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ResourceError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Whether any directory entry exists at `path`, without following symlinks.
///
/// A dangling symlink counts as present.
///
/// # Errors
///
/// Returns an error if the entry cannot be inspected for a reason other than
/// it not existing.
pub fn entry_exists(path: &Path) -> Result<bool, ResourceError> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ResourceError::Inspect {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Express `path` relative to the directory `base`.
///
/// Both paths are made absolute against the current directory and
/// normalised lexically (`.` dropped, `..` folded); symlinks are not
/// resolved, so neither path needs to exist.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dreport_links::resources::helpers::fs::relative_path;
///
/// let rel = relative_path(
///     Path::new("/usr/share/dreport.d/plugins.d/core"),
///     Path::new("/usr/share/dreport.d/pl_core.d"),
/// ).unwrap();
/// assert_eq!(rel, Path::new("../plugins.d/core"));
/// ```
///
/// # Errors
///
/// Returns an error if the current directory is needed but unavailable, or
/// the two paths share no common root (e.g., different Windows drives).
pub fn relative_path(path: &Path, base: &Path) -> Result<PathBuf, ResourceError> {
    let path_abs = absolute(path)?;
    let base_abs = absolute(base)?;

    let mut path_parts = path_abs.components().peekable();
    let mut base_parts = base_abs.components().peekable();
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if a != b {
            break;
        }
        path_parts.next();
        base_parts.next();
    }

    let no_relative = || ResourceError::NoRelativePath {
        path: path.display().to_string(),
        base: base.display().to_string(),
    };

    let mut rel = PathBuf::new();
    for part in base_parts {
        match part {
            Component::Normal(_) => rel.push(".."),
            _ => return Err(no_relative()),
        }
    }
    for part in path_parts {
        match part {
            Component::Normal(name) => rel.push(name),
            _ => return Err(no_relative()),
        }
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Ok(rel)
}

fn absolute(path: &Path) -> Result<PathBuf, ResourceError> {
    let abs = std::path::absolute(path).map_err(|source| ResourceError::Inspect {
        path: path.display().to_string(),
        source,
    })?;
    Ok(normalize(&abs))
}

/// Lexically fold `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
