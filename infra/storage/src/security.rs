use crate::error::StorageError;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

fn violation(path: &Path, reason: &'static str) -> StorageError {
    StorageError::PathTraversalAttempt {
        message: path.display().to_string().into(),
        context: Some(Cow::Borrowed(reason)),
    }
}

/// Collapses `.` and `..` lexically; `..` may never climb above the root.
fn normalize_relative(path: &Path) -> Result<PathBuf, StorageError> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(segment) => out.push(segment),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(violation(path, "'..' escapes the sandbox"));
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(violation(path, "absolute paths are not allowed"));
            },
        }
    }
    if out.as_os_str().is_empty() {
        return Err(violation(path, "path names no file"));
    }
    Ok(out)
}

/// Joins `path` onto `root`, refusing anything that resolves outside of it.
///
/// Existing targets are canonicalized; for new targets the nearest existing
/// ancestor is canonicalized instead, which catches symlinked directories.
pub(crate) fn resolve_path(root: &Path, path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
    let path = path.as_ref();
    let joined = root.join(normalize_relative(path)?);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(_) => Err(violation(path, "resolves outside the sandbox")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => check_ancestors(root, joined),
        Err(e) => Err(StorageError::Io { source: e, context: Some("resolving path".into()) }),
    }
}

fn check_ancestors(root: &Path, joined: PathBuf) -> Result<PathBuf, StorageError> {
    for ancestor in joined.ancestors().skip(1) {
        if ancestor == root {
            return Ok(joined);
        }
        if ancestor.exists() {
            return match ancestor.canonicalize() {
                Ok(canonical) if canonical.starts_with(root) => Ok(joined),
                Ok(_) => Err(violation(ancestor, "parent directory links outside the sandbox")),
                Err(e) => Err(StorageError::Io {
                    source: e,
                    context: Some("verifying parent directory".into()),
                }),
            };
        }
    }
    Err(violation(&joined, "no parent directory inside the sandbox"))
}
