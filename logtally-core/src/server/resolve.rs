use std::path::{Component, Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    BadPath,
}

/// Map a requested file name onto a regular file inside `log_root`.
pub fn resolve_log_path(log_root: &Path, requested: &str) -> Result<PathBuf, ResolveError> {
    let requested = requested.trim_start_matches('/');
    if requested.is_empty() || requested.contains('\0') {
        return Err(ResolveError::BadPath);
    }

    let relative_path = PathBuf::from(requested);

    // No traversal, no absolute paths
    for component in relative_path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return Err(ResolveError::Forbidden),
        }
    }

    let base_canon = log_root
        .canonicalize()
        .map_err(|_| ResolveError::Forbidden)?;

    let target_canon = match log_root.join(&relative_path).canonicalize() {
        Ok(p) => p,
        Err(_) => return Err(ResolveError::NotFound),
    };

    // Symlinks may still point outside the root
    if !target_canon.starts_with(&base_canon) {
        return Err(ResolveError::Forbidden);
    }

    if !target_canon.is_file() {
        return Err(ResolveError::NotFound);
    }

    Ok(target_canon)
}
