use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Resolve the working directory from the optional --path argument,
/// accepting either a directory or a path to a file inside it (pack.toml)
pub fn resolve_base_dir(path: Option<&Path>) -> Result<PathBuf> {
    let base_dir = match path {
        Some(p) if p.is_file() => p
            .parent()
            .map(|parent| parent.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !base_dir.is_dir() {
        return Err(Error::custom(format!(
            "{} is not a directory",
            base_dir.display()
        )));
    }

    Ok(base_dir)
}
