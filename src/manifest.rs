// Manifest scanning — one-shot directory listings, immutable thereafter

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// List every regular file directly under `dir`, sorted lexicographically
/// by path. Used where index correspondence must be reproducible across
/// runs. No extension filter: non-images are rejected by the decoder at
/// access time, not here.
pub fn scan_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// List the raw filenames of every regular file directly under `dir`, in
/// filesystem enumeration order. The order is platform-dependent and is
/// deliberately preserved as observed.
pub fn scan_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        let err = scan_sorted(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
        let err = scan_names(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }
}
