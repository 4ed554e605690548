//! Writing rendered stubs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// Write `contents` to `dir/filename`, creating `dir` if needed.
pub fn write_stub(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    fs::write(&path, contents).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = contents.len(), "Wrote stub file");
    Ok(path)
}
