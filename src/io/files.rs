//! Thin wrappers over `std::fs` that attach the offending path to errors.

use crate::error::{GenError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| GenError::unwritable(path, e))
}

/// Create or truncate `path` with `contents`.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, contents).map_err(|e| GenError::unwritable(path, e))
}

/// Like [`write_file`], then mark the file executable.
pub fn write_script(path: &Path, contents: &str) -> Result<()> {
    write_file(path, contents)?;
    make_executable(path)
}

/// Append to an existing file.
pub fn append_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| GenError::unwritable(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| GenError::unwritable(path, e))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| GenError::unwritable(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
