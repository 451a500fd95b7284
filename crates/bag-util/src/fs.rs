//! Temp-file creation.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::BagResult;

/// Writes `content` to `<system temp dir>/<dir_prefix>/<file_name>` and
/// returns the path.  The prefix directory is created if missing; an
/// existing file at the target path is overwritten.
///
/// The file is not deleted on drop — callers own cleanup.
pub fn write_temp_file(content: &[u8], dir_prefix: &str, file_name: &str) -> BagResult<PathBuf> {
    write_file_under(&env::temp_dir(), dir_prefix, file_name, content)
}

pub(crate) fn write_file_under(
    base: &Path,
    dir_prefix: &str,
    file_name: &str,
    content: &[u8],
) -> BagResult<PathBuf> {
    let dir = base.join(dir_prefix);
    fs::create_dir_all(&dir)?;
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
