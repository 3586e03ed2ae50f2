use crate::error::{Result, StoreError};
use crate::file;
use crate::paths;
use addrbook_core::BookData;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the contacts file at `source` to `dest`, refusing any path that
/// resolves to `source`. `data` is written instead when nothing has been
/// saved at `source` yet.
pub fn backup_to(source: &Path, data: &BookData, dest: &Path) -> Result<()> {
    paths::ensure_parent_dir(dest)?;
    let target = canonicalize_path(dest)?;
    let main_target = canonicalize_path(source)?;
    if main_target == target || is_same_file_identity(&target, &main_target)? {
        return Err(StoreError::InvalidBackupPath(dest.to_path_buf()));
    }
    if !main_target.exists() {
        return file::write_book(&target, data);
    }
    fs::copy(&main_target, &target)?;
    file::restrict_file_permissions(&target)
}

fn canonicalize_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(parent.join(file_name))
}

#[cfg(unix)]
fn is_same_file_identity(target: &Path, main: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !main.exists() {
        return Ok(false);
    }
    let target_meta = fs::metadata(target)?;
    let main_meta = fs::metadata(main)?;
    Ok(target_meta.dev() == main_meta.dev() && target_meta.ino() == main_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file_identity(_target: &Path, _main: &Path) -> Result<bool> {
    Ok(false)
}
