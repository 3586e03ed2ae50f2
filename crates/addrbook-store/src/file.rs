use crate::error::Result;
use crate::paths;
use addrbook_core::BookData;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Stored book at `path`, or `None` when the file does not exist yet.
pub fn read_book(path: &Path) -> Result<Option<BookData>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Some(BookData::new()));
    }
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Writes through a sibling temp file so a failed write keeps the old file.
pub fn write_book(path: &Path, data: &BookData) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let mut contents = serde_json::to_string_pretty(data)?;
    contents.push('\n');
    let temp = temp_path(path);
    fs::write(&temp, contents)?;
    restrict_file_permissions(&temp)?;
    fs::rename(&temp, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("contacts.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
pub(crate) fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
