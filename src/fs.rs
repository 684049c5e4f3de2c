//! Filesystem helpers.

use eyre::{Result, WrapErr};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

// Linux only is not that restrictive, but Windows is another story...
// See https://docs.microsoft.com/en-us/windows/win32/fileio/naming-a-file
static ILLEGAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\?<>\\:\*\|"]"#).expect("invalid chars regex"));
static ILLEGAL_TRAILING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\. ]+$"#).expect("invalid trailing regex"));

/// Clean a name to safely use it as file or directory name.
pub fn sanitize_name(name: &str) -> PathBuf {
    let name = ILLEGAL_TRAILING.replace(name, "");

    ILLEGAL_CHARS.replace_all(&name, "_").into_owned().into()
}

/// Returns the local filename of the `index`th image of a gallery.
///
/// The remote filename is kept (behind the zero-padded position, to
/// preserve the gallery order), query string excluded.
pub fn image_filename(index: usize, url: &str) -> PathBuf {
    let basename = url
        .split(&['?', '#'][..])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .map(sanitize_name)
        .filter(|name| !name.as_os_str().is_empty());

    match basename {
        Some(name) => format!("{:03}_{}", index, name.display()).into(),
        None => format!("{:03}.jpg", index).into(),
    }
}

/// Recursively create a directory and all of its parent if necessary.
pub fn mkdir_p(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("mkdir_p {}", path.display()))
}

/// Write a file atomically (using a tempfile + atomic rename).
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".part");
    let tmp_path = PathBuf::from(tmp_path);

    fs::write(&tmp_path, data)
        .with_context(|| format!("write {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("rename to {}", path.display()))?;

    Ok(())
}
