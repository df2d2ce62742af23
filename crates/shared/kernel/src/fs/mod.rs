//! Flat-file helpers: typed JSON reads, atomic pretty JSON writes and
//! append-only text logs.
//!
//! Writes go through a temporary sibling file that is renamed over the target,
//! so a crashed run never leaves a half-written descriptor or report behind.

mod error;

pub use error::{FsError, FsErrorExt};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const TMP_MARKER: &str = ".vgentmp";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reads `path` and deserializes it as JSON.
///
/// # Errors
/// [`FsError::NotFound`] when the file is missing, [`FsError::Decode`] when the
/// content is not valid JSON for `T`, [`FsError::Io`] for anything else.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FsError> {
    let path = path.as_ref();
    let raw = read_text(path)?;
    serde_json::from_str(&raw).context(path.display().to_string())
}

/// Reads `path` as UTF-8 text.
///
/// # Errors
/// [`FsError::NotFound`] when the file is missing, [`FsError::Io`] otherwise.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, FsError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(raw) => Ok(raw),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(FsError::NotFound {
            message: path.display().to_string().into(),
            context: None,
        }),
        Err(source) => Err(FsError::Io {
            source,
            context: Some(format!("Read failed: {}", path.display()).into()),
        }),
    }
}

/// Serializes `value` as two-space indented JSON and writes it atomically.
///
/// Parent directories are created as needed.
///
/// # Errors
/// [`FsError::Decode`] if `value` cannot be serialized, [`FsError::Io`] on disk failures.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<(), FsError> {
    let path = path.as_ref();
    let body = serde_json::to_string_pretty(value)
        .context(format!("Serializing {}", path.display()))?;
    write_text(path, &body)
}

/// Writes `contents` to `path` atomically, creating parent directories.
///
/// # Errors
/// Returns [`FsError::Io`] if the temp file cannot be written or renamed.
pub fn write_text(path: impl AsRef<Path>, contents: &str) -> Result<(), FsError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp = TempFile::write(tmp_path(path), contents)?;

    if let Err(err) = fs::rename(&temp.path, path) {
        if err.kind() != ErrorKind::AlreadyExists {
            return Err(FsError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.path.display(), path.display())
                        .into(),
                ),
            });
        }
        fs::remove_file(path)
            .context(format!("Failed to replace existing file: {}", path.display()))?;
        fs::rename(&temp.path, path).context(format!(
            "Atomic swap failed: {} -> {}",
            temp.path.display(),
            path.display()
        ))?;
    }
    temp.persist();

    debug!(path = %path.display(), "File saved atomically");
    Ok(())
}

/// Appends `line` plus a newline to `path`, creating the file if needed.
///
/// # Errors
/// Returns [`FsError::Io`] if the file cannot be opened or written.
pub fn append_line(path: impl AsRef<Path>, line: &str) -> Result<(), FsError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Open for append failed: {}", path.display()))?;
    writeln!(file, "{line}").context(format!("Append failed: {}", path.display()))?;
    Ok(())
}

/// Lists the immediate subdirectory names of `dir`, sorted.
///
/// Symlinks to directories count as directories.
///
/// # Errors
/// [`FsError::NotFound`] if `dir` does not exist, [`FsError::Io`] otherwise.
pub fn list_dirs(dir: impl AsRef<Path>) -> Result<Vec<String>, FsError> {
    list_entries(dir.as_ref(), |entry| entry.path().is_dir())
}

/// Lists the names of regular files directly inside `dir` whose name ends
/// with `suffix`, sorted.
///
/// # Errors
/// [`FsError::NotFound`] if `dir` does not exist, [`FsError::Io`] otherwise.
pub fn list_files(dir: impl AsRef<Path>, suffix: &str) -> Result<Vec<String>, FsError> {
    list_entries(dir.as_ref(), |entry| {
        entry.path().is_file() && entry.file_name().to_string_lossy().ends_with(suffix)
    })
}

fn list_entries(dir: &Path, keep: impl Fn(&DirEntry) -> bool) -> Result<Vec<String>, FsError> {
    if !dir.is_dir() {
        return Err(FsError::NotFound {
            message: dir.display().to_string().into(),
            context: Some("directory".into()),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| FsError::Io {
            source: err.into(),
            context: Some(format!("Listing {}", dir.display()).into()),
        })?;
        if keep(&entry) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

fn ensure_parent(path: &Path) -> Result<(), FsError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// Temporary sibling of a write target, removed on drop unless persisted.
struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl TempFile {
    /// Creates the temp file and writes `contents`; a failed write removes it again.
    fn write(path: PathBuf, contents: &str) -> Result<Self, FsError> {
        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&path)
            .context(format!("Temp creation failed: {}", path.display()))?;
        let temp = Self { path, persisted: false };
        file.write_all(contents.as_bytes()).context("Write failed")?;
        file.sync_all().context("Sync failed")?;
        Ok(temp)
    }

    /// The temp file has been renamed over its target.
    fn persist(mut self) {
        self.persisted = true;
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let id = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
    name.push(format!("{TMP_MARKER}.{}.{id}", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_stays_next_to_target() {
        let target = Path::new("/data/credit_adapters/us_adapter.json");
        let first = tmp_path(target);
        let second = tmp_path(target);

        assert_eq!(first.parent(), target.parent());
        assert_ne!(first, second);
        assert!(first.to_string_lossy().contains(TMP_MARKER));
        assert!(!first.to_string_lossy().ends_with("_adapter.json"));
    }

    #[test]
    fn unpersisted_temp_file_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Vault_Credit_Report.md");

        let abandoned = TempFile::write(tmp_path(&target), "partial").unwrap();
        let abandoned_path = abandoned.path.clone();
        assert!(abandoned_path.is_file());
        drop(abandoned);
        assert!(!abandoned_path.exists());

        let kept = TempFile::write(tmp_path(&target), "final").unwrap();
        let kept_path = kept.path.clone();
        kept.persist();
        assert!(kept_path.is_file());
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("vaults");
        std::fs::create_dir_all(target.join("jp")).unwrap();

        let err = write_text(&target, "not a directory").unwrap_err();
        assert!(matches!(err, FsError::Io { .. }));
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["vaults"]);
    }
}
