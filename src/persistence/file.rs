//! File-backed persistence
//!
//! Documents are written to a temporary file in the target directory and
//! then renamed over the destination, so a crash never leaves a half-written
//! file behind.

use super::{PersistenceError, UserData, UserDataStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Read a JSON document
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not parse as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(value))
}

/// Atomically write a value as pretty-printed JSON
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory, temporary file, or final rename fails.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Stores user data as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable document is moved aside, e.g. `user_words.json.bak`
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl UserDataStore for JsonFileStore {
    /// Load the document, moving it aside if it does not parse
    ///
    /// A corrupt file is renamed to [`JsonFileStore::backup_path`] so the
    /// next save cannot overwrite the only copy.
    fn load(&self) -> Result<Option<UserData>, PersistenceError> {
        let data = match read_json::<UserData>(&self.path) {
            Ok(data) => data,
            Err(e @ PersistenceError::Corrupt(_)) => {
                let backup = self.backup_path();
                match fs::rename(&self.path, &backup) {
                    Ok(()) => warn!(
                        path = %self.path.display(),
                        backup = %backup.display(),
                        "user data is corrupt, moved it aside"
                    ),
                    Err(rename_error) => warn!(
                        path = %self.path.display(),
                        error = %rename_error,
                        "user data is corrupt and could not be backed up"
                    ),
                }
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        debug!(path = %self.path.display(), found = data.is_some(), "loaded user data");
        Ok(data)
    }

    fn save(&mut self, data: &UserData) -> Result<(), PersistenceError> {
        write_json_atomic(&self.path, data)?;
        debug!(
            path = %self.path.display(),
            user_words = data.user_words.len(),
            edits = data.edited_words.len(),
            deleted = data.deleted_words.len(),
            "saved user data"
        );
        Ok(())
    }
}
