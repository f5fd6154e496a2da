//! JSON file helpers shared by the transaction store and preferences
//!
//! Reads distinguish "nothing stored yet" from "stored but unreadable";
//! writes replace the target file atomically.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SmartSaveError;

/// Read JSON from a file, returning a default value if file doesn't exist
///
/// A file that exists but cannot be decoded is reported as
/// [`SmartSaveError::Corrupt`], never as the default value.
pub fn read_json<T, P>(path: P) -> Result<T, SmartSaveError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(SmartSaveError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| SmartSaveError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write JSON to a file atomically
///
/// The document is serialized in full before anything touches the disk, then
/// written to `<name>.tmp` beside the target, synced and renamed over it.
/// Readers see either the old file or the new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SmartSaveError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data).map_err(|e| {
        SmartSaveError::Json(format!("Failed to serialize {}: {}", path.display(), e))
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SmartSaveError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let write_temp = || -> std::io::Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()
    };

    if let Err(e) = write_temp().and_then(|_| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(SmartSaveError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
