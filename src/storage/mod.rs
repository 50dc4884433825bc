use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::models::errors::StorageError;
use crate::models::events::NormalizedEvent;

const INDENT: &[u8] = b"    ";

/// Serializes the whole batch, then replaces `path` in one rename.
/// An existing file is only touched once the new contents are fully on disk.
pub fn write_events(path: &Path, events: &[NormalizedEvent]) -> Result<(), StorageError> {
    let contents = to_pretty_json(events)?;
    atomic_write(path, &contents)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StorageError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = tmp_path_for(path);
    debug!("Writing {} bytes to {}", contents.len(), tmp_path.display());

    fs::write(&tmp_path, contents).map_err(|source| StorageError::Write {
        path: tmp_path.clone(),
        source,
    })?;

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        StorageError::Rename {
            from: tmp_path.clone(),
            to: path.to_path_buf(),
            source,
        }
    })
}

fn tmp_path_for(path: &Path) -> PathBuf {
    path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|s| s.to_str()).unwrap_or("out")
    ))
}
