//! Artifact writing functionality
//!
//! Every report artifact is written to a temporary file in the destination
//! directory and renamed into place, so a failed write never leaves a
//! partial artifact behind.

use crate::error::{Result, ScanError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary sibling path used during an atomic write
fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Write an artifact atomically: full content to a temp file, flush, rename.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    let tmp = temp_path(path);

    let write_result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    })();

    if let Err(source) = write_result {
        let _ = fs::remove_file(&tmp);
        return Err(ScanError::output_write_error(path, source));
    }

    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        ScanError::output_write_error(path, source)
    })
}
