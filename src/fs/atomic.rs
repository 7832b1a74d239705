//! Atomic file replacement.
//!
//! Contents are written to a temporary file next to the target and renamed
//! over it, so an interrupted write never leaves a truncated target behind.
//!
//! ## Guarantees
//!
//! - **Same filesystem**: the temporary file lives in the target's directory,
//!   so the final rename cannot cross devices
//! - **Cleanup**: on any failure the temporary file is removed when it drops
//! - **Permissions**: an existing target keeps its mode
//! - **Symlinks**: a symlinked target is resolved first, so the link stays
//!   and the file it points to is replaced

use crate::error::Result;

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the contents of `path` with `contents`.
///
/// # Errors
///
/// Returns `Err` if the temporary file cannot be created, written, synced,
/// or renamed. The target is left untouched in that case.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = resolved.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    log::debug!(
        "Writing {} via {}",
        path.display(),
        tmp.path().display()
    );

    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
