mod json;
mod report;
mod table;

pub use json::write_inventory_json;
pub use report::{render_report, write_report};
pub use table::{render_table, write_table, Column};

use crate::error::OutputError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` in one step.
///
/// The content goes to a temp file in the destination directory first and is
/// then renamed over the target, so readers never see a half-written file.
/// The result keeps the target's permissions, or the process default mode for
/// a new file, instead of the temp file's owner-only mode.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| OutputError::CreateDir {
        path: parent.to_path_buf(),
        source: e,
    })?;

    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        // create the target once so it carries the umask-derived mode
        Err(_) => File::create(path)
            .and_then(|f| f.metadata())
            .map_err(write_err)?
            .permissions(),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
