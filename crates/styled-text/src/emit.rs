//! Writes finished documents to disk.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Writes `document` to `target`, appending the `.svg` suffix if it is
/// not already present and creating missing parent directories. The
/// write is a single call; there is no atomic-rename guarantee.
pub fn write_svg(document: &str, target: &str) -> Result<PathBuf, Error> {
    let stem = target.strip_suffix(".svg").unwrap_or(target);
    let path = PathBuf::from(format!("{stem}.svg"));

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    log::info!("writing {}", path.display());
    fs::write(&path, document)?;
    Ok(path)
}
