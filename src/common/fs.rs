use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Sibling temp path used while rewriting `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let run_id = &Uuid::new_v4().to_string()[..8];
    path.with_file_name(format!(".{}.{}.tmp", name, run_id))
}

/// Replace the contents of `path` by writing a temp file next to it and renaming it over
/// the target. A crash mid-write leaves the previous file intact.
///
/// Symlinks are followed, so the link stays a link and the file it points at is
/// replaced. The previous file's permissions carry over; ownership does not.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let temp = temp_path_for(&target);

    fs::write(&temp, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp.display()))?;

    if let Ok(metadata) = fs::metadata(&target) {
        if let Err(e) = fs::set_permissions(&temp, metadata.permissions()) {
            let _ = fs::remove_file(&temp);
            return Err(e)
                .with_context(|| format!("Failed to copy permissions of: {}", target.display()));
        }
    }

    if let Err(e) = fs::rename(&temp, &target) {
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("Failed to replace: {}", target.display()));
    }

    Ok(())
}
