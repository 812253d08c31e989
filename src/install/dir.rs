use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Give the install directory a clean slate: whatever exists at `path` is
/// removed, then the directory is created along with any missing parents.
pub fn reset_install_dir(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            debug!(path = %path.display(), "removing previous install");
            fs::remove_dir_all(path).with_context(|| {
                format!("Failed to remove existing directory: {}", path.display())
            })?;
        }
        Ok(_) => {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove existing file: {}", path.display()))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect: {}", path.display()));
        }
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create install directory: {}", path.display()))?;
    Ok(())
}
