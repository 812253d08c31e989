use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the tool's executable on this platform
pub fn tool_executable_name(prefix: &str) -> String {
    format!("{prefix}{}", std::env::consts::EXE_SUFFIX)
}

/// Check if a file is executable
pub fn is_executable(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path)?;

    if !metadata.is_file() {
        return Ok(false);
    }

    #[cfg(windows)]
    {
        Ok(path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("exe")))
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = metadata.permissions().mode();
        Ok(mode & 0o111 != 0)
    }
}

/// Find all executable files below `dir`, sorted by path
pub fn find_executables(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut executables = Vec::new();

    fn visit_dir(dir: &Path, executables: &mut Vec<PathBuf>) -> Result<()> {
        for entry in
            fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?
        {
            let path = entry?.path();

            if path.is_dir() {
                visit_dir(&path, executables)?;
            } else if is_executable(&path)? {
                executables.push(path);
            }
        }
        Ok(())
    }

    visit_dir(dir, &mut executables)?;
    executables.sort();
    Ok(executables)
}
