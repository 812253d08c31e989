use anyhow::{Context, Result};
use std::path::Path;

/// Separator between PATH entries on this platform
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

fn normalize_entry(entry: &str) -> &str {
    let trimmed = entry.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() { entry } else { trimmed }
}

/// Check whether `dir` is one of the entries of `path_value`.
/// Entries are compared whole, ignoring trailing path separators. With the
/// Windows separator the comparison is case-insensitive.
pub fn path_contains(path_value: &str, dir: &str, separator: char) -> bool {
    let dir = normalize_entry(dir);
    let case_insensitive = separator == ';';
    path_value.split(separator).any(|entry| {
        if entry.is_empty() {
            return false;
        }
        let entry = normalize_entry(entry);
        if case_insensitive {
            entry.eq_ignore_ascii_case(dir)
        } else {
            entry == dir
        }
    })
}

/// Compute the PATH value with `install_dir` prepended.
///
/// Returns `None` when the directory is already an entry of `current`, so
/// repeated runs never duplicate it.
pub fn updated_path(current: &str, install_dir: &Path, separator: char) -> Result<Option<String>> {
    let dir = install_dir.to_str().with_context(|| {
        format!(
            "Install directory is not valid UTF-8: {}",
            install_dir.display()
        )
    })?;

    if path_contains(current, dir, separator) {
        return Ok(None);
    }

    if current.is_empty() {
        Ok(Some(dir.to_string()))
    } else {
        Ok(Some(format!("{dir}{separator}{current}")))
    }
}

/// Read PATH of the current process; unset reads as empty
pub fn current_process_path() -> Result<String> {
    match std::env::var("PATH") {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(String::new()),
        Err(e) => Err(e).context("PATH contains non-Unicode data and cannot be rewritten"),
    }
}

/// Replace PATH for the current process only. Nothing is persisted.
///
/// Must be called while the process is single-threaded.
pub fn apply_process_path(value: &str) {
    // SAFETY: the installer is single-threaded; no other thread reads or
    // writes the environment concurrently.
    unsafe {
        std::env::set_var("PATH", value);
    }
}

/// Shell line a user can add to their profile to keep `install_dir` on PATH
pub fn persist_hint(install_dir: &Path) -> String {
    if cfg!(windows) {
        format!("setx PATH \"{};%PATH%\"", install_dir.display())
    } else {
        format!("export PATH=\"{}:$PATH\"", install_dir.display())
    }
}
