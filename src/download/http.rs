use crate::config::InstallerConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use ureq::Agent;

/// Build the blocking HTTP agent shared by API calls and downloads
pub fn build_agent(config: &InstallerConfig) -> Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(config.connect_timeout)
        .timeout_read(config.read_timeout)
        .user_agent(&config.user_agent)
        .build()
}

/// Sibling path the download is streamed into before being moved into place
fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension(format!(
        "{}.tmp",
        path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("download")
    ))
}

/// Download file via HTTP/HTTPS, returns the number of bytes written
pub fn download_file(agent: &Agent, url: &str, path: &Path) -> Result<u64> {
    debug!(url, path = %path.display(), "starting download");

    let response = agent
        .get(url)
        .call()
        .with_context(|| format!("Failed to download: {url}"))?;

    if response.status() != 200 {
        return Err(anyhow::anyhow!(
            "Download failed with status: {}",
            response.status()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = temp_path_for(path);
    write_stream(&mut response.into_reader(), &temp_path, path)
}

/// Stream `reader` into `temp_path`, then rename it to `path`
pub(crate) fn write_stream(
    reader: &mut dyn std::io::Read,
    temp_path: &Path,
    path: &Path,
) -> Result<u64> {
    let mut temp_file = fs::File::create(temp_path)
        .with_context(|| format!("Failed to create temporary file: {}", temp_path.display()))?;

    std::io::copy(reader, &mut temp_file).with_context(|| {
        let _ = fs::remove_file(temp_path);
        format!("Failed to write to temporary file: {}", temp_path.display())
    })?;

    temp_file.sync_all().with_context(|| {
        let _ = fs::remove_file(temp_path);
        format!("Failed to sync temporary file: {}", temp_path.display())
    })?;

    let file_size = temp_file.metadata()?.len();
    drop(temp_file);

    fs::rename(temp_path, path).with_context(|| {
        let _ = fs::remove_file(temp_path);
        format!(
            "Failed to move temporary file to final location: {} -> {}",
            temp_path.display(),
            path.display()
        )
    })?;

    println!("Downloaded: {} ({} bytes)", path.display(), file_size);
    Ok(file_size)
}
