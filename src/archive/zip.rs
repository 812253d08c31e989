use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Extract every entry of a ZIP archive into `extract_to`, returns the number of entries written
pub fn extract_zip(zip_path: &Path, extract_to: &Path) -> Result<usize> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("Failed to open zip file: {}", zip_path.display()))?;

    let mut archive = ZipArchive::new(file).with_context(|| "Failed to read zip archive")?;

    fs::create_dir_all(extract_to).with_context(|| {
        format!(
            "Failed to create extraction directory: {}",
            extract_to.display()
        )
    })?;

    let mut extracted_count = 0;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .with_context(|| format!("Failed to access zip entry {i}"))?;

        let relative = file.enclosed_name().map(Path::to_path_buf).ok_or_else(|| {
            anyhow::anyhow!("Zip entry escapes the extraction directory: {}", file.name())
        })?;
        let outpath = extract_to.join(relative);

        if file.is_dir() {
            fs::create_dir_all(&outpath)
                .with_context(|| format!("Failed to create directory: {}", outpath.display()))?;
        } else {
            if let Some(p) = outpath.parent()
                && !p.exists()
            {
                fs::create_dir_all(p).with_context(|| {
                    format!("Failed to create parent directory: {}", p.display())
                })?;
            }

            let mut outfile = fs::File::create(&outpath).with_context(|| {
                format!("Failed to create extracted file: {}", outpath.display())
            })?;

            std::io::copy(&mut file, &mut outfile)
                .with_context(|| format!("Failed to extract file: {}", outpath.display()))?;
        }

        // Directory modes are not restored: a read-only directory blocks its own children
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = file.unix_mode()
                && !file.is_dir()
            {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }

        debug!(entry = %outpath.display(), "extracted");
        extracted_count += 1;
    }

    println!("Extracted {extracted_count} files");
    Ok(extracted_count)
}
