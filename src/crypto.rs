use crate::error::InstallError;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Compute SHA-256 hash of a file
pub fn compute_sha256(file_path: &Path) -> Result<String> {
    let mut file = fs::File::open(file_path).with_context(|| {
        format!(
            "Failed to open file for SHA verification: {}",
            file_path.display()
        )
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = file.read(&mut buffer).with_context(|| {
            format!(
                "Failed to read file for SHA verification: {}",
                file_path.display()
            )
        })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Check a downloaded asset against the digest GitHub reports for it
/// ("sha256:<hex>"). Other algorithms are rejected.
pub fn verify_digest(file_path: &Path, asset_name: &str, digest: &str) -> Result<()> {
    let expected = match digest.split_once(':') {
        Some((algorithm, hex)) if algorithm.eq_ignore_ascii_case("sha256") => hex.to_lowercase(),
        _ => {
            return Err(InstallError::UnsupportedDigest {
                asset: asset_name.to_string(),
                digest: digest.to_string(),
            }
            .into());
        }
    };

    let computed = compute_sha256(file_path)?;
    if computed != expected {
        return Err(InstallError::DigestMismatch {
            asset: asset_name.to_string(),
            expected,
            computed,
        }
        .into());
    }

    println!("✓ SHA-256 verification passed: {expected}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // sha256("hello world")
    const HELLO_SHA: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_compute_sha256() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, "hello world").unwrap();
        assert_eq!(compute_sha256(&path).unwrap(), HELLO_SHA);
    }

    #[test]
    fn test_verify_digest_accepts_matching_hash() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, "hello world").unwrap();

        verify_digest(&path, "data.bin", &format!("sha256:{HELLO_SHA}")).unwrap();
        verify_digest(&path, "data.bin", &format!("SHA256:{}", HELLO_SHA.to_uppercase()))
            .unwrap();
    }

    #[test]
    fn test_verify_digest_rejects_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, "tampered").unwrap();

        let err = verify_digest(&path, "data.bin", &format!("sha256:{HELLO_SHA}")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InstallError>(),
            Some(InstallError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_digest_rejects_unknown_algorithm() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, "hello world").unwrap();

        let err = verify_digest(&path, "data.bin", "md5:5eb63bbbe01eeed093cb22bb8f5acdc3")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InstallError>(),
            Some(InstallError::UnsupportedDigest { .. })
        ));
    }
}
