use thiserror::Error;

/// Failures of the installer that are not plain I/O or network errors
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("No published releases found for {repo}")]
    NoReleases { repo: String },

    #[error("Asset '{asset}' not found in release {tag}; this platform is not supported")]
    AssetNotFound { asset: String, tag: String },

    #[error("Unsupported digest '{digest}' for {asset}")]
    UnsupportedDigest { asset: String, digest: String },

    #[error("SHA-256 mismatch for {asset}: expected {expected}, computed {computed}")]
    DigestMismatch {
        asset: String,
        expected: String,
        computed: String,
    },
}
