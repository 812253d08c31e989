use std::path::{Path, PathBuf};
use std::time::Duration;

/// GitHub repository publishing the tool
pub const REPO: &str = "ucsd-e4e/git-lfs-synology";
/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";
/// Directory created under the user's home directory
pub const INSTALL_DIR_NAME: &str = ".git-lfs-synology";
/// Leading part of every release asset name
pub const ASSET_PREFIX: &str = "git-lfs-synology";

/// Fixed settings for one installer run
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    pub repo: String,
    pub api_base: String,
    pub install_dir_name: String,
    pub asset_prefix: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub user_agent: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            repo: REPO.to_string(),
            api_base: GITHUB_API_BASE.to_string(),
            install_dir_name: INSTALL_DIR_NAME.to_string(),
            asset_prefix: ASSET_PREFIX.to_string(),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(300),
            user_agent: format!(
                "git-lfs-synology-installer/{}",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl InstallerConfig {
    /// Endpoint listing every release of the repository
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/releases",
            self.api_base.trim_end_matches('/'),
            self.repo
        )
    }

    /// Install directory for the given home directory
    pub fn install_dir(&self, home: &Path) -> PathBuf {
        home.join(&self.install_dir_name)
    }
}
