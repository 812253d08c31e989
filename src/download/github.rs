use crate::config::InstallerConfig;
use crate::download::http;
use crate::error::InstallError;
use crate::models::{GitHubAsset, GitHubRelease};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use ureq::Agent;

/// Where releases are listed and assets are downloaded from
pub trait ReleaseSource {
    /// Fetch every release of the configured repository
    fn fetch_releases(&self) -> Result<Vec<GitHubRelease>>;

    /// Download `url` to `dest`, returns the number of bytes written
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Release source backed by the GitHub REST API
pub struct GitHubClient {
    agent: Agent,
    releases_url: String,
}

impl GitHubClient {
    pub fn new(config: &InstallerConfig) -> Self {
        Self {
            agent: http::build_agent(config),
            releases_url: config.releases_url(),
        }
    }
}

impl ReleaseSource for GitHubClient {
    fn fetch_releases(&self) -> Result<Vec<GitHubRelease>> {
        println!("Fetching release info from: {}", self.releases_url);

        let response = self
            .agent
            .get(&self.releases_url)
            .set("Accept", "application/vnd.github+json")
            .call()
            .with_context(|| format!("Failed to fetch release list from {}", self.releases_url))?;

        if response.status() != 200 {
            return Err(anyhow::anyhow!(
                "GitHub API request failed with status: {}",
                response.status()
            ));
        }

        let releases: Vec<GitHubRelease> = response
            .into_json()
            .with_context(|| "Failed to parse GitHub release JSON")?;

        debug!(count = releases.len(), "fetched releases");
        Ok(releases)
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        println!("Downloading: {url}");
        http::download_file(&self.agent, url, dest)
    }
}

/// Pick the release with the newest publication time.
///
/// Releases without a publication time (drafts) are skipped. When several
/// releases share the newest time, the first one in input order wins.
pub fn select_latest_release<'a>(
    releases: &'a [GitHubRelease],
    repo: &str,
) -> Result<&'a GitHubRelease, InstallError> {
    let mut latest: Option<&GitHubRelease> = None;

    for release in releases {
        let Some(published_at) = release.published_at else {
            debug!(tag = %release.tag_name, "skipping unpublished release");
            continue;
        };
        match latest.and_then(|current| current.published_at) {
            Some(best) if published_at <= best => {}
            _ => latest = Some(release),
        }
    }

    latest.ok_or_else(|| InstallError::NoReleases {
        repo: repo.to_string(),
    })
}

/// Find the asset whose name exactly equals `asset_name`
pub fn find_asset<'a>(
    release: &'a GitHubRelease,
    asset_name: &str,
) -> Result<&'a GitHubAsset, InstallError> {
    release
        .assets
        .iter()
        .find(|asset| asset.name == asset_name)
        .ok_or_else(|| InstallError::AssetNotFound {
            asset: asset_name.to_string(),
            tag: release.tag_name.clone(),
        })
}
