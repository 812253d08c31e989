use crate::archive::zip::extract_zip;
use crate::config::InstallerConfig;
use crate::crypto::verify_digest;
use crate::download::github::{ReleaseSource, find_asset, select_latest_release};
use crate::install::dir::reset_install_dir;
use crate::install::executable::{find_executables, tool_executable_name};
use crate::install::path::{PATH_SEPARATOR, updated_path};
use crate::target::TargetSpec;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Outcome of a successful installation
#[derive(Debug)]
pub struct InstallReport {
    pub release_tag: String,
    pub asset_name: String,
    pub install_dir: PathBuf,
    pub archive_path: PathBuf,
    pub executables: Vec<PathBuf>,
    /// New PATH value, `None` when the install directory was already on PATH
    pub updated_path: Option<String>,
}

/// Installs the newest release for one target into `<home>/<install dir name>`
pub struct Installer<S: ReleaseSource> {
    source: S,
    config: InstallerConfig,
    target: TargetSpec,
    home: PathBuf,
}

impl<S: ReleaseSource> Installer<S> {
    pub fn new(source: S, config: InstallerConfig, target: TargetSpec, home: PathBuf) -> Self {
        Self {
            source,
            config,
            target,
            home,
        }
    }

    pub fn install_dir(&self) -> PathBuf {
        self.config.install_dir(&self.home)
    }

    /// Run the whole installation. `current_path` is the PATH value to extend;
    /// the caller decides whether to apply the returned value.
    ///
    /// Release and asset lookup happen before anything on disk is touched, so
    /// a lookup failure leaves any previous install in place.
    pub fn run(&self, current_path: &str) -> Result<InstallReport> {
        let releases = self.source.fetch_releases()?;
        let release = select_latest_release(&releases, &self.config.repo)?;
        println!(
            "Found release: {} ({})",
            release.display_name(),
            release.tag_name
        );

        let asset_name = self.target.asset_name(&self.config.asset_prefix);
        debug!(host = %self.target, asset = %asset_name, "resolved target");
        let asset = find_asset(release, &asset_name)?;
        println!("Found asset: {} ({} bytes)", asset.name, asset.size);

        let install_dir = self.install_dir();
        reset_install_dir(&install_dir)?;

        let archive_path = install_dir.join(&asset.name);
        self.source.download(&asset.browser_download_url, &archive_path)?;
        if let Some(digest) = &asset.digest {
            verify_digest(&archive_path, &asset.name, digest)?;
        }

        println!("Extracting to: {}", install_dir.display());
        extract_zip(&archive_path, &install_dir)?;

        let executables = find_executables(&install_dir)?;
        let expected = tool_executable_name(&self.config.asset_prefix);
        if !executables.iter().any(|exe| exe.ends_with(&expected)) {
            warn!(
                "{} not found as an executable in {}",
                expected,
                install_dir.display()
            );
        }

        let updated_path = updated_path(current_path, &install_dir, PATH_SEPARATOR)?;

        Ok(InstallReport {
            release_tag: release.tag_name.clone(),
            asset_name: asset.name.clone(),
            install_dir,
            archive_path,
            executables,
            updated_path,
        })
    }
}
