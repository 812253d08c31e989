use crate::config::InstallerConfig;
use crate::download::github::GitHubClient;
use crate::install::installer::{InstallReport, Installer};
use crate::install::path::{apply_process_path, current_process_path, persist_hint};
use crate::models::Args;
use crate::target::TargetSpec;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Main CLI entry point
pub fn run() -> Result<()> {
    let _args = Args::parse();
    init_logging();

    let config = InstallerConfig::default();
    let target = TargetSpec::host();
    let home = dirs::home_dir().context("Could not determine home directory")?;
    println!("Installing {} for {target}", config.repo);

    let current_path = current_process_path()?;
    let installer = Installer::new(GitHubClient::new(&config), config, target, home);
    let report = installer.run(&current_path)?;

    if let Some(path) = &report.updated_path {
        apply_process_path(path);
    }
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &InstallReport) {
    println!(
        "Installed {} ({}) to: {}",
        report.asset_name,
        report.release_tag,
        report.install_dir.display()
    );
    for exe in &report.executables {
        println!("  - {}", exe.display());
    }

    if report.updated_path.is_some() {
        println!(
            "Added {} to PATH for this process only. To keep it, add this to your shell profile:",
            report.install_dir.display()
        );
        println!("  {}", persist_hint(&report.install_dir));
    } else {
        println!("{} is already in PATH", report.install_dir.display());
    }
}
