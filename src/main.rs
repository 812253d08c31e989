use anyhow::Result;

fn main() -> Result<()> {
    git_lfs_synology_installer::cli::run()
}
