// Public modules
pub mod archive;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod download;
pub mod error;
pub mod install;
pub mod models;
pub mod target;

// Re-export commonly used types
pub use error::InstallError;
pub use install::installer::{InstallReport, Installer};
pub use models::*;
