//! sitepush - deploy the last git commit into an OMD site
//!
//! Reads the files touched by HEAD in a check_mk working tree, drops the
//! ones under excluded directories and copies the rest into a site's runtime
//! directory with an elevated copy command.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use application::{inspect_last_commit, list_sites, DeployPlan, DeployResult, DeployUseCase};
pub use config::Config;
pub use domain::entities::Commit;
pub use domain::value_objects::{ChangedFile, ExcludedDirs, Site, SiteLayout, SiteMenu};
pub use error::{SitepushError, SitepushResult};
pub use infrastructure::{GitRepository, SystemCommandRunner};
