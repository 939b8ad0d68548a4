//! Site layout - where a site's runtime directory lives on disk

use std::path::PathBuf;

use super::{ChangedFile, Site};

/// Maps a site and a repository-relative path to its deployed location.
///
/// The runtime root of a site is `<sites_root>/<site>/<runtime_dir>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    sites_root: PathBuf,
    runtime_dir: PathBuf,
}

impl SiteLayout {
    pub const DEFAULT_SITES_ROOT: &'static str = "/omd/sites";
    pub const DEFAULT_RUNTIME_DIR: &'static str = "lib/python3";

    pub fn new(sites_root: impl Into<PathBuf>, runtime_dir: impl Into<PathBuf>) -> Self {
        Self {
            sites_root: sites_root.into(),
            runtime_dir: runtime_dir.into(),
        }
    }

    pub fn runtime_root(&self, site: &Site) -> PathBuf {
        self.sites_root.join(site.name()).join(&self.runtime_dir)
    }

    pub fn destination(&self, site: &Site, file: &ChangedFile) -> PathBuf {
        self.runtime_root(site).join(file.path())
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SITES_ROOT, Self::DEFAULT_RUNTIME_DIR)
    }
}
