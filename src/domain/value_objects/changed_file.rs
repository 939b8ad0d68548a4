//! Changed file value objects - repository-relative paths and the exclusion rule

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path touched by a commit, relative to the working tree root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangedFile(PathBuf);

impl ChangedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Absolute location of the file inside the working tree.
    pub fn source_in(&self, working_tree_root: &Path) -> PathBuf {
        working_tree_root.join(&self.0)
    }
}

impl fmt::Display for ChangedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Top-level directories whose files are never deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedDirs(Vec<String>);

impl ExcludedDirs {
    /// Werks (changelog entries) and helper binaries.
    pub const DEFAULT: [&'static str; 2] = [".werks", "bin"];

    pub fn new(dirs: Vec<String>) -> Self {
        Self(dirs)
    }

    /// True when the first path segment is an excluded directory.
    pub fn excludes(&self, path: &Path) -> bool {
        let Some(Component::Normal(first)) = path
            .components()
            .find(|c| !matches!(c, Component::CurDir))
        else {
            return false;
        };
        self.0.iter().any(|dir| first == dir.as_str())
    }

    /// Keep the non-excluded paths, preserving their order.
    pub fn filter<I, P>(&self, paths: I) -> Vec<ChangedFile>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(Into::into)
            .filter(|p| !self.excludes(p))
            .map(ChangedFile::new)
            .collect()
    }
}

impl Default for ExcludedDirs {
    fn default() -> Self {
        Self(Self::DEFAULT.iter().map(|d| d.to_string()).collect())
    }
}
