//! Commit entity - a read-once snapshot of the repository's HEAD

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use crate::domain::value_objects::{ChangedFile, ExcludedDirs};

/// Display format of commit timestamps: `19/10/2026, 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Line counts for one file. `None` for binary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    pub insertions: Option<usize>,
    pub deletions: Option<usize>,
}

impl FileStats {
    pub fn new(insertions: usize, deletions: usize) -> Self {
        Self {
            insertions: Some(insertions),
            deletions: Some(deletions),
        }
    }

    pub fn binary() -> Self {
        Self::default()
    }
}

/// A file touched by the commit with its change statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub stats: FileStats,
}

/// The repository's HEAD commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub author: String,
    pub committed_at: DateTime<FixedOffset>,
    pub message: String,
    /// Files in the order the version-control system reported them
    pub files: Vec<FileChange>,
}

impl Commit {
    /// Committer timestamp in the committer's own offset.
    pub fn formatted_timestamp(&self) -> String {
        self.committed_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Whether the commit was authored by the given identity name.
    pub fn is_authored_by(&self, name: Option<&str>) -> bool {
        name.is_some_and(|n| n == self.author)
    }

    /// Changed files minus excluded directories, in commit order.
    pub fn changed_files(&self, excluded: &ExcludedDirs) -> Vec<ChangedFile> {
        excluded.filter(self.files.iter().map(|f| f.path.clone()))
    }
}
