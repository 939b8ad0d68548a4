//! Git repository adapter
//!
//! Talks to the `git` executable through a [`CommandRunner`], using plumbing
//! output formats only (NUL separated, no colors, no pagers).

use std::path::{Path, PathBuf};

use chrono::DateTime;

use crate::domain::entities::{Commit, FileChange, FileStats};
use crate::domain::ports::{CommandOutput, CommandRunner, Invocation, Repository};
use crate::error::{SitepushError, SitepushResult};

const GIT: &str = "git";

/// Author, committer date (strict ISO 8601), parents, raw message.
const HEAD_FORMAT: &str = "--format=%an%x00%cI%x00%P%x00%B";

/// A working tree discovered by searching upwards from a directory.
pub struct GitRepository<R: CommandRunner> {
    runner: R,
    root: PathBuf,
}

impl<R: CommandRunner> GitRepository<R> {
    /// Find the repository containing `start`, searching its ancestors.
    pub fn discover(runner: R, start: &Path) -> SitepushResult<Self> {
        let output = runner.run(
            &Invocation::new(GIT)
                .args(["rev-parse", "--show-toplevel"])
                .current_dir(start),
        )?;

        let root = output.stdout.trim();
        if !output.is_success() || root.is_empty() {
            return Err(SitepushError::NotARepository {
                path: start.to_path_buf(),
            });
        }

        Ok(Self {
            root: PathBuf::from(root),
            runner,
        })
    }

    fn git(&self) -> Invocation {
        Invocation::new(GIT).current_dir(&self.root)
    }

    fn changed_files(&self, parent: Option<&str>) -> SitepushResult<Vec<FileChange>> {
        let mut inv = self
            .git()
            .args(["diff-tree", "-r", "--numstat", "--no-renames", "--no-commit-id", "-z"]);
        inv = match parent {
            Some(parent) => inv.args([parent, "HEAD"]),
            None => inv.args(["--root", "HEAD"]),
        };

        let output = self.runner.run(&inv)?;
        if !output.is_success() {
            return Err(malformed(&output));
        }
        Ok(parse_numstat(&output.stdout))
    }
}

impl<R: CommandRunner> Repository for GitRepository<R> {
    fn working_tree_root(&self) -> &Path {
        &self.root
    }

    fn head_commit(&self) -> SitepushResult<Commit> {
        let output = self.runner.run(&self.git().args([
            "log",
            "-1",
            "--no-color",
            "--no-show-signature",
            HEAD_FORMAT,
            "HEAD",
        ]))?;
        if !output.is_success() {
            return Err(malformed(&output));
        }

        let mut fields = output.stdout.splitn(4, '\0');
        let (Some(author), Some(date), Some(parents), Some(message)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(SitepushError::MalformedRepository {
                message: "unexpected 'git log' output for HEAD".to_string(),
            });
        };

        let committed_at =
            DateTime::parse_from_rfc3339(date.trim()).map_err(|_| SitepushError::InvalidTimestamp {
                value: date.to_string(),
            })?;

        let files = self.changed_files(parents.split_whitespace().next())?;

        // `--format` terminates each record with one newline of its own; the
        // stored message keeps its trailing newline
        let message = message.strip_suffix('\n').unwrap_or(message);

        Ok(Commit {
            author: author.to_string(),
            committed_at,
            message: message.to_string(),
            files,
        })
    }

    /// Last value of `key`, as git itself resolves multi-valued keys.
    ///
    /// Unset keys and unreadable config are both `None`.
    fn config_value(&self, key: &str) -> SitepushResult<Option<String>> {
        let output = self.runner.run(&self.git().args(["config", "--get-all", key]))?;
        if !output.is_success() {
            return Ok(None);
        }
        Ok(output
            .stdout
            .lines()
            .last()
            .map(|v| v.trim_end_matches('\r').to_string()))
    }
}

fn malformed(output: &CommandOutput) -> SitepushError {
    SitepushError::MalformedRepository {
        message: output.stderr.trim().to_string(),
    }
}

/// Parse `git diff-tree --numstat -z` output.
///
/// Each record is `<added>\t<deleted>\t<path>\0`; binary files report `-`
/// for both counts.
fn parse_numstat(output: &str) -> Vec<FileChange> {
    output
        .split('\0')
        .filter_map(|record| {
            let mut parts = record.trim_start_matches('\n').splitn(3, '\t');
            let added = parts.next()?;
            let deleted = parts.next()?;
            let path = parts.next().filter(|p| !p.is_empty())?;
            Some(FileChange {
                path: PathBuf::from(path),
                stats: FileStats {
                    insertions: added.parse().ok(),
                    deletions: deleted.parse().ok(),
                },
            })
        })
        .collect()
}
