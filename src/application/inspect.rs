//! Commit inspection - resolves the change set of the last commit

use crate::domain::entities::Commit;
use crate::domain::ports::Repository;
use crate::domain::value_objects::{ChangedFile, ExcludedDirs};
use crate::error::SitepushResult;

/// Config key holding the local identity compared against the author.
pub const USER_NAME_KEY: &str = "user.name";

/// What the last commit means for a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInspection {
    pub commit: Commit,
    /// Author matches the configured `user.name`
    pub own_commit: bool,
    /// Deployable files, in commit order
    pub changed_files: Vec<ChangedFile>,
}

pub fn inspect_last_commit(
    repo: &dyn Repository,
    excluded: &ExcludedDirs,
) -> SitepushResult<CommitInspection> {
    let commit = repo.head_commit()?;
    let user_name = repo.config_value(USER_NAME_KEY)?;
    let own_commit = commit.is_authored_by(user_name.as_deref());
    let changed_files = commit.changed_files(excluded);

    Ok(CommitInspection {
        commit,
        own_commit,
        changed_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{commit, FakeRepository};

    #[test]
    fn resolves_changed_files_without_excluded_dirs() {
        let repo = FakeRepository::with_files(&[".werks/123", "bin/tool", "cmk/plugin.py", "Pipfile"]);
        let inspection = inspect_last_commit(&repo, &ExcludedDirs::default()).unwrap();
        assert_eq!(
            inspection.changed_files,
            vec![ChangedFile::new("cmk/plugin.py"), ChangedFile::new("Pipfile")]
        );
        assert!(inspection.own_commit);
    }

    #[test]
    fn foreign_author_is_flagged() {
        let mut repo = FakeRepository::with_files(&["cmk/plugin.py"]);
        repo.head = Some(commit("Someone Else", &["cmk/plugin.py"]));
        let inspection = inspect_last_commit(&repo, &ExcludedDirs::default()).unwrap();
        assert!(!inspection.own_commit);
        assert_eq!(inspection.changed_files.len(), 1);
    }

    #[test]
    fn unset_identity_is_not_own_commit() {
        let mut repo = FakeRepository::with_files(&["cmk/plugin.py"]);
        repo.user_name = None;
        let inspection = inspect_last_commit(&repo, &ExcludedDirs::default()).unwrap();
        assert!(!inspection.own_commit);
    }

    #[test]
    fn unborn_head_propagates() {
        let mut repo = FakeRepository::with_files(&[]);
        repo.head = None;
        let err = inspect_last_commit(&repo, &ExcludedDirs::default()).unwrap_err();
        assert!(err.is_repository_error());
    }
}
