//! Repository port - read-only view of the version-controlled working tree

use std::path::Path;

use crate::domain::entities::Commit;
use crate::error::SitepushResult;

/// Capabilities the workflow needs from version control.
///
/// Implementations:
/// - `GitRepository` - backed by the `git` executable
/// - test fakes returning canned commits
pub trait Repository {
    /// Root of the checked-out working tree.
    fn working_tree_root(&self) -> &Path;

    /// Snapshot of the current HEAD commit.
    fn head_commit(&self) -> SitepushResult<Commit>;

    /// A value from the local configuration (e.g. `user.name`), if set.
    fn config_value(&self, key: &str) -> SitepushResult<Option<String>>;
}
