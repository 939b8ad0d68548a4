//! Domain Entities

mod commit;

pub use commit::{Commit, FileChange, FileStats, TIMESTAMP_FORMAT};
