//! Application Layer
//!
//! Use cases orchestrating domain objects and ports:
//!
//! - `sites` - enumerate deployment targets
//! - `inspect` - read HEAD and resolve the deployable change set
//! - `deploy` - plan and execute the elevated copies

pub mod deploy;
pub mod inspect;
pub mod sites;

pub use deploy::{CopyOutcome, CopyStep, DeployPlan, DeployResult, DeployUseCase, FileResult};
pub use inspect::{inspect_last_commit, CommitInspection, USER_NAME_KEY};
pub use sites::list_sites;
