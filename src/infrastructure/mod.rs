//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process execution.
//!
//! ## Structure
//!
//! - `process` - `std::process` backed command runner
//! - `git` - repository adapter over the `git` executable

pub mod git;
pub mod process;

pub use git::GitRepository;
pub use process::SystemCommandRunner;
