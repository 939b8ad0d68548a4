//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The HEAD `Commit` snapshot
//! - `value_objects/` - Sites, changed files, exclusion rule, site layout
//! - `ports/` - Interface definitions for infrastructure
//!
//! All process execution and version-control access goes through the
//! trait-defined ports.

pub mod entities;
pub mod ports;
pub mod value_objects;
