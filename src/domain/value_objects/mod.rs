//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod changed_file;
mod site;
mod site_layout;

pub use changed_file::{ChangedFile, ExcludedDirs};
pub use site::{Site, SiteEntry, SiteMenu, QUIT_LABEL};
pub use site_layout::SiteLayout;
