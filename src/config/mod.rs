//! Configuration module for sitepush
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITEPUSH_*)
//! 3. Config file (`--config`, `$SITEPUSH_CONFIG`, or ~/.config/sitepush/config.toml)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, user_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, CONFIG_PATH_ENV,
};
pub use types::{AnimationMode, ColorMode, Config, DeployConfig, OutputConfig, SitesConfig};
