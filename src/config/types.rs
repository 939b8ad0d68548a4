//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::value_objects::{ExcludedDirs, SiteLayout};
/// Where sites live and how to list them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SitesConfig {
    #[serde(default = "default_sites_root")]
    pub root: PathBuf,

    #[serde(default = "default_runtime_dir")]
    pub runtime_dir: PathBuf,

    #[serde(default = "default_list_command")]
    pub list_command: Vec<String>,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            root: default_sites_root(),
            runtime_dir: default_runtime_dir(),
            list_command: default_list_command(),
        }
    }
}

fn default_sites_root() -> PathBuf {
    PathBuf::from(SiteLayout::DEFAULT_SITES_ROOT)
}

fn default_runtime_dir() -> PathBuf {
    PathBuf::from(SiteLayout::DEFAULT_RUNTIME_DIR)
}

fn default_list_command() -> Vec<String> {
    vec!["omd".to_string(), "sites".to_string()]
}

/// What gets copied and how
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    #[serde(default = "default_copy_command")]
    pub copy_command: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            copy_command: default_copy_command(),
        }
    }
}

fn default_excluded_dirs() -> Vec<String> {
    ExcludedDirs::DEFAULT.iter().map(|d| d.to_string()).collect()
}

fn default_copy_command() -> Vec<String> {
    vec!["sudo".to_string(), "cp".to_string(), "-R".to_string()]
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALUES: [&'static str; 3] = ["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sites: SitesConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(&self.sites.root, &self.sites.runtime_dir)
    }

    pub fn excluded_dirs(&self) -> ExcludedDirs {
        ExcludedDirs::new(self.deploy.excluded_dirs.clone())
    }
}
