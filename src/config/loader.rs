//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SitepushError, SitepushResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SITEPUSH_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SitepushResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SitepushError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file and apply environment overrides.
///
/// Lookup order: `explicit` (from `--config`), `$SITEPUSH_CONFIG`, then
/// `<config dir>/sitepush/config.toml`. An explicitly named file must exist;
/// the user config is optional.
pub fn resolve(explicit: Option<&Path>) -> SitepushResult<LoadedConfig> {
    resolve_with(
        explicit,
        |key| std::env::var(key).ok(),
        user_config_path(),
        &mut std::io::stderr(),
    )
}

pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    user_config: Option<PathBuf>,
    warn: &mut impl Write,
) -> SitepushResult<LoadedConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| get_env(CONFIG_PATH_ENV).map(PathBuf::from));

    let source = match named {
        Some(path) => Some(path),
        None => user_config.filter(|p| p.exists()),
    };

    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config, get_env, warn),
        warnings,
        source,
    })
}

/// Default location of the user config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sitepush").join("config.toml"))
}

/// Apply environment variable overrides (SITEPUSH_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warn: &mut impl Write,
) -> Config {
    if let Some(root) = get_env("SITEPUSH_SITES_ROOT").filter(|v| !v.is_empty()) {
        config.sites.root = PathBuf::from(root);
    }

    if let Some(dir) = get_env("SITEPUSH_RUNTIME_DIR").filter(|v| !v.is_empty()) {
        config.sites.runtime_dir = PathBuf::from(dir);
    }

    // Comma separated; an empty value disables exclusions
    if let Some(dirs) = get_env("SITEPUSH_EXCLUDED_DIRS") {
        config.deploy.excluded_dirs = dirs
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(color) = get_env("SITEPUSH_COLOR") {
        let validator = EnvVarValidator::new("SITEPUSH_COLOR", &ColorMode::VALUES);
        config.output.color =
            validator.parse_or_warn(&color, ColorMode::parse, config.output.color, warn);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sites",
        "root",
        "runtime_dir",
        "list_command",
        "deploy",
        "excluded_dirs",
        "copy_command",
        "output",
        "color",
        "animation",
        "unicode",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
