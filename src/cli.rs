use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// sitepush - copy the files of your last commit into an OMD site
#[derive(Parser, Debug)]
#[command(name = "sitepush")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run inside a check_mk git checkout. Files under .werks/ and bin/ are never copied."
)]
pub struct Cli {
    /// Config file (default: ~/.config/sitepush/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable the spinner during the copy phase
    #[arg(long)]
    pub no_animation: bool,

    /// Verbosity level (-v prints commands, -vv also their output on failure)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["sitepush"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.color.is_none());
        assert!(!cli.no_animation);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "sitepush",
            "--config",
            "/tmp/sitepush.toml",
            "--color",
            "never",
            "--no-animation",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sitepush.toml")));
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert!(cli.no_animation);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_dry_run() {
        assert!(Cli::try_parse_from(["sitepush", "--dry-run"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["sitepush", "--color", "sometimes"]).is_err());
    }
}
