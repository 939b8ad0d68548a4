use sitepush::config::{AnimationMode, ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(verbose, cli_color, cli_no_animation, config, caps)
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let animation = if cli_no_animation || caps.is_ci {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always => caps.is_tty,
                AnimationMode::Auto => caps.is_tty && !caps.is_ci,
            }
        };

        Self {
            verbose,
            caps,
            color,
            unicode,
            animation,
        }
    }

    /// Plain output: no color, ASCII icons, no animation.
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self {
            verbose: 0,
            caps: TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
                width: 80,
            },
            color: false,
            unicode: false,
            animation: false,
        }
    }

    /// Uncolored, but with Unicode icons.
    #[cfg(test)]
    pub(crate) fn unicode() -> Self {
        Self {
            unicode: true,
            ..Self::plain()
        }
    }
}
