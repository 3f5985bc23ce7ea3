//! # Output Configuration
//!
//! Decides whether CLI output may use colors and status emoji.
//!
//! In `auto` mode the following are honored, in order:
//! - `NO_COLOR` (any value, even empty) disables colors (https://no-color.org/)
//! - `CLICOLOR=0` disables colors
//! - `CLICOLOR_FORCE` set to anything but `0` forces colors, even when piped
//! - `TERM=dumb` disables colors
//! - otherwise colors are used when stdout is a color-capable terminal

use std::env;

use clap::ValueEnum;
use console::style;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Renders a group name in bold cyan when colors are enabled.
    pub fn group_label(&self, name: &str) -> String {
        style(name)
            .cyan()
            .bold()
            .force_styling(self.use_color)
            .to_string()
    }

    /// Renders a failure marker in red when colors are enabled.
    pub fn error_label(&self, text: &str) -> String {
        style(text).red().force_styling(self.use_color).to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

/// Picks `emoji_str` when colors are on, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
