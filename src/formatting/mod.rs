use clap::ValueEnum;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Apply the color environment variables on top of `Auto`.
    ///
    /// An explicit `Always`/`Never` from the command line wins.
    pub fn with_env(self) -> Self {
        match self {
            Self::Auto => color_mode_from_env(|key| env::var(key).ok()),
            explicit => explicit,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

// Pure function over an env lookup, per no-color.org and CLICOLOR conventions
fn color_mode_from_env<F>(lookup: F) -> ColorMode
where
    F: Fn(&str) -> Option<String>,
{
    let mut mode = ColorMode::Auto;

    if lookup("NO_COLOR").is_some() {
        mode = ColorMode::Never;
    }

    if lookup("CLICOLOR").as_deref() == Some("0") {
        mode = ColorMode::Never;
    }

    if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
        mode = ColorMode::Always;
    }

    mode
}

/// Resolve a mode against the environment and the terminal.
pub fn resolve_color(mode: ColorMode) -> bool {
    mode.with_env().should_use_color()
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
