use is_terminal::IsTerminal;
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

/// Terminal styling, switched off when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn paint<T: Display>(&self, value: T, style: Style) -> String {
        if self.enabled {
            value.style(style).to_string()
        } else {
            value.to_string()
        }
    }

    pub fn heading<T: Display>(&self, value: T) -> String {
        self.paint(value, Style::new().bold())
    }

    pub fn accent<T: Display>(&self, value: T) -> String {
        self.paint(value, Style::new().cyan())
    }

    pub fn dim<T: Display>(&self, value: T) -> String {
        self.paint(value, Style::new().bright_black())
    }

    pub fn success<T: Display>(&self, value: T) -> String {
        self.paint(value, Style::new().green())
    }

    pub fn error<T: Display>(&self, value: T) -> String {
        self.paint(value, Style::new().red())
    }
}
