//! Terminal styling capability.

use owo_colors::OwoColorize;

/// Styler applies terminal colours to report text when enabled.
///
/// A plain styler returns text unchanged, so the same rendering code serves
/// terminals, pipes and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Styler { color }
    }

    pub fn plain() -> Self {
        Styler { color: false }
    }

    pub fn colored() -> Self {
        Styler { color: true }
    }

    pub fn added(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold().to_string())
    }

    pub fn removed(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold().to_string())
    }

    pub fn notice(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold().to_string())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold().to_string())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}
