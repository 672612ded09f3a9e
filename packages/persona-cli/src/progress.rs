//! Terminal progress rendering.

use console::style;
use persona_engine::ProgressSink;

/// Prints one line per update, prefixed with a platform label.
pub struct TerminalProgress {
    label: &'static str,
}

impl TerminalProgress {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl ProgressSink for TerminalProgress {
    fn report(&self, percent: u8, message: &str) {
        println!(
            "{} {:>3}% {}",
            style(format!("[{}]", self.label)).cyan(),
            percent,
            message
        );
    }
}
