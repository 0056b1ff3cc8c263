//! Terminal rendering module for rich markdown output
//!
//! Everything Compass prints is markdown. In rich mode termimad styles it for
//! the terminal; in plain mode it is written out unchanged, which keeps piped
//! output and tests stable.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.format(markdown).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Formats markdown for display.
    ///
    /// Header lines keep their hash marks and are colored whole; other lines
    /// get inline styling.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut output = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                output.push_str(&format!("{HEADER_COLOR}{line}{RESET}\n"));
            } else {
                output.push_str(&format!("{}\n", self.skin.inline(line)));
            }
        }
        output
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
