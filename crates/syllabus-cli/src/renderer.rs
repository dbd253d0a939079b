//! Markdown and JSON output for the `syl` commands.
//!
//! Markdown goes through termimad when styling is on and is written as-is
//! otherwise. JSON is never styled so it can be piped.

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    /// `None` writes markdown untouched (`--no-color`, pipes, tests).
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(styled: bool) -> Self {
        let skin = styled.then(|| {
            let mut skin = MadSkin::default();
            // Counts and reached dates are the bold parts of the output.
            skin.bold.set_fg(Color::Yellow);
            skin
        });
        Self { skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => skin.print_text(markdown),
            None => print!("{markdown}"),
        }
        Ok(())
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
        println!("{text}");
        Ok(())
    }
}
