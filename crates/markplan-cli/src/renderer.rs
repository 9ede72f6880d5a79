//! Terminal rendering of plan markdown
//!
//! Rich output styles inline markdown with termimad and colors headings;
//! plain output prints the text unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render markdown text into `out`, always ending with a newline.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            if !markdown.ends_with('\n') {
                writeln!(out)?;
            }
            return Ok(());
        }

        // Headings keep their hash marks so task titles stay recognizable
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: &TerminalRenderer, markdown: &str) -> String {
        let mut out = Vec::new();
        renderer.render_to(&mut out, markdown).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_renderer_passes_text_through() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);

        let text = "# Task Plan\n\n[ ] **step**\n";
        assert_eq!(rendered(&renderer, text), text);
    }

    #[test]
    fn test_plain_renderer_terminates_messages() {
        let renderer = TerminalRenderer::new(false);
        assert_eq!(
            rendered(&renderer, "Added step 's' to task 'T'."),
            "Added step 's' to task 'T'.\n"
        );
    }

    #[test]
    fn test_rich_renderer_colors_headings() {
        let renderer = TerminalRenderer::new(true);
        let out = rendered(&renderer, "## Build\n\n[ ] compile");

        assert!(out.starts_with("\x1b[34m## Build\x1b[0m\n"));
        assert!(out.contains("compile"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
