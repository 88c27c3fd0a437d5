//! Startup banner: boxed name block with optional ASCII art beside it.

use super::screen::Screen;
use crate::{FolioError, Result};
use console::style;
use std::io::{self, Write};
use std::path::Path;

pub const DEFAULT_ART_PATH: &str = "ascii-art.txt";

// Art is sampled down to fit beside the box
pub const ART_LINES: usize = 10;
pub const ART_STRIDE: usize = 6;
pub const ART_COLUMNS: usize = 30;

const BOX_INNER: usize = 45;

const NAME: [&str; 6] = [
    "███████╗ ██████╗ ██╗     ██╗ ██████╗ ",
    "██╔════╝██╔═══██╗██║     ██║██╔═══██╗",
    "█████╗  ██║   ██║██║     ██║██║   ██║",
    "██╔══╝  ██║   ██║██║     ██║██║   ██║",
    "██║     ╚██████╔╝███████╗██║╚██████╔╝",
    "╚═╝      ╚═════╝ ╚══════╝╚═╝ ╚═════╝ ",
];

const TAGLINE: &str = "Developer | Designer | Builder";

#[derive(Debug, Clone, Default)]
pub struct Banner {
    art: Vec<String>,
}

impl Banner {
    /// Load art from `path`. A missing or unreadable file leaves the art
    /// column blank.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match read_art(path.as_ref()) {
            Ok(text) => Self::from_art(&text),
            Err(FolioError::ResourceNotFound(p)) => {
                tracing::debug!(path = %p.display(), "no banner art, using blank placeholder");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("failed to read banner art: {e}");
                Self::default()
            }
        }
    }

    /// Every sixth line, cut to the art column width.
    pub fn from_art(text: &str) -> Self {
        let art = text
            .lines()
            .step_by(ART_STRIDE)
            .take(ART_LINES)
            .map(|line| line.chars().take(ART_COLUMNS).collect::<String>().trim_end().to_string())
            .collect();
        Self { art }
    }

    /// Exactly [`ART_LINES`] entries, blank-padded.
    pub fn art_lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.art.iter().map(String::as_str).collect();
        lines.resize(ART_LINES, "");
        lines
    }

    fn box_lines() -> Vec<String> {
        let mut inner = vec![String::new()];
        inner.extend(NAME.iter().map(|s| s.to_string()));
        inner.push(String::new());
        inner.push(TAGLINE.to_string());
        inner.push(String::new());

        let mut lines = vec![format!("╔{}╗", "═".repeat(BOX_INNER))];
        lines.extend(inner.iter().map(|s| format!("║{s:^BOX_INNER$}║")));
        lines.push(format!("╚{}╝", "═".repeat(BOX_INNER)));
        lines
    }

    pub fn render<W: Write>(&self, screen: &mut Screen<W>) -> io::Result<()> {
        let art = self.art_lines();
        screen.blank()?;
        for (i, line) in Self::box_lines().iter().enumerate() {
            match art.get(i) {
                Some(a) if !a.is_empty() => screen.line(format_args!(
                    "{}  {}",
                    style(line).cyan(),
                    style(format!("{a:<ART_COLUMNS$}")).black().bright()
                ))?,
                _ => screen.line(style(line).cyan())?,
            }
        }
        Ok(())
    }
}

fn read_art(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FolioError::ResourceNotFound(path.to_path_buf()),
        _ => FolioError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::screen::Pacing;

    fn screen() -> Screen<Vec<u8>> {
        console::set_colors_enabled(false);
        Screen::new(Vec::new(), Pacing::instant())
    }

    #[test]
    fn samples_every_sixth_line() {
        let text: String = (0..100).map(|i| format!("line {i}\n")).collect();
        let banner = Banner::from_art(&text);
        let lines = banner.art_lines();
        assert_eq!(lines.len(), ART_LINES);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[1], "line 6");
        assert_eq!(lines[9], "line 54");
    }

    #[test]
    fn long_lines_are_cut_and_trimmed() {
        let text = format!("{}   tail\n", "x".repeat(28));
        let banner = Banner::from_art(&text);
        assert_eq!(banner.art_lines()[0], "x".repeat(28));
    }

    #[test]
    fn short_art_is_padded_with_blanks() {
        let banner = Banner::from_art("only\n");
        let lines = banner.art_lines();
        assert_eq!(lines[0], "only");
        assert!(lines[1..].iter().all(|l| l.is_empty()));
    }

    #[test]
    fn missing_file_renders_box_only() {
        let dir = tempfile::tempdir().unwrap();
        let banner = Banner::load(dir.path().join("nope.txt"));
        assert!(banner.art_lines().iter().all(|l| l.is_empty()));

        let mut screen = screen();
        banner.render(&mut screen).unwrap();
        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert!(out.contains(TAGLINE));
        assert_eq!(out.lines().filter(|l| l.contains('║')).count(), 10);
    }

    #[test]
    fn art_file_is_drawn_beside_box() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        std::fs::write(&path, "/\\_/\\\n").unwrap();

        let mut screen = screen();
        Banner::load(&path).render(&mut screen).unwrap();
        let out = String::from_utf8(screen.into_inner()).unwrap();
        let top = out.lines().find(|l| l.contains('╔')).unwrap();
        assert!(top.contains("/\\_/\\"));
    }

    #[test]
    fn box_rows_share_a_width() {
        let widths: Vec<usize> = Banner::box_lines().iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == BOX_INNER + 2));
    }
}
