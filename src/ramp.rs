//! Glyph ramp - maps 8-bit intensities onto an ordered character set.

use crate::{FolioError, Result};
use std::str::FromStr;

/// Densest glyph first, so dark pixels render as heavy characters.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Ordered, immutable glyph sequence split into equal-width intensity buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    bucket_width: usize,
}

impl GlyphRamp {
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(FolioError::InvalidRamp("ramp is empty".into()));
        }
        if glyphs.len() > 256 {
            return Err(FolioError::InvalidRamp(format!(
                "{} glyphs exceed the 256 intensity levels",
                glyphs.len()
            )));
        }
        let bucket_width = 256 / glyphs.len();
        Ok(Self { glyphs, bucket_width })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn bucket_width(&self) -> usize {
        self.bucket_width
    }

    /// Bucket index for an intensity. Integer division can land one past the
    /// last bucket at the top of the range, so the index is clamped.
    pub fn index(&self, intensity: u8) -> usize {
        (intensity as usize / self.bucket_width).min(self.glyphs.len() - 1)
    }

    pub fn glyph(&self, intensity: u8) -> char {
        self.glyphs[self.index(intensity)]
    }

    /// Representative intensity for a bucket (its midpoint).
    pub fn level(&self, index: usize) -> u8 {
        let index = index.min(self.glyphs.len() - 1);
        (index * self.bucket_width + self.bucket_width / 2).min(255) as u8
    }

    pub fn map_row(&self, row: &[u8]) -> String {
        row.iter().map(|&p| self.glyph(p)).collect()
    }

    /// Same glyphs, lightest first.
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs, bucket_width: self.bucket_width }
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        let glyphs: Vec<char> = DEFAULT_RAMP.chars().collect();
        let bucket_width = 256 / glyphs.len();
        Self { glyphs, bucket_width }
    }
}

impl FromStr for GlyphRamp {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
