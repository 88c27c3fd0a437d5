//! Image to ASCII converter and interactive terminal portfolio.

pub mod dither;
pub mod logging;
pub mod ramp;
pub mod resize;
pub mod shell;

pub use ramp::GlyphRamp;
pub use shell::{Shell, ShellOptions};

use image::DynamicImage;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("Command `{command}` failed: {reason}")]
    HandlerFailure { command: String, reason: String },
    #[error("Invalid glyph ramp: {0}")]
    InvalidRamp(String),
    #[error("Invalid aspect correction {0}: must be finite and greater than zero")]
    InvalidAspect(f64),
    #[error("Image has no pixels")]
    EmptyImage,
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Open an image, reporting a missing file as [`FolioError::ResourceNotFound`].
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            FolioError::ResourceNotFound(path.to_path_buf())
        }
        other => FolioError::Image(other),
    })
}

/// Rendered character grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsciiArt {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<String>,
}

impl AsciiArt {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Luminance-to-glyph converter
pub struct Converter {
    width: u32,
    aspect: f64,
    ramp: GlyphRamp,
    dither: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            width: resize::DEFAULT_WIDTH,
            aspect: resize::ASPECT_CORRECTION,
            ramp: GlyphRamp::default(),
            dither: false,
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// Vertical squash applied to compensate for tall terminal cells.
    pub fn with_aspect(mut self, aspect: f64) -> Result<Self> {
        self.aspect = resize::check_aspect(aspect)?;
        Ok(self)
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn with_dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    pub fn convert(&self, image: &DynamicImage) -> Result<AsciiArt> {
        if image.width() == 0 || image.height() == 0 {
            return Err(FolioError::EmptyImage);
        }

        let resized = resize::downsample(image, self.width, self.aspect);
        let gray = resized.to_luma8();
        let gray = if self.dither {
            dither::dither_atkinson(&gray, &self.ramp)
        } else {
            gray
        };

        let (out_w, out_h) = gray.dimensions();
        tracing::debug!(
            src_w = image.width(),
            src_h = image.height(),
            out_w,
            out_h,
            dither = self.dither,
            "converting image"
        );

        let rows: Vec<String> = gray
            .as_raw()
            .par_chunks(out_w as usize)
            .map(|row| self.ramp.map_row(row))
            .collect();

        Ok(AsciiArt { width: out_w, height: out_h, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    #[test]
    fn grid_matches_resized_dimensions() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(200, 100));
        let art = Converter::new().convert(&image).unwrap();
        // 100 / 200 * 120 * 0.55 = 33
        assert_eq!(art.width, 120);
        assert_eq!(art.height, 33);
        assert_eq!(art.rows.len(), 33);
        assert!(art.rows.iter().all(|r| r.chars().count() == 120));
    }

    #[test]
    fn black_and_white_use_ramp_ends() {
        let mut gray = GrayImage::new(4, 4);
        for x in 0..4 {
            for y in 0..4 {
                gray.put_pixel(x, y, Luma([if x < 2 { 0 } else { 255 }]));
            }
        }
        let image = DynamicImage::ImageLuma8(gray);
        let art = Converter::new()
            .with_width(4)
            .with_aspect(1.0)
            .unwrap()
            .convert(&image)
            .unwrap();
        assert_eq!(art.rows, vec!["@@  "; 4]);
    }

    #[test]
    fn display_ends_every_row_with_newline() {
        let art = AsciiArt { width: 2, height: 2, rows: vec!["@@".into(), "  ".into()] };
        assert_eq!(art.to_string(), "@@\n  \n");
    }

    #[test]
    fn json_carries_dimensions_and_rows() {
        let art = AsciiArt { width: 1, height: 1, rows: vec!["#".into()] };
        let value: serde_json::Value = serde_json::from_str(&art.to_json().unwrap()).unwrap();
        assert_eq!(value["width"], 1);
        assert_eq!(value["rows"][0], "#");
    }

    #[test]
    fn non_finite_or_non_positive_aspect_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -3.0, 0.0] {
            assert!(matches!(
                Converter::new().with_aspect(bad),
                Err(FolioError::InvalidAspect(_))
            ));
        }
    }

    #[test]
    fn empty_image_is_rejected() {
        let image = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        assert!(matches!(Converter::new().convert(&image), Err(FolioError::EmptyImage)));
    }

    #[test]
    fn missing_image_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dragon.png");
        match load_image(&path) {
            Err(FolioError::ResourceNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
