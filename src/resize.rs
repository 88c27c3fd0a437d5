//! Downsampling - shrinks an image to one pixel per output character.

use crate::{FolioError, Result};
use image::imageops::FilterType;
use image::DynamicImage;

pub const DEFAULT_WIDTH: u32 = 120;

// Terminal cells are taller than wide
pub const ASPECT_CORRECTION: f64 = 0.55;

/// Accept only finite, positive aspect factors. Anything else either
/// collapses the grid to one row or asks for an unbounded allocation.
pub fn check_aspect(aspect: f64) -> Result<f64> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(aspect)
    } else {
        Err(FolioError::InvalidAspect(aspect))
    }
}

/// Output grid size for a `width`×`height` source scaled to `columns`.
pub fn target_dimensions(width: u32, height: u32, columns: u32, aspect: f64) -> (u32, u32) {
    let ratio = height as f64 / width as f64;
    let rows = (ratio * columns as f64 * aspect).round().max(1.0) as u32;
    (columns, rows)
}

pub fn downsample(image: &DynamicImage, columns: u32, aspect: f64) -> DynamicImage {
    let (w, h) = target_dimensions(image.width(), image.height(), columns, aspect);
    if (w, h) == (image.width(), image.height()) {
        return image.clone();
    }
    image.resize_exact(w, h, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use proptest::prelude::*;

    #[test]
    fn square_image_is_squashed() {
        // 1.0 * 120 * 0.55 = 66
        assert_eq!(target_dimensions(512, 512, 120, ASPECT_CORRECTION), (120, 66));
    }

    #[test]
    fn height_rounds_to_nearest() {
        // 3 / 4 * 10 * 0.55 = 4.125
        assert_eq!(target_dimensions(4, 3, 10, ASPECT_CORRECTION), (10, 4));
        // 7 / 10 * 10 * 0.55 = 3.85
        assert_eq!(target_dimensions(10, 7, 10, ASPECT_CORRECTION), (10, 4));
    }

    #[test]
    fn very_wide_image_keeps_one_row() {
        assert_eq!(target_dimensions(10_000, 1, 80, ASPECT_CORRECTION), (80, 1));
    }

    #[test]
    fn aspect_must_be_finite_and_positive() {
        assert_eq!(check_aspect(ASPECT_CORRECTION).unwrap(), ASPECT_CORRECTION);
        assert_eq!(check_aspect(2.5).unwrap(), 2.5);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0, -3.0] {
            assert!(
                matches!(check_aspect(bad), Err(FolioError::InvalidAspect(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn downsample_produces_target_size() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(300, 200));
        let out = downsample(&image, 60, ASPECT_CORRECTION);
        // 200 / 300 * 60 * 0.55 = 22
        assert_eq!((out.width(), out.height()), (60, 22));
    }

    proptest! {
        #[test]
        fn height_within_half_a_row(w in 1u32..4000, h in 1u32..4000, n in 1u32..300) {
            let (cols, rows) = target_dimensions(w, h, n, ASPECT_CORRECTION);
            let exact = n as f64 * h as f64 / w as f64 * ASPECT_CORRECTION;
            prop_assert_eq!(cols, n);
            prop_assert!(rows >= 1);
            prop_assert!((rows as f64 - exact).abs() <= 0.5 + 1e-9 || (exact < 0.5 && rows == 1));
        }
    }
}
