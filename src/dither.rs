//! Atkinson dithering onto the intensity levels of a glyph ramp.

use crate::GlyphRamp;
use image::{GrayImage, Luma};

/// Quantize every pixel to the midpoint of its ramp bucket, diffusing the
/// rounding error Atkinson-style so mid-tones survive as glyph texture.
pub fn dither_atkinson(image: &GrayImage, ramp: &GlyphRamp) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut errors: Vec<f32> = image.pixels().map(|p| p.0[0] as f32).collect();
    let mut output = GrayImage::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            let old_val = errors[idx].clamp(0.0, 255.0);
            let new_val = ramp.level(ramp.index(old_val.round() as u8));
            output.put_pixel(x, y, Luma([new_val]));

            // 1/8 of the error to each of 6 neighbours; 2/8 is dropped
            let e = (old_val - new_val as f32) / 8.0;

            if x + 1 < w {
                errors[idx + 1] += e;
            }
            if x + 2 < w {
                errors[idx + 2] += e;
            }
            if y + 1 < h {
                let row = idx + w as usize;
                if x > 0 {
                    errors[row - 1] += e;
                }
                errors[row] += e;
                if x + 1 < w {
                    errors[row + 1] += e;
                }
            }
            if y + 2 < h {
                errors[idx + 2 * w as usize] += e;
            }
        }
    }

    output
}
