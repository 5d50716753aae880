//! Background classification.
//!
//! The heuristic samples a fixed 5x5 pixel block anchored at the top-right
//! corner of the image. A corner that is solid (255,255,255) marks the image
//! as shot on a white background; anything else, including images we cannot
//! decode or that are smaller than the block, counts as non-white.

use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgba};

use super::error::ClassifyError;

/// Side length of the sampled corner block.
const SAMPLE_SIZE: u32 = 5;

/// Binary background label for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    White,
    NonWhite,
}

/// Open an image and classify its background.
///
/// Decode failures and images smaller than the sampling block come back as
/// `ClassifyError`; the engine logs those and falls back to
/// `Background::NonWhite`.
pub fn classify_file(path: &Path) -> Result<Background, ClassifyError> {
    let img = image::open(path).map_err(|source| ClassifyError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    if width < SAMPLE_SIZE || height < SAMPLE_SIZE {
        return Err(ClassifyError::TooSmall {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    if corner_is_white(&img) {
        Ok(Background::White)
    } else {
        Ok(Background::NonWhite)
    }
}

/// Check the last 5 columns of the first 5 rows. RGB channels only; the
/// alpha channel is ignored. Callers must have checked that the image fits
/// the sampling block.
fn corner_is_white(img: &DynamicImage) -> bool {
    let (width, _) = img.dimensions();
    for x in width - SAMPLE_SIZE..width {
        for y in 0..SAMPLE_SIZE {
            let Rgba([r, g, b, _]) = img.get_pixel(x, y);
            if (r, g, b) != (255, 255, 255) {
                return false;
            }
        }
    }
    true
}
