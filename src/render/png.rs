//! PNG output for composed pages.

use std::path::Path;

use image::DynamicImage;

use crate::error::{CardError, Result};

use super::PageImage;

/// File name of page `number` (1-based): `card_grid_1.png`.
pub fn page_file_name(prefix: &str, number: usize) -> String {
    format!("{}_{}.png", prefix, number)
}

/// Write a page to a PNG file.
///
/// Pages are opaque, so they are stored as RGB.
pub fn write_png(page: &PageImage, path: &Path) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(page.image.clone()).into_rgb8();
    rgb.save(path).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    Ok(())
}
