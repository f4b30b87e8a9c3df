//! Artwork loading, cover-crop and tint.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::error::{CardError, Result};
use crate::types::{blend_over, Colour};

/// Decode the artwork at `path`.
///
/// A missing file is not an error (`Ok(None)`); a file that exists but
/// can't be decoded is.
pub fn load_artwork(path: &Path) -> Result<Option<DynamicImage>> {
    if !path.exists() {
        return Ok(None);
    }
    image::open(path)
        .map(Some)
        .map_err(|e| CardError::Artwork {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// The centred crop of a `src` image that has the aspect ratio of `dst`.
///
/// Returns `(x, y, width, height)` in source pixels. Only the excess of the
/// wider dimension is removed, half from each side.
pub fn cover_crop_rect(src: (u32, u32), dst: (u32, u32)) -> (u32, u32, u32, u32) {
    let (sw, sh) = (src.0 as u64, src.1 as u64);
    let (dw, dh) = (dst.0.max(1) as u64, dst.1.max(1) as u64);

    if sw * dh > dw * sh {
        // Source is wider: trim left and right
        let cw = ((sh * dw + dh / 2) / dh).clamp(1, sw);
        let x = (sw - cw) / 2;
        (x as u32, 0, cw as u32, sh as u32)
    } else {
        // Source is taller (or equal): trim top and bottom
        let ch = ((sw * dh + dw / 2) / dw).clamp(1, sh);
        let y = (sh - ch) / 2;
        (0, y as u32, sw as u32, ch as u32)
    }
}

/// Largest size within `max` with the aspect ratio of `src`. Never enlarges.
pub fn contain_size(src: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (src.0 as u64, src.1 as u64);
    let (mw, mh) = (max.0 as u64, max.1 as u64);

    if sw <= mw && sh <= mh {
        return src;
    }

    if sw * mh > sh * mw {
        (mw as u32, (sh * mw / sw).max(1) as u32)
    } else {
        ((sw * mh / sh).max(1) as u32, mh as u32)
    }
}

/// Cover-crop `art` to the aspect of `size`, then resample to exactly `size`.
pub fn cover(art: &DynamicImage, size: (u32, u32)) -> RgbaImage {
    let (x, y, w, h) = cover_crop_rect((art.width(), art.height()), size);
    art.crop_imm(x, y, w, h)
        .resize_exact(size.0, size.1, FilterType::Lanczos3)
        .to_rgba8()
}

/// Shrink `art` to fit within `max`, keeping its aspect ratio.
pub fn contain(art: &DynamicImage, max: (u32, u32)) -> RgbaImage {
    let (w, h) = contain_size((art.width(), art.height()), max);
    if (w, h) == (art.width(), art.height()) {
        return art.to_rgba8();
    }
    art.resize_exact(w, h, FilterType::Lanczos3).to_rgba8()
}

/// Composite a solid `colour` layer at `alpha` (0.0 to 1.0) over the whole canvas.
pub fn tint(canvas: &mut RgbaImage, colour: Colour, alpha: f32) {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    if alpha == 0 {
        return;
    }
    let pixel = colour.with_alpha(alpha).to_pixel();
    for dst in canvas.pixels_mut() {
        blend_over(dst, pixel);
    }
}

/// Composite `layer` over `canvas` with its top-left corner at (x, y).
///
/// Parts of the layer outside the canvas are dropped. An opaque canvas
/// stays opaque.
pub fn overlay(canvas: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64) {
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);
    for (lx, ly, src) in layer.enumerate_pixels() {
        let (cx, cy) = (x + lx as i64, y + ly as i64);
        if cx < 0 || cy < 0 || cx >= width || cy >= height {
            continue;
        }
        blend_over(canvas.get_pixel_mut(cx as u32, cy as u32), *src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_cover_crop_wide_source() {
        // 1000x400 into 3:4 -> crop width 300, centred
        assert_eq!(cover_crop_rect((1000, 400), (300, 400)), (350, 0, 300, 400));
    }

    #[test]
    fn test_cover_crop_tall_source() {
        // 300x1000 into 3:4 -> crop height 400, centred
        assert_eq!(cover_crop_rect((300, 1000), (300, 400)), (0, 300, 300, 400));
    }

    #[test]
    fn test_cover_crop_same_aspect_is_identity() {
        assert_eq!(cover_crop_rect((600, 800), (300, 400)), (0, 0, 600, 800));
    }

    #[test]
    fn test_cover_crop_preserves_aspect_for_many_sources() {
        let dst = (300u32, 400u32);
        for src in [(1, 1), (7, 3), (3, 7), (1920, 1080), (1080, 1920), (512, 512), (4000, 10)] {
            let (x, y, w, h) = cover_crop_rect(src, dst);
            assert!(x + w <= src.0 && y + h <= src.1, "crop outside source for {:?}", src);
            // Aspect within one source pixel of rounding
            let lhs = w as i64 * dst.1 as i64;
            let rhs = h as i64 * dst.0 as i64;
            assert!(
                (lhs - rhs).abs() <= dst.0.max(dst.1) as i64,
                "aspect drift for {:?}: {}x{}",
                src,
                w,
                h
            );
            // Centred: equal margins up to one pixel
            let (mx, my) = (src.0 - w, src.1 - h);
            assert!(x == mx / 2 && y == my / 2);
            // Only one dimension is cropped
            assert!(w == src.0 || h == src.1);
        }
    }

    #[test]
    fn test_cover_fills_target_exactly() {
        let art = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 10, Rgba([10, 200, 30, 255])));
        let out = cover(&art, (30, 40));
        assert_eq!(out.dimensions(), (30, 40));
        // No letterboxing: every pixel comes from the artwork
        assert!(out.pixels().all(|p| p.0[3] >= 250 && p.0[1] > 150));
    }

    #[test]
    fn test_contain_size_never_enlarges() {
        assert_eq!(contain_size((100, 50), (270, 200)), (100, 50));
        assert_eq!(contain_size((540, 200), (270, 200)), (270, 100));
        assert_eq!(contain_size((100, 400), (270, 200)), (50, 200));
    }

    #[test]
    fn test_tint_blends_half_way() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        tint(&mut canvas, Colour::BLACK, 0.5);
        let p = canvas.get_pixel(0, 0).0;
        assert!(p[0] >= 120 && p[0] <= 135, "got {:?}", p);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn test_tint_keeps_flat_background_opaque() {
        let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([13, 27, 42, 255]));
        tint(&mut canvas, Colour::rgb(13, 27, 42), 0.5);
        assert!(canvas.pixels().all(|p| p.0 == [13, 27, 42, 255]));
    }

    #[test]
    fn test_overlay_translucent_layer_keeps_canvas_opaque() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 100]));
        overlay(&mut canvas, &layer, 2, -1);

        assert!(canvas.pixels().all(|p| p[3] == 255));
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(3, 1).0, [100, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(3, 2).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_tint_zero_alpha_is_noop() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        tint(&mut canvas, Colour::BLACK, 0.0);
        assert_eq!(canvas.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_load_artwork_missing_is_none() {
        let dir = tempdir().unwrap();
        assert!(load_artwork(&dir.path().join("nope.png")).unwrap().is_none());
    }

    #[test]
    fn test_load_artwork_corrupt_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_artwork(&path), Err(CardError::Artwork { .. })));
    }
}
