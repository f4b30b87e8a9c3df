//! A font at a fixed pixel size.

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::RgbaImage;
use imageproc::drawing::text_size;

use crate::types::{blend_over, Colour};

use super::bitmap;

/// Sample used to estimate average glyph width for wrapping.
const WIDTH_SAMPLE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A sized face: either a loaded TrueType/OpenType font or the builtin bitmap font.
#[derive(Clone)]
pub enum Face {
    Vector { font: FontArc, scale: PxScale },
    /// Builtin font drawn at an integer multiple of its 6x8 cell.
    Bitmap { scale: u32 },
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Vector { scale, .. } => write!(f, "Face::Vector({}px)", scale.y),
            Face::Bitmap { scale } => write!(f, "Face::Bitmap(x{})", scale),
        }
    }
}

impl Face {
    /// Width in pixels of `text` as it will be drawn.
    pub fn text_width(&self, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }
        match self {
            Face::Vector { font, scale } => text_size(*scale, font, text).0,
            Face::Bitmap { scale } => bitmap::text_width(text, *scale),
        }
    }

    /// Height of one line of text.
    pub fn line_height(&self) -> u32 {
        match self {
            Face::Vector { font, scale } => font.as_scaled(*scale).height().ceil() as u32,
            Face::Bitmap { scale } => bitmap::CELL_HEIGHT * scale,
        }
    }

    /// Mean advance of a letter, used to turn a pixel width into a character count.
    pub fn average_char_width(&self) -> f32 {
        match self {
            Face::Vector { .. } => {
                self.text_width(WIDTH_SAMPLE) as f32 / WIDTH_SAMPLE.len() as f32
            }
            Face::Bitmap { scale } => (bitmap::CELL_WIDTH * scale) as f32,
        }
    }

    /// Draw `text` with the top of its line box at (x, y).
    pub fn draw(&self, canvas: &mut RgbaImage, colour: Colour, x: i32, y: i32, text: &str) {
        if text.is_empty() {
            return;
        }
        match self {
            Face::Vector { font, scale } => draw_vector(canvas, font, *scale, colour, x, y, text),
            Face::Bitmap { scale } => bitmap::draw_text(canvas, colour, x, y, *scale, text),
        }
    }
}

/// Lay glyphs out on an ascent baseline, the way `text_size` measures them,
/// and blend each one's coverage into the canvas.
fn draw_vector(
    canvas: &mut RgbaImage,
    font: &FontArc,
    scale: PxScale,
    colour: Colour,
    x: i32,
    y: i32,
    text: &str,
) {
    let scaled = font.as_scaled(scale);
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let mut caret = 0.0f32;
    let mut last: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        if let Some(prev) = last {
            caret += scaled.kern(id, prev);
        }
        last = Some(id);

        let bounds = outlined.px_bounds();
        let x_shift = x + bounds.min.x.round() as i32;
        let y_shift = y + bounds.min.y.round() as i32;
        outlined.draw(|gx, gy, coverage| {
            let (px, py) = (gx as i32 + x_shift, gy as i32 + y_shift);
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * colour.a as f32).round() as u8;
            blend_over(
                canvas.get_pixel_mut(px as u32, py as u32),
                colour.with_alpha(alpha).to_pixel(),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_metrics() {
        let face = Face::Bitmap { scale: 2 };
        assert_eq!(face.line_height(), 16);
        assert_eq!(face.average_char_width(), 12.0);
        assert_eq!(face.text_width("ATK"), (18 - 1) * 2);
        assert_eq!(face.text_width(""), 0);
    }

    #[test]
    fn test_draw_empty_is_noop() {
        let mut canvas = RgbaImage::new(8, 8);
        Face::Bitmap { scale: 1 }.draw(&mut canvas, Colour::WHITE, 0, 0, "");
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
