//! Rounded rectangles and rules.

use image::RgbaImage;

use crate::types::{blend_over, Colour};

use super::layout::Region;

/// Signed distance from a pixel centre to the edge of a rounded rectangle.
/// Negative inside.
fn rounded_rect_distance(px: u32, py: u32, region: Region, radius: f32) -> f32 {
    let half_w = region.width as f32 / 2.0;
    let half_h = region.height as f32 / 2.0;
    let radius = radius.min(half_w).min(half_h);

    let cx = region.x as f32 + half_w;
    let cy = region.y as f32 + half_h;
    let qx = (px as f32 + 0.5 - cx).abs() - (half_w - radius);
    let qy = (py as f32 + 0.5 - cy).abs() - (half_h - radius);

    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Visit the pixels of `region` that lie on the canvas.
fn for_each_pixel(canvas: &RgbaImage, region: Region, mut f: impl FnMut(u32, u32)) {
    let x0 = region.x.max(0) as u32;
    let y0 = region.y.max(0) as u32;
    let x1 = (region.right().max(0) as u32).min(canvas.width());
    let y1 = (region.bottom().max(0) as u32).min(canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            f(x, y);
        }
    }
}

/// Outline a rounded rectangle with a band `stroke` pixels wide inside its edge.
pub fn stroke_rounded_rect(
    canvas: &mut RgbaImage,
    region: Region,
    radius: u32,
    stroke: u32,
    colour: Colour,
) {
    let pixel = colour.to_pixel();
    let stroke = stroke as f32;
    let mut hits = Vec::new();

    for_each_pixel(canvas, region, |x, y| {
        let d = rounded_rect_distance(x, y, region, radius as f32);
        if d <= 0.0 && d >= -stroke {
            hits.push((x, y));
        }
    });

    for (x, y) in hits {
        blend_over(canvas.get_pixel_mut(x, y), pixel);
    }
}

/// Fill a rounded rectangle, blending translucent colours over the canvas.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, region: Region, radius: u32, colour: Colour) {
    let pixel = colour.to_pixel();
    let mut hits = Vec::new();

    for_each_pixel(canvas, region, |x, y| {
        if rounded_rect_distance(x, y, region, radius as f32) <= 0.0 {
            hits.push((x, y));
        }
    });

    for (x, y) in hits {
        blend_over(canvas.get_pixel_mut(x, y), pixel);
    }
}

/// Horizontal rule `thickness` pixels tall centred on `y`.
pub fn horizontal_rule(
    canvas: &mut RgbaImage,
    x0: i32,
    x1: i32,
    y: i32,
    thickness: u32,
    colour: Colour,
) {
    if x1 <= x0 || thickness == 0 {
        return;
    }
    let top = y - (thickness / 2) as i32;
    let region = Region::new(x0, top, (x1 - x0) as u32, thickness);
    fill_rounded_rect(canvas, region, 0, colour);
}
