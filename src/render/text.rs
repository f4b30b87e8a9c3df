//! Text placement: centring, wrapping and outlined text.

use image::RgbaImage;

use crate::font::Face;
use crate::types::Colour;

/// Diagonal offsets stamped in the outline colour before the fill.
const OUTLINE_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Left edge that centres `text` on `center_x`.
pub fn centered_x(face: &Face, text: &str, center_x: i32) -> i32 {
    center_x - face.text_width(text) as i32 / 2
}

/// Top edge that centres one line of `face` on `center_y`.
pub fn centered_y(face: &Face, center_y: i32) -> i32 {
    center_y - face.line_height() as i32 / 2
}

/// Draw `text` horizontally centred on `center_x` with its top at `y`.
pub fn draw_centered(
    canvas: &mut RgbaImage,
    face: &Face,
    colour: Colour,
    center_x: i32,
    y: i32,
    text: &str,
) {
    let x = centered_x(face, text, center_x);
    face.draw(canvas, colour, x, y, text);
}

/// Draw `text` with a one-step outline `offset` pixels wide.
#[allow(clippy::too_many_arguments)]
pub fn draw_outlined(
    canvas: &mut RgbaImage,
    face: &Face,
    fill: Colour,
    outline: Colour,
    x: i32,
    y: i32,
    offset: i32,
    text: &str,
) {
    for (dx, dy) in OUTLINE_OFFSETS {
        face.draw(canvas, outline, x + dx * offset, y + dy * offset, text);
    }
    face.draw(canvas, fill, x, y, text);
}

/// Characters per line for `max_width`, from the face's average glyph width.
pub fn wrap_columns(face: &Face, max_width: u32) -> usize {
    let average = face.average_char_width();
    if average <= 0.0 {
        return max_width.max(1) as usize;
    }
    ((max_width as f32 / average).floor() as usize).max(1)
}

/// Greedy word wrap of `text` to lines no wider than `max_width` pixels.
///
/// A line holds at most the column count from the average glyph width and
/// must also measure within `max_width`; words that don't fit carry over to
/// the next line. Whitespace runs collapse to single spaces and words longer
/// than a line are split. Blank input gives no lines.
pub fn wrap_to_width(face: &Face, text: &str, max_width: u32) -> Vec<String> {
    let columns = wrap_columns(face, max_width);
    let fits = |line: &str| line.chars().count() <= columns && face.text_width(line) <= max_width;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let joined = format!("{} {}", current, word);
            if fits(&joined) {
                current = joined;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current.push_str(word);
            continue;
        }

        // Split at the last character that still fits. A single glyph
        // wider than the line stays on its own.
        for c in word.chars() {
            current.push(c);
            if current.chars().count() > 1 && !fits(&current) {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{default_candidates, FontSource};
    use pretty_assertions::assert_eq;

    const BITMAP: Face = Face::Bitmap { scale: 1 };

    const LONG_ABILITY: &str = "WWWW MMMM WWWW MMMM Whenever a creature you control \
                                attacks, it gets +1/+0 until end of turn. iiii llll";

    /// A real outline font if the system has one.
    fn system_face(px: u32) -> Option<Face> {
        match FontSource::resolve(&default_candidates()) {
            FontSource::Builtin => None,
            source => Some(source.face(px)),
        }
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_to_width(&BITMAP, "", 100).is_empty());
        assert!(wrap_to_width(&BITMAP, "   \n ", 100).is_empty());
    }

    #[test]
    fn test_wrap_greedy() {
        // 12 columns of 6px
        assert_eq!(
            wrap_to_width(&BITMAP, "Deal 3 damage to any target", 72),
            vec!["Deal 3", "damage to", "any target"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(
            wrap_to_width(&BITMAP, "a supercalifragilistic b", 48),
            vec!["a", "supercal", "ifragili", "stic b"]
        );
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(
            wrap_to_width(&BITMAP, "  Haste.\n\n  Trample  ", 200),
            vec!["Haste. Trample"]
        );
    }

    #[test]
    fn test_wrap_columns_from_glyph_width() {
        // 6px per builtin cell at scale 1
        assert_eq!(wrap_columns(&BITMAP, 60), 10);
        assert_eq!(wrap_columns(&Face::Bitmap { scale: 2 }, 60), 5);
        assert_eq!(wrap_columns(&BITMAP, 1), 1);
    }

    #[test]
    fn test_wrap_to_width_respects_pixel_limit() {
        let text = "When this creature enters the battlefield, draw two cards and \
                    then discard a card at random from your hand.";
        for max in [40, 90, 135, 270] {
            let lines = wrap_to_width(&BITMAP, text, max);
            assert!(lines.len() > 1);
            for line in &lines {
                assert!(BITMAP.text_width(line) <= max, "{:?} wider than {}", line, max);
            }
        }
    }

    #[test]
    fn test_wrap_outline_font_by_measured_width() {
        let Some(face) = system_face(16) else {
            return;
        };

        for max in [90, 150, 270] {
            let lines = wrap_to_width(&face, LONG_ABILITY, max);
            assert!(lines.len() > 1);
            for line in &lines {
                assert!(face.text_width(line) <= max, "{:?} wider than {}", line, max);
            }

            // No words lost or reordered
            let words: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            assert_eq!(words, LONG_ABILITY.split_whitespace().collect::<Vec<_>>());

            // Greedy: the next line's first word never fits on the line before
            let columns = wrap_columns(&face, max);
            for pair in lines.windows(2) {
                let first = pair[1].split_whitespace().next().unwrap_or_default();
                let joined = format!("{} {}", pair[0], first);
                assert!(
                    face.text_width(&joined) > max || joined.chars().count() > columns,
                    "{:?} could have taken {:?}",
                    pair[0],
                    first
                );
            }
        }
    }

    #[test]
    fn test_outline_font_ink_stays_in_content_width() {
        let Some(face) = system_face(16) else {
            return;
        };
        // 300px card with a 15px margin either side
        let mut canvas = RgbaImage::new(300, 200);
        let lines = wrap_to_width(&face, LONG_ABILITY, 270);
        for (i, line) in lines.iter().enumerate() {
            draw_centered(&mut canvas, &face, Colour::WHITE, 150, i as i32 * 20, line);
        }

        let ink: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, _, _)| x)
            .collect();
        assert!(!ink.is_empty());
        assert!(ink.iter().all(|&x| (15..285).contains(&x)), "ink outside 15..285");
    }

    #[test]
    fn test_centered_x() {
        // "AB" is 11px wide at scale 1
        assert_eq!(centered_x(&BITMAP, "AB", 50), 45);
    }

    #[test]
    fn test_draw_outlined_paints_both_colours() {
        let mut canvas = RgbaImage::new(30, 12);
        draw_outlined(&mut canvas, &BITMAP, Colour::WHITE, Colour::rgb(255, 0, 0), 2, 2, 1, "I");
        let colours: Vec<[u8; 4]> = canvas.pixels().map(|p| p.0).collect();
        assert!(colours.contains(&[255, 255, 255, 255]));
        assert!(colours.contains(&[255, 0, 0, 255]));
    }
}
