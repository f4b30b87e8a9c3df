//! Card renderer - turns one record into a card-sized image.
//!
//! Layers are painted in a fixed order: background, tint, frame, title and
//! cost, type label, ability text, attack stat.

use std::sync::Arc;

use image::RgbaImage;

use crate::error::Result;
use crate::font::{Face, FontCache};
use crate::types::{CardRecord, CardStyle, Theme};

use super::background;
use super::layout::{CardLayout, Region};
use super::shapes;
use super::text;

/// How much the type chip darkens the border colour when no chip colour is set.
const CHIP_DARKEN: f32 = 35.0;

/// A rendered card.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub title: String,
    /// Source line of the record (0 when unknown).
    pub line: u64,
    pub image: RgbaImage,
}

impl CardImage {
    pub fn new(title: impl Into<String>, line: u64, image: RgbaImage) -> Self {
        Self {
            title: title.into(),
            line,
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Renders records with one theme at one card size.
pub struct CardRenderer {
    theme: Theme,
    layout: CardLayout,
    fonts: Arc<FontCache>,
}

impl CardRenderer {
    /// Create a renderer for `theme`, sized from the theme's page.
    pub fn new(theme: Theme, fonts: Arc<FontCache>) -> Result<Self> {
        theme.validate()?;
        let layout = CardLayout::new(theme.page.card_size(), &theme.layout);
        Ok(Self {
            theme,
            layout,
            fonts,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    pub fn card_size(&self) -> (u32, u32) {
        self.layout.size()
    }

    /// Render one card.
    ///
    /// Missing artwork falls back to a flat background; artwork that exists
    /// but can't be decoded is an error.
    pub fn render(&self, record: &CardRecord) -> Result<CardImage> {
        let mut canvas = self.paint_background(record)?;
        background::tint(&mut canvas, self.theme.colours.tint, self.theme.tint_alpha);
        self.paint_frame(&mut canvas);
        self.paint_title_and_cost(&mut canvas, record);
        self.paint_type(&mut canvas, record);
        self.paint_ability(&mut canvas, record);
        self.paint_attack(&mut canvas, record);

        Ok(CardImage::new(&record.title, record.line, canvas))
    }

    /// The lines the ability text wraps to.
    pub fn ability_lines(&self, ability: &str) -> Vec<String> {
        let face = self.fonts.get(self.layout.ability_px);
        text::wrap_to_width(&face, ability, self.layout.content_width)
    }

    fn paint_background(&self, record: &CardRecord) -> Result<RgbaImage> {
        let (width, height) = self.layout.size();
        let fill = self.theme.colours.background.with_alpha(255).to_pixel();
        let mut canvas = RgbaImage::from_pixel(width, height, fill);

        let Some(art) = background::load_artwork(&record.image_path)? else {
            log::debug!(
                "{}: artwork {} not found, using flat background",
                record.describe(),
                record.image_path.display()
            );
            if let Some(label) = &self.theme.missing_label {
                let face = self.fonts.get(self.layout.ability_px);
                let region = self.layout.art_region;
                text::draw_centered(
                    &mut canvas,
                    &face,
                    self.theme.colours.ability,
                    region.center_x(),
                    text::centered_y(&face, region.center_y()),
                    label,
                );
            }
            return Ok(canvas);
        };

        match self.theme.style {
            CardStyle::FullBleed => {
                let layer = background::cover(&art, (width, height));
                background::overlay(&mut canvas, &layer, 0, 0);
            }
            CardStyle::Framed => {
                let region = self.layout.art_region;
                let layer = background::contain(&art, (region.width, region.height));
                let x = region.x + (region.width - layer.width()) as i32 / 2;
                let y = region.y + (region.height - layer.height()) as i32 / 2;
                background::overlay(&mut canvas, &layer, x as i64, y as i64);
            }
        }

        Ok(canvas)
    }

    fn paint_frame(&self, canvas: &mut RgbaImage) {
        let layout = &self.layout;
        let border = self.theme.colours.border;

        shapes::stroke_rounded_rect(
            canvas,
            layout.bounds(),
            layout.corner_radius,
            layout.border_width,
            border,
        );

        let inset = layout.border_width as i32;
        shapes::horizontal_rule(
            canvas,
            inset,
            layout.width as i32 - inset,
            layout.title_band as i32,
            layout.border_width,
            border,
        );
    }

    fn paint_title_and_cost(&self, canvas: &mut RgbaImage, record: &CardRecord) {
        let layout = &self.layout;
        let colours = &self.theme.colours;

        let title_face = self.fonts.get(layout.title_px);
        text::draw_centered(
            canvas,
            &title_face,
            colours.title,
            layout.width as i32 / 2,
            text::centered_y(&title_face, layout.title_center),
            &record.title,
        );

        let cost_face = self.fonts.get(layout.cost_px);
        let cost_width = cost_face.text_width(&record.cost) as i32;
        let x = layout.width as i32 - layout.margin as i32 - cost_width;
        cost_face.draw(
            canvas,
            colours.cost,
            x,
            text::centered_y(&cost_face, layout.title_center),
            &record.cost,
        );
    }

    fn paint_type(&self, canvas: &mut RgbaImage, record: &CardRecord) {
        if record.kind.is_empty() {
            return;
        }

        let layout = &self.layout;
        let colours = &self.theme.colours;
        let face = self.fonts.get(layout.type_px);
        let top = text::centered_y(&face, layout.type_center);

        if layout.type_chip {
            let chip = colours
                .type_chip
                .unwrap_or_else(|| colours.border.darken(CHIP_DARKEN));
            let region = self.chip_region(&face, &record.kind, top);
            shapes::fill_rounded_rect(canvas, region, u32::MAX, chip);
        }

        text::draw_centered(
            canvas,
            &face,
            colours.type_label,
            layout.width as i32 / 2,
            top,
            &record.kind,
        );
    }

    /// Pill behind the type label, padded by half the font size sideways.
    fn chip_region(&self, face: &Face, kind: &str, top: i32) -> Region {
        let pad_x = self.layout.type_px as i32 / 2;
        let pad_y = (self.layout.type_px as i32 / 6).max(1);
        let width = face.text_width(kind) as i32 + pad_x * 2;
        let height = face.line_height() as i32 + pad_y * 2;

        Region::new(
            self.layout.width as i32 / 2 - width / 2,
            top - pad_y,
            width.max(1) as u32,
            height.max(1) as u32,
        )
    }

    fn paint_ability(&self, canvas: &mut RgbaImage, record: &CardRecord) {
        let layout = &self.layout;
        let face = self.fonts.get(layout.ability_px);

        for (i, line) in self.ability_lines(&record.ability).iter().enumerate() {
            text::draw_centered(
                canvas,
                &face,
                self.theme.colours.ability,
                layout.width as i32 / 2,
                layout.ability_top + i as i32 * layout.ability_spacing,
                line,
            );
        }
    }

    fn paint_attack(&self, canvas: &mut RgbaImage, record: &CardRecord) {
        let layout = &self.layout;
        let colours = &self.theme.colours;
        let face = self.fonts.get(layout.stat_px);
        let offset = (layout.stat_px as i32 / 28).max(1);

        text::draw_outlined(
            canvas,
            &face,
            colours.stat_fill,
            colours.stat_outline,
            layout.stat_x,
            layout.stat_y,
            offset,
            &record.attack_label(),
        );
    }
}
