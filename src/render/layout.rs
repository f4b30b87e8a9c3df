//! Card layout resolved to pixels.
//!
//! Every value is a [`LayoutSpec`] fraction multiplied by the card size, so
//! layout is a pure function of card size and theme.

use crate::types::LayoutSpec;

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width as i32 / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height as i32 / 2
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Pixel layout for one card size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub title_band: u32,
    pub title_center: i32,
    pub border_width: u32,
    pub corner_radius: u32,
    pub margin: u32,
    pub content_width: u32,
    pub title_px: u32,
    pub cost_px: u32,
    pub type_px: u32,
    pub ability_px: u32,
    pub stat_px: u32,
    pub type_center: i32,
    pub type_chip: bool,
    pub ability_top: i32,
    pub ability_spacing: i32,
    pub stat_x: i32,
    pub stat_y: i32,
    pub art_region: Region,
}

impl CardLayout {
    pub fn new((width, height): (u32, u32), spec: &LayoutSpec) -> Self {
        let of_w = |f: f32| (f * width as f32).round() as u32;
        let of_h = |f: f32| (f * height as f32).round() as u32;

        let margin = of_w(spec.margin);
        let content_width = width.saturating_sub(margin * 2).max(1);
        let art_top = of_h(spec.art_top);
        let art_bottom = of_h(spec.art_bottom).max(art_top + 1);

        Self {
            width,
            height,
            title_band: of_h(spec.title_band),
            title_center: of_h(spec.title_center) as i32,
            border_width: of_h(spec.border_width).max(1),
            corner_radius: of_w(spec.corner_radius),
            margin,
            content_width,
            title_px: of_h(spec.title_size).max(1),
            cost_px: of_h(spec.cost_size).max(1),
            type_px: of_h(spec.type_size).max(1),
            ability_px: of_h(spec.ability_size).max(1),
            stat_px: of_h(spec.stat_size).max(1),
            type_center: of_h(spec.type_center) as i32,
            type_chip: spec.type_chip,
            ability_top: of_h(spec.ability_top) as i32,
            ability_spacing: of_h(spec.ability_spacing).max(1) as i32,
            stat_x: of_w(spec.stat_left) as i32,
            stat_y: height as i32 - of_h(spec.stat_bottom) as i32,
            art_region: Region::new(
                margin as i32,
                art_top as i32,
                content_width,
                art_bottom - art_top,
            ),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The whole card as a region.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn test_default_layout_at_300x400() {
        let layout = CardLayout::new((300, 400), &LayoutSpec::default());
        assert_eq!(layout.title_band, 50);
        assert_eq!(layout.title_px, 24);
        assert_eq!(layout.cost_px, 28);
        assert_eq!(layout.ability_px, 16);
        assert_eq!(layout.margin, 15);
        assert_eq!(layout.content_width, 270);
        assert_eq!(layout.ability_spacing, 20);
        assert_eq!(layout.stat_y, 365);
        assert_eq!(layout.border_width, 2);
    }

    #[test]
    fn test_layout_scales_with_card_size() {
        let spec = LayoutSpec::default();
        let small = CardLayout::new((300, 400), &spec);
        let large = CardLayout::new((600, 800), &spec);
        assert_eq!(large.title_band, small.title_band * 2);
        assert_eq!(large.title_px, small.title_px * 2);
        assert_eq!(large.content_width, small.content_width * 2);
        assert_eq!(large.ability_top, small.ability_top * 2);
    }

    #[test]
    fn test_framed_art_region() {
        let layout = CardLayout::new((300, 400), &Theme::framed().layout);
        assert_eq!(layout.art_region, Region::new(15, 70, 270, 200));
        assert_eq!(layout.corner_radius, 0);
    }

    #[test]
    fn test_tiny_card_keeps_minimums() {
        let layout = CardLayout::new((3, 3), &LayoutSpec::default());
        assert!(layout.title_px >= 1);
        assert!(layout.border_width >= 1);
        assert!(layout.content_width >= 1);
        assert!(layout.art_region.height >= 1);
    }
}
