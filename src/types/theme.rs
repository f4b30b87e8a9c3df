//! Card themes: colours, layout fractions and rendering style.
//!
//! A theme is an immutable bundle handed to the renderer and composer at
//! construction. Every layout quantity is a fraction of the card's width or
//! height so the same theme renders at any page resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

use super::{Colour, PageSize};

/// How the artwork fills the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStyle {
    /// Artwork is cover-cropped to fill the whole card behind the text.
    #[default]
    FullBleed,
    /// Artwork is shrunk to fit a region between the title band and the
    /// ability text, on a flat background.
    Framed,
}

/// Theme colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColours {
    pub background: Colour,
    pub border: Colour,
    pub title: Colour,
    pub cost: Colour,
    #[serde(rename = "type")]
    pub type_label: Colour,
    /// Chip behind the type label. Derived from `border` when unset.
    pub type_chip: Option<Colour>,
    pub ability: Colour,
    pub stat_fill: Colour,
    pub stat_outline: Colour,
    pub tint: Colour,
    pub grid_background: Colour,
}

impl Default for ThemeColours {
    fn default() -> Self {
        Self {
            background: Colour::rgb(0x0d, 0x1b, 0x2a),
            border: Colour::rgb(0x77, 0x8d, 0xa9),
            title: Colour::WHITE,
            cost: Colour::rgb(0xe0, 0xe1, 0xdd),
            type_label: Colour::rgb(0xe0, 0xe1, 0xdd),
            type_chip: None,
            ability: Colour::WHITE,
            stat_fill: Colour::rgb(0x77, 0x8d, 0xa9),
            stat_outline: Colour::BLACK,
            tint: Colour::rgb(0x0d, 0x1b, 0x2a),
            grid_background: Colour::WHITE,
        }
    }
}

/// Layout fractions. `*_size` and vertical positions are fractions of card
/// height; horizontal insets are fractions of card width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSpec {
    /// Height of the title band; the divider sits at its bottom edge.
    pub title_band: f32,
    /// Vertical centre of the title and cost.
    pub title_center: f32,
    pub border_width: f32,
    /// Frame corner radius (fraction of width). 0 gives square corners.
    pub corner_radius: f32,
    /// Side margin; ability text wraps to `1 - 2 * margin` of the width.
    pub margin: f32,
    pub title_size: f32,
    pub cost_size: f32,
    pub type_size: f32,
    pub ability_size: f32,
    pub stat_size: f32,
    /// Vertical centre of the type label.
    pub type_center: f32,
    /// Draw the type label on a filled rounded chip.
    pub type_chip: bool,
    /// Top of the first ability line.
    pub ability_top: f32,
    /// Distance between ability line tops.
    pub ability_spacing: f32,
    /// Left inset of the attack stat (fraction of width).
    pub stat_left: f32,
    /// Distance from the bottom edge to the top of the attack stat.
    pub stat_bottom: f32,
    /// Artwork region for the framed style and the missing-artwork label.
    pub art_top: f32,
    pub art_bottom: f32,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            title_band: 0.125,
            title_center: 0.0625,
            border_width: 0.005,
            corner_radius: 0.04,
            margin: 0.05,
            title_size: 0.06,
            cost_size: 0.07,
            type_size: 0.045,
            ability_size: 0.04,
            stat_size: 0.07,
            type_center: 0.6,
            type_chip: true,
            ability_top: 0.66,
            ability_spacing: 0.05,
            stat_left: 0.035,
            stat_bottom: 0.0875,
            art_top: 0.125,
            art_bottom: 0.6,
        }
    }
}

impl LayoutSpec {
    fn fractions(&self) -> [(&'static str, f32); 18] {
        [
            ("title_band", self.title_band),
            ("title_center", self.title_center),
            ("border_width", self.border_width),
            ("corner_radius", self.corner_radius),
            ("margin", self.margin),
            ("title_size", self.title_size),
            ("cost_size", self.cost_size),
            ("type_size", self.type_size),
            ("ability_size", self.ability_size),
            ("stat_size", self.stat_size),
            ("type_center", self.type_center),
            ("ability_top", self.ability_top),
            ("ability_spacing", self.ability_spacing),
            ("stat_left", self.stat_left),
            ("stat_bottom", self.stat_bottom),
            ("art_top", self.art_top),
            ("art_bottom", self.art_bottom),
            ("margin * 2", self.margin * 2.0),
        ]
    }
}

/// A named rendering theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Empty in theme files that omit it; `Theme::load` names it after the file.
    #[serde(default)]
    pub name: String,
    pub style: CardStyle,
    /// Opacity of the tint layer over the background, 0.0 to 1.0. Both
    /// builtin themes tint; 0.0 in a theme file turns the layer off.
    pub tint_alpha: f32,
    /// Label drawn in the artwork region when the artwork file is missing.
    pub missing_label: Option<String>,
    pub page: PageSize,
    pub colours: ThemeColours,
    pub layout: LayoutSpec,
}

impl Default for Theme {
    fn default() -> Self {
        Self::full_bleed()
    }
}

impl Theme {
    /// Names of the builtin themes, default first.
    pub const BUILTIN: [&'static str; 2] = ["full-bleed", "framed"];

    /// Photographic style: cover-cropped artwork under a 50% tint.
    pub fn full_bleed() -> Self {
        Self {
            name: "full-bleed".to_string(),
            style: CardStyle::FullBleed,
            tint_alpha: 0.5,
            missing_label: None,
            page: PageSize::default(),
            colours: ThemeColours::default(),
            layout: LayoutSpec::default(),
        }
    }

    /// Flat style: solid background, artwork thumbnail, square frame.
    pub fn framed() -> Self {
        Self {
            name: "framed".to_string(),
            style: CardStyle::Framed,
            tint_alpha: 0.5,
            missing_label: Some("Image not found".to_string()),
            page: PageSize::default(),
            colours: ThemeColours::default(),
            layout: LayoutSpec {
                title_band: 0.1625,
                title_center: 0.055,
                corner_radius: 0.0,
                cost_size: 0.09,
                type_center: 0.1225,
                type_chip: false,
                ability_top: 0.7,
                stat_left: 0.033,
                art_top: 0.175,
                art_bottom: 0.675,
                ..LayoutSpec::default()
            },
        }
    }

    /// Look up a builtin theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "full-bleed" => Some(Self::full_bleed()),
            "framed" => Some(Self::framed()),
            _ => None,
        }
    }

    /// Load a theme from a YAML file. Unset fields take full-bleed defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme: {}", e),
        })?;

        let mut theme = Self::parse(&content)?;
        if theme.name.is_empty() {
            theme.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(theme)
    }

    /// Parse a theme from a YAML string and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        let theme: Self = serde_yaml::from_str(content).map_err(|e| CardError::Config {
            message: format!("Invalid theme: {}", e),
            help: Some(
                "Check the theme YAML; `cardpress init` writes a complete example".to_string(),
            ),
        })?;
        theme.validate()?;
        Ok(theme)
    }

    /// Serialise to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| CardError::Config {
            message: format!("Failed to serialise theme: {}", e),
            help: None,
        })
    }

    /// Same theme on a different page size.
    pub fn with_page(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }

    /// Check that every fraction lies in 0..=1 and the page can hold a grid.
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;

        if !(0.0..=1.0).contains(&self.tint_alpha) {
            return Err(CardError::Config {
                message: format!("tint_alpha must be between 0 and 1, got {}", self.tint_alpha),
                help: None,
            });
        }

        for (field, value) in self.layout.fractions() {
            if !(0.0..=1.0).contains(&value) {
                return Err(CardError::Config {
                    message: format!("layout.{} must be between 0 and 1, got {}", field, value),
                    help: Some("Layout values are fractions of the card size".to_string()),
                });
            }
        }

        if self.layout.art_top >= self.layout.art_bottom {
            return Err(CardError::Config {
                message: "layout.art_top must be above layout.art_bottom".to_string(),
                help: None,
            });
        }

        Ok(())
    }
}
