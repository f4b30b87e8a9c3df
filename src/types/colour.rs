//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// An RGBA colour value.
///
/// Serialises as a hex string so themes stay readable in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a colour string: hex (see [`Colour::from_hex`]) or a CSS colour name.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
            return Ok(Self::rgb(named.red, named.green, named.blue));
        }
        Self::from_hex(s).map_err(|_| CardError::Config {
            message: format!("Unknown colour: {}", s),
            help: Some("Use a CSS colour name or #RGB, #RGBA, #RRGGBB, #RRGGBBAA".to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        let digits: Vec<u8> = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<_>>()?;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::new(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to an `image` pixel.
    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba(self.to_rgba())
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Darken by a percentage of the remaining lightness, in HSL space.
    pub fn darken(self, percent: f32) -> Self {
        adjust_lightness(self, -percent.abs())
    }
}

/// Composite `src` over `dst` with straight (non-premultiplied) alpha.
///
/// An opaque `dst` stays exactly opaque whatever `src` is.
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as u32;
    match sa {
        0 => return,
        255 => {
            *dst = src;
            return;
        }
        _ => {}
    }

    // Output alpha scaled by 255 * 255
    let da = dst[3] as u32;
    let out_a = sa * 255 + da * (255 - sa);
    for c in 0..3 {
        let num = src[c] as u32 * sa * 255 + dst[c] as u32 * da * (255 - sa);
        dst[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

impl FromStr for Colour {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> CardError {
    CardError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| CardError::Config {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Adjust lightness in HSL space.
fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    use palette::{Hsl, IntoColor, Srgb};

    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    // Relative to the remaining range
    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
        colour.a,
    )
}
