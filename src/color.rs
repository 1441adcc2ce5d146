//! Canonical color value with synchronized hex, RGB and HSL views.
//!
//! RGB is the source of truth. HSL is derived once at construction and rounded
//! to whole degrees and percentages, so every transform goes back through the
//! unrounded HSL of the stored RGB channels.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Error, Result};

/// 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL rounded for display: hue in degrees `[0, 360)`, saturation and
/// lightness in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// An immutable sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    pub const BLACK: Color = Color {
        rgb: Rgb { r: 0, g: 0, b: 0 },
        hsl: Hsl { h: 0, s: 0, l: 0 },
    };

    pub const WHITE: Color = Color {
        rgb: Rgb { r: 255, g: 255, b: 255 },
        hsl: Hsl { h: 0, s: 0, l: 100 },
    };

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb = Rgb { r, g, b };
        let (h, s, l) = rgb_to_hsl(rgb);

        let s = (s * 100.0).round() as u8;
        let l = (l * 100.0).round() as u8;
        // Achromatic colors have no meaningful hue.
        let h = if s == 0 { 0 } else { (h.round() as u16) % 360 };

        Self {
            rgb,
            hsl: Hsl { h, s, l },
        }
    }

    /// Build a color from wider integers, rejecting channels outside 0..=255.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                Error::InvalidFormat(format!("{name} channel {value} is outside 0..=255"))
            })
        };
        Ok(Self::from_rgb(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Parse `#rrggbb` (either case).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(format!("expected '#' and 6 hex digits, got {hex:?}"));

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Self::from_rgb(r, g, b))
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// Rotate the hue by `degrees`, wrapping modulo 360. Saturation and
    /// lightness are kept.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(self.rgb);
        let rgb = hsl_to_rgb((h + degrees).rem_euclid(360.0), s, l);
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Replace the lightness with `fraction` (clamped to `[0, 1]`), keeping hue
    /// and saturation.
    pub fn with_lightness(&self, fraction: f64) -> Self {
        let (h, s, _) = rgb_to_hsl(self.rgb);
        let rgb = hsl_to_rgb(h, s, fraction.clamp(0.0, 1.0));
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

/// Parse a comma-separated list such as `"#1f3d5c, #d9b38c"`.
///
/// Blank entries are skipped; any malformed entry fails the whole list.
pub fn parse_color_list(list: &str) -> Result<Vec<Color>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(Color::from_hex)
        .collect()
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Color", 3)?;
        state.serialize_field("hex", &self.hex())?;
        state.serialize_field("rgb", &self.rgb)?;
        state.serialize_field("hsl", &self.hsl)?;
        state.end()
    }
}

/// Unrounded HSL: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
pub(crate) fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, l)
}

pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

    if s == 0.0 {
        let v = to_u8(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h.rem_euclid(360.0) / 360.0;

    Rgb {
        r: to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_u8(hue_to_channel(p, q, h)),
        b: to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
