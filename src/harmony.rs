//! Color-theory strategies that derive a palette from one seed color.

use std::fmt;

use serde::Serialize;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
    SplitComplementary,
}

impl PaletteKind {
    /// Every strategy, in the order palettes are generated.
    pub const ALL: [PaletteKind; 5] = [
        PaletteKind::Complementary,
        PaletteKind::Analogous,
        PaletteKind::Triadic,
        PaletteKind::Monochromatic,
        PaletteKind::SplitComplementary,
    ];

    /// Stable identifier, also used in CSS property names.
    pub fn slug(self) -> &'static str {
        match self {
            PaletteKind::Complementary => "complementary",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::SplitComplementary => "split-complementary",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PaletteKind::Complementary => "Complementary",
            PaletteKind::Analogous => "Analogous",
            PaletteKind::Triadic => "Triadic",
            PaletteKind::Monochromatic => "Monochromatic",
            PaletteKind::SplitComplementary => "Split Complementary",
        }
    }

    pub fn generate(self, seed: &Color) -> Vec<Color> {
        match self {
            PaletteKind::Complementary => complementary(seed),
            PaletteKind::Analogous => analogous(seed),
            PaletteKind::Triadic => triadic(seed),
            PaletteKind::Monochromatic => monochromatic(seed),
            PaletteKind::SplitComplementary => split_complementary(seed),
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Seed and its opposite on the hue wheel.
pub fn complementary(seed: &Color) -> Vec<Color> {
    vec![*seed, seed.rotate_hue(180.0)]
}

/// Seed flanked by its 30° neighbours.
pub fn analogous(seed: &Color) -> Vec<Color> {
    vec![seed.rotate_hue(-30.0), *seed, seed.rotate_hue(30.0)]
}

pub fn triadic(seed: &Color) -> Vec<Color> {
    vec![*seed, seed.rotate_hue(120.0), seed.rotate_hue(240.0)]
}

/// Four lightness steps around the seed, which keeps its own lightness in the
/// middle slot.
pub fn monochromatic(seed: &Color) -> Vec<Color> {
    vec![
        seed.with_lightness(0.2),
        seed.with_lightness(0.4),
        *seed,
        seed.with_lightness(0.7),
        seed.with_lightness(0.9),
    ]
}

pub fn split_complementary(seed: &Color) -> Vec<Color> {
    vec![*seed, seed.rotate_hue(150.0), seed.rotate_hue(210.0)]
}
