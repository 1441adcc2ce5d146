//! WCAG 2.0 contrast math.

use crate::color::Color;

/// Minimum ratio for AA normal text.
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for AAA normal text.
pub const AAA_RATIO: f64 = 7.0;

#[inline(always)]
fn linearize(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: &Color) -> f64 {
    let rgb = color.rgb();
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between 1 and 21, independent of argument order.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_aa(a: &Color, b: &Color) -> bool {
    contrast_ratio(a, b) >= AA_RATIO
}

pub fn meets_aaa(a: &Color, b: &Color) -> bool {
    contrast_ratio(a, b) >= AAA_RATIO
}

/// White or black, whichever reads better on `background`.
pub fn best_text_color(background: &Color) -> Color {
    if contrast_ratio(background, &Color::WHITE) > contrast_ratio(background, &Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
