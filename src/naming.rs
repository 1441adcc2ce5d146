//! Human-readable color names from HSL.

use crate::color::Color;

/// Below this saturation a color is named as a gray.
const GRAY_SATURATION: u8 = 10;

/// Half-open hue ranges in degrees.
const HUE_NAMES: [(u16, u16, &str); 8] = [
    (0, 15, "Red"),
    (15, 45, "Orange"),
    (45, 70, "Yellow"),
    (70, 150, "Green"),
    (150, 200, "Cyan"),
    (200, 260, "Blue"),
    (260, 320, "Purple"),
    (320, 360, "Pink"),
];

fn gray_name(lightness: u8) -> &'static str {
    match lightness {
        0..20 => "Black",
        20..40 => "Dark Gray",
        40..60 => "Gray",
        60..80 => "Light Gray",
        _ => "White",
    }
}

fn is_gray(color: &Color) -> bool {
    color.hsl().s < GRAY_SATURATION
}

/// Base name: a hue family, or a gray level for near-achromatic colors.
pub fn color_name(color: &Color) -> &'static str {
    let hsl = color.hsl();
    if is_gray(color) {
        return gray_name(hsl.l);
    }
    HUE_NAMES
        .iter()
        .find(|(min, max, _)| (*min..*max).contains(&hsl.h))
        .map(|(_, _, name)| *name)
        .unwrap_or("Red")
}

/// Base name prefixed with lightness and saturation modifiers, e.g.
/// "Very Dark Blue" or "Vivid Orange". Grays are returned unchanged.
pub fn descriptive_color_name(color: &Color) -> String {
    let base = color_name(color);
    if is_gray(color) {
        return base.to_string();
    }

    let hsl = color.hsl();
    let mut modifiers: Vec<&str> = Vec::new();

    match hsl.l {
        0..20 => modifiers.push("Very Dark"),
        20..40 => modifiers.push("Dark"),
        86.. => modifiers.push("Very Light"),
        71..=85 => modifiers.push("Light"),
        _ => {}
    }

    if (20..=70).contains(&hsl.l) {
        if hsl.s < 20 {
            modifiers.push("Muted");
        } else if hsl.s > 80 {
            modifiers.push("Vivid");
        }
    }

    if modifiers.is_empty() {
        base.to_string()
    } else {
        format!("{} {base}", modifiers.join(" "))
    }
}
