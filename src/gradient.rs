//! CSS gradient descriptors and Lab interpolation between two colors.

use palette::{FromColor, IntoColor, Lab, Mix, Srgb};
use serde::Serialize;
use tracing::debug;

use crate::color::Color;
use crate::ids::IdSource;

/// Angles of the linear gradients produced by [`generate_all_gradients`].
pub const LINEAR_ANGLES: [i32; 5] = [0, 45, 90, 135, 180];

/// Number of interpolated stops in the two-color smooth gradient.
pub const SMOOTH_STEPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub colors: Vec<Color>,
    pub css: String,
    /// Degrees; only set for linear gradients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<i32>,
}

fn color_stops(colors: &[Color]) -> String {
    colors.iter().map(Color::hex).collect::<Vec<_>>().join(", ")
}

pub fn linear_gradient(colors: &[Color], angle: i32, ids: &mut impl IdSource) -> Gradient {
    Gradient {
        id: format!("linear-{angle}-{}", ids.next_token()),
        name: format!("Linear Gradient ({angle}°)"),
        kind: GradientKind::Linear,
        colors: colors.to_vec(),
        css: format!("linear-gradient({angle}deg, {})", color_stops(colors)),
        angle: Some(angle),
    }
}

pub fn radial_gradient(colors: &[Color], ids: &mut impl IdSource) -> Gradient {
    Gradient {
        id: format!("radial-{}", ids.next_token()),
        name: "Radial Gradient".to_string(),
        kind: GradientKind::Radial,
        colors: colors.to_vec(),
        css: format!("radial-gradient(circle, {})", color_stops(colors)),
        angle: None,
    }
}

fn to_lab(color: &Color) -> Lab {
    let rgb = color.rgb();
    let srgb: Srgb<f32> = Srgb::<u8>::new(rgb.r, rgb.g, rgb.b).into_format();
    srgb.into_color()
}

fn from_lab(lab: Lab) -> Color {
    let srgb: Srgb<f32> = Srgb::from_color(lab);
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_rgb(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
}

/// `steps` colors from `start` to `end`, evenly spaced in CIE Lab.
///
/// The first and last entries are exactly `start` and `end`.
pub fn smooth_gradient(start: &Color, end: &Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![*start],
        _ => {}
    }

    let (from, to) = (to_lab(start), to_lab(end));
    let last = steps - 1;
    (0..steps)
        .map(|i| match i {
            0 => *start,
            i if i == last => *end,
            i => from_lab(from.mix(to, i as f32 / last as f32)),
        })
        .collect()
}

/// Five linear gradients, one radial gradient and a smooth two-color linear
/// gradient, in that order. Empty with fewer than two colors.
pub fn generate_all_gradients(colors: &[Color], ids: &mut impl IdSource) -> Vec<Gradient> {
    if colors.len() < 2 {
        return Vec::new();
    }

    let mut gradients: Vec<Gradient> = LINEAR_ANGLES
        .iter()
        .map(|&angle| linear_gradient(colors, angle, ids))
        .collect();
    gradients.push(radial_gradient(colors, ids));

    let smooth = smooth_gradient(&colors[0], &colors[1], SMOOTH_STEPS);
    gradients.push(linear_gradient(&smooth, 90, ids));

    debug!(count = gradients.len(), "generated gradients");
    gradients
}
