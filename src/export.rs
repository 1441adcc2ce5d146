//! Text exports for palettes and gradients.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::color::Color;
use crate::error::Error;
use crate::gradient::Gradient;
use crate::harmony::PaletteKind;
use crate::palettes::Palette;

/// Angle used for the config export of gradients that carry none.
const DEFAULT_EXPORT_ANGLE: i32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Css,
    Tailwind,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            other => Err(Error::InvalidFormat(format!(
                "unknown export format {other:?}, expected json, css or tailwind"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
        })
    }
}

#[derive(Serialize)]
struct PaletteDocument<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: PaletteKind,
    colors: &'a [Color],
}

pub fn export_palette(palette: &Palette, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => palette_json(palette),
        ExportFormat::Css => palette_css(palette),
        ExportFormat::Tailwind => palette_tailwind(palette),
    }
}

/// `{ name, type, colors }` pretty-printed with two-space indentation.
pub fn palette_json(palette: &Palette) -> String {
    let doc = PaletteDocument {
        name: &palette.name,
        kind: palette.kind,
        colors: &palette.colors,
    };
    match serde_json::to_string_pretty(&doc) {
        Ok(json) => json,
        Err(err) => {
            warn!(palette = %palette.id, error = %err, "failed to serialize palette");
            String::new()
        }
    }
}

/// A `:root` block with one 1-indexed custom property per color.
pub fn palette_css(palette: &Palette) -> String {
    let properties: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  --color-{}-{}: {};", palette.kind, i + 1, c.hex()))
        .collect();
    format!(":root {{\n{}\n}}", properties.join("\n"))
}

/// Tailwind theme extension with shades keyed 100, 200, ...
pub fn palette_tailwind(palette: &Palette) -> String {
    let shades: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("          {}: '{}',", (i + 1) * 100, c.hex()))
        .collect();
    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        '{}': {{\n{}\n        }},\n      }},\n    }},\n  }},\n}}",
        palette.kind,
        shades.join("\n")
    )
}

pub fn gradient_css(gradient: &Gradient) -> String {
    format!(
        ".gradient-{} {{\n  background: {};\n}}",
        gradient.id, gradient.css
    )
}

/// `backgroundImage` entry rebuilt from the angle and color stops.
pub fn gradient_tailwind(gradient: &Gradient) -> String {
    let stops: Vec<String> = gradient
        .colors
        .iter()
        .map(|c| format!("'{}'", c.hex()))
        .collect();
    format!(
        "// Add to tailwind.config.js\nbackgroundImage: {{\n  'gradient-{}': 'linear-gradient({}deg, {})',\n}}",
        gradient.id,
        gradient.angle.unwrap_or(DEFAULT_EXPORT_ANGLE),
        stops.join(", ")
    )
}
