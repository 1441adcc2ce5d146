//! Dominant-color extraction and color-theory palettes.
//!
//! The pipeline turns an RGBA8 pixel buffer into up to five dominant colors,
//! derives five harmony palettes from the first of them, scores each palette
//! for contrast and balance, and builds CSS gradients from the same colors.
//! Everything past image decoding is pure and synchronous.

use js_sys::{Array, JSON, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod color;
pub mod contrast;
pub mod dedup;
pub mod error;
pub mod evaluate;
pub mod export;
pub mod extract;
pub mod gradient;
pub mod harmony;
pub mod ids;
pub mod naming;
pub mod palettes;
pub mod quantize;

pub use color::{Color, Hsl, Rgb, parse_color_list};
pub use contrast::{best_text_color, contrast_ratio, meets_aa, meets_aaa};
pub use dedup::remove_duplicates;
pub use error::Error;
pub use evaluate::{PaletteEvaluation, evaluate_palette};
pub use export::{ExportFormat, export_palette, gradient_css, gradient_tailwind};
pub use extract::{ExtractOptions, extract_colors, extract_colors_from_bytes, load_working_image};
pub use gradient::{Gradient, GradientKind, generate_all_gradients, smooth_gradient};
pub use harmony::PaletteKind;
pub use ids::{ClockIds, IdSource, SequentialIds};
pub use palettes::{Palette, generate_all_palettes};
pub use quantize::{Bucket, quantize};

/// Everything one image yields.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Extraction {
    pub colors: Vec<Color>,
    pub palettes: Vec<Palette>,
    pub gradients: Vec<Gradient>,
}

/// Run the whole pipeline on an encoded image.
pub fn analyze_bytes(
    input: &[u8],
    options: &ExtractOptions,
    ids: &mut impl IdSource,
) -> error::Result<Extraction> {
    let colors = extract_colors_from_bytes(input, options)?;
    Ok(analyze_colors(colors, ids))
}

/// Derive palettes and gradients from colors picked or edited by hand.
///
/// The first color seeds the palettes; fewer than two colors yield no
/// gradients.
pub fn analyze_colors(colors: Vec<Color>, ids: &mut impl IdSource) -> Extraction {
    let palettes = generate_all_palettes(&colors);
    let gradients = generate_all_gradients(&colors, ids);
    Extraction {
        colors,
        palettes,
        gradients,
    }
}

fn options_with(max_colors: Option<usize>) -> ExtractOptions {
    let mut options = ExtractOptions::default();
    if let Some(n) = max_colors {
        options.max_colors = n;
    }
    options
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))?;
    JSON::parse(&text)
}

fn extraction_to_js(extraction: &Extraction) -> Result<Object, JsValue> {
    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("colors"), &to_js(&extraction.colors)?)?;
    Reflect::set(&result, &JsValue::from_str("palettes"), &to_js(&extraction.palettes)?)?;
    Reflect::set(&result, &JsValue::from_str("gradients"), &to_js(&extraction.gradients)?)?;
    Ok(result)
}

/// Extract colors, palettes and gradients from an encoded image.
///
/// Returns `{ colors: Color[], palettes: Palette[], gradients: Gradient[] }`;
/// every color, extracted or inside a palette, is `{ hex, rgb, hsl }`.
#[wasm_bindgen]
pub fn extract_palettes(input: Vec<u8>, max_colors: Option<usize>) -> Result<Object, JsValue> {
    let mut ids = ClockIds::new();
    let extraction = analyze_bytes(&input, &options_with(max_colors), &mut ids)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    extraction_to_js(&extraction)
}

/// Regenerate palettes and gradients after the user edits the color list.
///
/// Takes `#rrggbb` strings and returns the same shape as [`extract_palettes`].
#[wasm_bindgen]
pub fn palettes_from_colors(hexes: Vec<String>) -> Result<Object, JsValue> {
    let colors = hexes
        .iter()
        .map(|hex| hex.parse::<Color>())
        .collect::<error::Result<Vec<_>>>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    extraction_to_js(&analyze_colors(colors, &mut ClockIds::new()))
}

/// Export every palette of an encoded image as `json`, `css` or `tailwind`,
/// best score first.
#[wasm_bindgen]
pub fn export_palettes(input: Vec<u8>, format: String) -> Result<Array, JsValue> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e: Error| JsValue::from_str(&e.to_string()))?;
    let colors = extract_colors_from_bytes(&input, &ExtractOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let exports = Array::new();
    for palette in generate_all_palettes(&colors) {
        exports.push(&JsValue::from_str(&export_palette(&palette, format)));
    }
    Ok(exports)
}
