//! Scored palettes built from the extracted colors.

use serde::Serialize;
use tracing::debug;

use crate::color::Color;
use crate::evaluate::{PaletteEvaluation, evaluate_palette};
use crate::harmony::PaletteKind;
use crate::ids::IdSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    pub colors: Vec<Color>,
    pub score: u8,
    pub reason: String,
    pub contrast_issues: Vec<String>,
}

impl Palette {
    /// Generate and score the `kind` palette for `seed`.
    pub fn generate(kind: PaletteKind, seed: &Color) -> Self {
        let colors = kind.generate(seed);
        let PaletteEvaluation {
            score,
            issues,
            reason,
        } = evaluate_palette(&colors);

        Self {
            id: kind.slug().to_string(),
            name: kind.display_name().to_string(),
            kind,
            colors,
            score,
            reason,
            contrast_issues: issues,
        }
    }

    /// Copy of this palette under a fresh `saved-<token>` id.
    pub fn snapshot(&self, ids: &mut impl IdSource) -> Self {
        Self {
            id: format!("saved-{}", ids.next_token()),
            ..self.clone()
        }
    }
}

/// Every palette kind seeded from the first color, best score first.
///
/// Equal scores keep generation order. No colors, no palettes.
pub fn generate_all_palettes(colors: &[Color]) -> Vec<Palette> {
    let Some(seed) = colors.first() else {
        return Vec::new();
    };

    let mut palettes: Vec<Palette> = PaletteKind::ALL
        .iter()
        .map(|&kind| Palette::generate(kind, seed))
        .collect();
    palettes.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(seed = %seed, best = %palettes[0].id, "generated palettes");
    palettes
}
