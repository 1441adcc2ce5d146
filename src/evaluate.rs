//! Palette scoring on lightness spread, pairwise contrast and saturation.

use serde::Serialize;

use crate::color::Color;
use crate::contrast::meets_aa;

const MIN_LIGHTNESS_RANGE: u8 = 30;
const POOR_CONTRAST_SHARE: f64 = 0.3;
const MODERATE_CONTRAST_SHARE: f64 = 0.5;
const LOW_SATURATION: f64 = 20.0;
const HIGH_SATURATION: f64 = 80.0;

const FALLBACK_REASON: &str = "Standard color harmony";

/// Outcome of [`evaluate_palette`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEvaluation {
    /// 0 to 100, higher is better.
    pub score: u8,
    pub issues: Vec<String>,
    pub reason: String,
}

/// Share of unordered color pairs meeting WCAG AA; 0 without any pair.
pub fn aa_pair_share(colors: &[Color]) -> f64 {
    let mut passing = 0usize;
    let mut total = 0usize;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            total += 1;
            if meets_aa(a, b) {
                passing += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        passing as f64 / total as f64
    }
}

/// Score a palette starting from 100.
///
/// Each criterion contributes either one issue (with a deduction) or one
/// positive rationale. An empty palette has no lightness spread, no pairs and
/// zero average saturation.
pub fn evaluate_palette(colors: &[Color]) -> PaletteEvaluation {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut reasons = Vec::new();

    let lightness = colors.iter().map(|c| c.hsl().l);
    let range = match (lightness.clone().max(), lightness.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    };
    if range < MIN_LIGHTNESS_RANGE {
        score -= 20;
        issues.push("Limited lightness range - may lack visual hierarchy".to_string());
    } else {
        reasons.push("Good lightness range for visual hierarchy".to_string());
    }

    let share = aa_pair_share(colors);
    if share < POOR_CONTRAST_SHARE {
        score -= 30;
        issues.push("Poor contrast - many color pairs fail WCAG AA".to_string());
    } else if share < MODERATE_CONTRAST_SHARE {
        score -= 15;
        issues.push("Moderate contrast - some pairs may be hard to read".to_string());
    } else {
        reasons.push(format!(
            "Excellent contrast ({}% of pairs meet WCAG AA)",
            (share * 100.0).round() as u32
        ));
    }

    let avg_saturation = if colors.is_empty() {
        0.0
    } else {
        colors.iter().map(|c| c.hsl().s as f64).sum::<f64>() / colors.len() as f64
    };
    if avg_saturation < LOW_SATURATION {
        score -= 10;
        issues.push("Low saturation - colors may appear dull".to_string());
    } else if avg_saturation > HIGH_SATURATION {
        score -= 10;
        issues.push("Very high saturation - may be overwhelming".to_string());
    } else {
        reasons.push("Balanced saturation levels".to_string());
    }

    let reason = if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        reasons.join(", ")
    };

    PaletteEvaluation {
        score: score.clamp(0, 100) as u8,
        issues,
        reason,
    }
}
