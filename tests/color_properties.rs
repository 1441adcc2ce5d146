//! Property-based invariant tests for the color pipeline.
//!
//! Verifies:
//! 1. Hex round-trip: from_hex(hex(from_rgb(r,g,b))) reproduces the channels
//! 2. HSL ranges: hue < 360, saturation and lightness <= 100
//! 3. Hue rotation by 360 keeps the hue
//! 4. Contrast symmetry and the [1, 21] bounds
//! 5. Deduplication is idempotent and keeps the threshold between survivors
//! 6. Palette cardinality per kind
//! 7. Evaluator score stays within [0, 100]
//! 8. Quantizer output is bounded, unique and ignores transparent pixels
//! 9. Palette and gradient generation are deterministic with injected ids
//! 10. Smooth gradients reproduce their endpoints

use image_to_palette_wasm::dedup::color_distance;
use image_to_palette_wasm::{
    Bucket, Color, PaletteKind, SequentialIds, contrast_ratio, evaluate_palette,
    generate_all_gradients, generate_all_palettes, quantize, remove_duplicates, smooth_gradient,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::from_rgb(r, g, b))
}

fn arb_bucket() -> impl Strategy<Value = Bucket> {
    (0u16..=26, 0u16..=26, 0u16..=26).prop_map(|(r, g, b)| Bucket {
        r: r * 10,
        g: g * 10,
        b: b * 10,
    })
}

fn arb_rgba_pixels() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
        let len = (w * h * 4) as usize;
        (Just(w), Just(h), proptest::collection::vec(any::<u8>(), len))
    })
}

// ── Conversions ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::from_rgb(r, g, b);
        let parsed = Color::from_hex(&color.hex()).unwrap();
        prop_assert_eq!(parsed.rgb(), color.rgb());
        prop_assert_eq!(parsed.hsl(), color.hsl());
    }

    #[test]
    fn hsl_stays_in_range(color in arb_color()) {
        let hsl = color.hsl();
        prop_assert!(hsl.h < 360);
        prop_assert!(hsl.s <= 100);
        prop_assert!(hsl.l <= 100);
        if hsl.s == 0 {
            prop_assert_eq!(hsl.h, 0);
        }
    }

    #[test]
    fn full_rotation_keeps_hue(color in arb_color()) {
        let rotated = color.rotate_hue(360.0);
        prop_assert_eq!(rotated.hsl().h, color.hsl().h);
        prop_assert_eq!(rotated, color);
    }

    #[test]
    fn rotation_preserves_lightness_and_saturation(color in arb_color(), delta in -720.0f64..720.0) {
        let rotated = color.rotate_hue(delta);
        prop_assert!((rotated.hsl().l as i16 - color.hsl().l as i16).abs() <= 1);
        // Saturation drifts more for very dark or light colors after 8-bit rounding.
        if (10..=90).contains(&color.hsl().l) {
            prop_assert!((rotated.hsl().s as i16 - color.hsl().s as i16).abs() <= 2);
        }
    }
}

// ── Contrast ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn contrast_is_symmetric(a in arb_color(), b in arb_color()) {
        prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn contrast_is_bounded(a in arb_color(), b in arb_color()) {
        let ratio = contrast_ratio(&a, &b);
        prop_assert!((1.0..=21.0).contains(&ratio), "ratio {}", ratio);
        prop_assert_eq!(contrast_ratio(&a, &a), 1.0);
    }
}

#[test]
fn black_white_contrast_is_exactly_21() {
    let black = Color::from_hex("#000000").unwrap();
    let white = Color::from_hex("#ffffff").unwrap();
    assert_eq!(contrast_ratio(&black, &white), 21.0);
}

// ── Deduplication ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dedup_is_idempotent(
        buckets in proptest::collection::vec(arb_bucket(), 0..30),
        threshold in 1.0f64..120.0,
    ) {
        let once = remove_duplicates(&buckets, threshold);
        let twice = remove_duplicates(&once, threshold);
        prop_assert_eq!(&once, &twice);

        for (i, a) in once.iter().enumerate() {
            for b in &once[i + 1..] {
                prop_assert!(color_distance(a, b) >= threshold);
            }
        }
    }
}

// ── Palettes and scoring ──────────────────────────────────────────────

proptest! {
    #[test]
    fn palette_cardinality(seed in arb_color()) {
        let expected = [
            (PaletteKind::Complementary, 2),
            (PaletteKind::Analogous, 3),
            (PaletteKind::Triadic, 3),
            (PaletteKind::Monochromatic, 5),
            (PaletteKind::SplitComplementary, 3),
        ];
        for (kind, len) in expected {
            prop_assert_eq!(kind.generate(&seed).len(), len);
        }
    }

    #[test]
    fn score_is_bounded(colors in proptest::collection::vec(arb_color(), 0..8)) {
        let eval = evaluate_palette(&colors);
        prop_assert!(eval.score <= 100);
        prop_assert!(eval.issues.len() <= 3);
        prop_assert!(!eval.reason.is_empty());
    }

    #[test]
    fn palettes_sorted_and_deterministic(colors in proptest::collection::vec(arb_color(), 1..5)) {
        let first = generate_all_palettes(&colors);
        let second = generate_all_palettes(&colors);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 5);
        prop_assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn gradients_deterministic_with_injected_ids(colors in proptest::collection::vec(arb_color(), 0..5)) {
        let first = generate_all_gradients(&colors, &mut SequentialIds::default());
        let second = generate_all_gradients(&colors, &mut SequentialIds::default());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), if colors.len() < 2 { 0 } else { 7 });
    }

    #[test]
    fn smooth_gradient_endpoints(start in arb_color(), end in arb_color(), steps in 2usize..12) {
        let path = smooth_gradient(&start, &end, steps);
        prop_assert_eq!(path.len(), steps);
        prop_assert_eq!(path[0], start);
        prop_assert_eq!(path[steps - 1], end);
    }
}

// ── Quantizer ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn quantizer_output_is_bounded_and_unique((w, h, pixels) in arb_rgba_pixels()) {
        let buckets = quantize(&pixels, w, h, 10, 128, 20).unwrap();
        prop_assert!(buckets.len() <= 20);
        for (i, a) in buckets.iter().enumerate() {
            prop_assert!(a.r % 10 == 0 && a.g % 10 == 0 && a.b % 10 == 0);
            prop_assert!(a.r <= 260 && a.g <= 260 && a.b <= 260);
            prop_assert!(!buckets[i + 1..].contains(a));
        }
    }

    #[test]
    fn transparent_pixels_never_count((w, h, mut pixels) in arb_rgba_pixels()) {
        for px in pixels.chunks_exact_mut(4) {
            px[3] = px[3] % 128;
        }
        prop_assert!(quantize(&pixels, w, h, 10, 128, 20).unwrap().is_empty());
    }
}

#[test]
fn half_transparent_red_buffer_has_one_bucket() {
    let pixels: Vec<u8> = (0..8)
        .flat_map(|i| [255, 0, 0, if i < 4 { 255 } else { 0 }])
        .collect();
    let buckets = quantize(&pixels, 4, 2, 10, 128, 20).unwrap();
    assert_eq!(buckets, vec![Bucket { r: 260, g: 0, b: 0 }]);
    assert_eq!(buckets[0].to_color().hex(), "#ff0000");
}

#[test]
fn gray_monochromatic_ladder() {
    let gray = Color::from_hex("#808080").unwrap();
    let palette = PaletteKind::Monochromatic.generate(&gray);
    let lightness: Vec<u8> = palette.iter().map(|c| c.hsl().l).collect();
    assert_eq!(lightness, [20, 40, 50, 70, 90]);
    assert!(palette.iter().all(|c| c.hsl().h == 0 && c.hsl().s == 0));
}

#[test]
fn empty_seed_list_yields_no_palettes() {
    assert!(generate_all_palettes(&[]).is_empty());
}
