//! Dominant-color extraction: quantize, rank, deduplicate.

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use tracing::debug;

use crate::color::Color;
use crate::dedup::remove_duplicates;
use crate::error::Result;
use crate::quantize::quantize;

/// Tunables for [`extract_colors`] and [`load_working_image`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Pixels with lower alpha are skipped.
    pub alpha_threshold: u8,
    /// Quantization grid spacing per channel.
    pub step: u8,
    /// Most frequent buckets kept before deduplication.
    pub bucket_limit: usize,
    /// Minimum RGB distance between two extracted colors.
    pub dedup_threshold: f64,
    pub max_colors: usize,
    /// Longest side of the working image.
    pub max_side: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            step: 10,
            bucket_limit: 20,
            dedup_threshold: 50.0,
            max_colors: 5,
            max_side: 200,
        }
    }
}

/// An RGBA8 buffer ready for extraction.
#[derive(Debug, Clone)]
pub struct WorkingImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Up to `options.max_colors` dominant colors of an RGBA8 buffer, most
/// frequent first.
pub fn extract_colors(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &ExtractOptions,
) -> Result<Vec<Color>> {
    let buckets = quantize(
        pixels,
        width,
        height,
        options.step,
        options.alpha_threshold,
        options.bucket_limit,
    )?;
    let unique = remove_duplicates(&buckets, options.dedup_threshold);

    let colors: Vec<Color> = unique
        .into_iter()
        .take(options.max_colors)
        .map(|bucket| bucket.to_color())
        .collect();

    debug!(
        width,
        height,
        buckets = buckets.len(),
        colors = colors.len(),
        "extracted colors"
    );
    Ok(colors)
}

/// Shrink `img` so its longest side is at most `max_side`, keeping the aspect
/// ratio. Smaller images are left alone.
pub fn downscale(img: &DynamicImage, max_side: u32) -> DynamicImage {
    let (w, h) = img.dimensions();
    let longest = w.max(h);
    if longest <= max_side || max_side == 0 {
        return img.clone();
    }

    let ratio = max_side as f32 / longest as f32;
    let out_w = ((w as f32) * ratio).round().max(1.0) as u32;
    let out_h = ((h as f32) * ratio).round().max(1.0) as u32;
    DynamicImage::ImageRgba8(image::imageops::resize(img, out_w, out_h, FilterType::Triangle))
}

/// Decode an encoded image and reduce it to the working resolution.
pub fn load_working_image(input: &[u8], max_side: u32) -> Result<WorkingImage> {
    let img = image::load_from_memory(input)?;
    let working = downscale(&img, max_side);
    let (width, height) = working.dimensions();
    Ok(WorkingImage {
        width,
        height,
        pixels: working.to_rgba8().into_raw(),
    })
}

/// Decode, downscale and extract in one go.
pub fn extract_colors_from_bytes(input: &[u8], options: &ExtractOptions) -> Result<Vec<Color>> {
    let working = load_working_image(input, options.max_side)?;
    extract_colors(&working.pixels, working.width, working.height, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn encode_png(img: RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn half_transparent_red_yields_one_color() {
        let mut pixels = Vec::new();
        for i in 0..16 {
            let alpha = if i % 2 == 0 { 255 } else { 0 };
            pixels.extend_from_slice(&[255, 0, 0, alpha]);
        }
        let colors = extract_colors(&pixels, 4, 4, &ExtractOptions::default()).unwrap();
        assert_eq!(colors, vec![Color::from_rgb(255, 0, 0)]);
    }

    #[test]
    fn caps_at_max_colors() {
        // Eight well-separated colors, decreasing frequency.
        let palette: [[u8; 3]; 8] = [
            [0, 0, 0],
            [255, 255, 255],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
        ];
        let mut pixels = Vec::new();
        for (i, rgb) in palette.iter().enumerate() {
            for _ in 0..(8 - i) {
                pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        let count = (pixels.len() / 4) as u32;
        let colors = extract_colors(&pixels, count, 1, &ExtractOptions::default()).unwrap();
        let hexes: Vec<String> = colors.iter().map(Color::hex).collect();
        assert_eq!(hexes, ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn near_duplicates_are_merged() {
        let mut pixels = Vec::new();
        for _ in 0..3 {
            pixels.extend_from_slice(&[200, 30, 30, 255]);
        }
        for _ in 0..2 {
            pixels.extend_from_slice(&[215, 40, 30, 255]);
        }
        pixels.extend_from_slice(&[20, 20, 180, 255]);
        let colors = extract_colors(&pixels, 6, 1, &ExtractOptions::default()).unwrap();
        assert_eq!(
            colors,
            vec![Color::from_rgb(200, 30, 30), Color::from_rgb(20, 20, 180)]
        );
    }

    #[test]
    fn downscale_keeps_aspect_ratio() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(800, 400));
        let small = downscale(&img, 200);
        assert_eq!(small.dimensions(), (200, 100));

        let tiny = DynamicImage::ImageRgba8(RgbaImage::new(50, 20));
        assert_eq!(downscale(&tiny, 200).dimensions(), (50, 20));
    }

    #[test]
    fn extracts_from_encoded_png() {
        let img = RgbaImage::from_fn(300, 150, |x, _| {
            if x < 200 {
                Rgba([30, 90, 200, 255])
            } else {
                Rgba([240, 240, 240, 255])
            }
        });
        let colors = extract_colors_from_bytes(&encode_png(img), &ExtractOptions::default()).unwrap();
        assert_eq!(colors[0], Color::from_rgb(30, 90, 200));
        assert!(colors.contains(&Color::from_rgb(240, 240, 240)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            load_working_image(b"not an image", 200),
            Err(crate::error::Error::Image(_))
        ));
    }
}
