//! Frequency quantization of an RGBA8 pixel buffer.

use std::collections::HashMap;

use tracing::trace;

use crate::color::Color;
use crate::error::{Error, Result};

/// A quantized RGB grid cell.
///
/// Channels are `round(c / step) * step` and are kept unclamped, so with the
/// default step of 10 a channel of 255 lands in the 260 bucket. Use
/// [`Bucket::to_color`] to get a displayable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Bucket {
    /// Nearest displayable color; channels above 255 are clamped.
    pub fn to_color(self) -> Color {
        let clamp = |c: u16| c.min(u8::MAX as u16) as u8;
        Color::from_rgb(clamp(self.r), clamp(self.g), clamp(self.b))
    }

    pub(crate) fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

/// Round `c` to the nearest multiple of `step`, halves rounding up.
#[inline(always)]
fn quantize_channel(c: u8, step: u16) -> u16 {
    (c as u16 + step / 2) / step * step
}

/// Rank the quantized colors of `pixels` by frequency.
///
/// `pixels` is interleaved RGBA8 of exactly `width * height` pixels. Pixels
/// whose alpha is below `alpha_threshold` are ignored. At most `limit` buckets
/// are returned, most frequent first; equal counts keep first-seen order.
pub fn quantize(
    pixels: &[u8],
    width: u32,
    height: u32,
    step: u8,
    alpha_threshold: u8,
    limit: usize,
) -> Result<Vec<Bucket>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            Error::InvalidFormat(format!("{width}x{height} RGBA buffer does not fit in memory"))
        })?;
    if pixels.len() != expected {
        return Err(Error::InvalidFormat(format!(
            "pixel buffer holds {} bytes, expected {expected} for {width}x{height} RGBA",
            pixels.len()
        )));
    }
    if step == 0 {
        return Err(Error::InvalidFormat("quantization step must be non-zero".into()));
    }
    let step = step as u16;

    // Hash lookup into an insertion-ordered list keeps tie-breaking stable.
    let mut index: HashMap<Bucket, usize> = HashMap::new();
    let mut counts: Vec<(Bucket, u32)> = Vec::new();

    for chunk in pixels.chunks_exact(4) {
        if chunk[3] < alpha_threshold {
            continue;
        }
        let bucket = Bucket {
            r: quantize_channel(chunk[0], step),
            g: quantize_channel(chunk[1], step),
            b: quantize_channel(chunk[2], step),
        };
        match index.get(&bucket) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(bucket, counts.len());
                counts.push((bucket, 1));
            }
        }
    }

    trace!(distinct = counts.len(), "quantized pixel buffer");

    // Stable sort: equal counts stay in insertion order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts
        .into_iter()
        .take(limit)
        .map(|(bucket, _)| bucket)
        .collect())
}
