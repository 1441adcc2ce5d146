//! Greedy suppression of near-identical colors.

use crate::color::Color;
use crate::quantize::Bucket;

/// Anything with a position in RGB space.
pub trait RgbPoint {
    fn channels(&self) -> [f64; 3];
}

impl RgbPoint for Bucket {
    fn channels(&self) -> [f64; 3] {
        Bucket::channels(*self)
    }
}

impl RgbPoint for Color {
    fn channels(&self) -> [f64; 3] {
        let rgb = self.rgb();
        [rgb.r as f64, rgb.g as f64, rgb.b as f64]
    }
}

/// Euclidean distance in RGB space.
pub fn color_distance<T: RgbPoint>(a: &T, b: &T) -> f64 {
    let [ar, ag, ab] = a.channels();
    let [br, bg, bb] = b.channels();
    let (dr, dg, db) = (ar - br, ag - bg, ab - bb);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Keep each color only if it is at least `threshold` away from every color
/// already kept. Input order decides who wins, so pass frequency-ranked input.
pub fn remove_duplicates<T: RgbPoint + Copy>(colors: &[T], threshold: f64) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(colors.len());
    for color in colors {
        if unique.iter().all(|kept| color_distance(color, kept) >= threshold) {
            unique.push(*color);
        }
    }
    unique
}
