use thiserror::Error;

/// Errors raised by the color pipeline.
///
/// Palette and gradient generation never fail: too few input colors yields an
/// empty result and achromatic seeds simply produce grayscale variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed hex string, channel outside 0..=255, or a pixel buffer whose
    /// length does not match its dimensions.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("unable to decode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
