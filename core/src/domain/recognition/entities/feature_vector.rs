use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of trailing characters of the image encoding that are folded.
pub const FEATURE_WINDOW: usize = 50;

/// Synthetic visual indicators derived from an image encoding, each in `0..=99`.
///
/// The values are a deterministic fold over the encoding's trailing characters
/// and carry no real visual meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub struct FeatureVector {
    pub color: u8,
    pub shape: u8,
    pub texture: u8,
}

impl FeatureVector {
    pub fn new(color: u8, shape: u8, texture: u8) -> Self {
        Self {
            color,
            shape,
            texture,
        }
    }

    /// Folds the last [`FEATURE_WINDOW`] characters of `encoding`.
    ///
    /// Shorter inputs, the empty string included, are folded whole.
    pub fn extract(encoding: &str) -> Self {
        let char_count = encoding.chars().count();
        let window = encoding
            .chars()
            .skip(char_count.saturating_sub(FEATURE_WINDOW));

        let (mut color, mut shape, mut texture) = (0u64, 0u64, 0u64);
        for (i, c) in window.enumerate() {
            let code = u64::from(u32::from(c));
            let i = i as u64;
            color += code;
            shape += i * code;
            texture += (i % 3) * code;
        }

        Self {
            color: (color % 100) as u8,
            shape: (shape % 100) as u8,
            texture: (texture % 100) as u8,
        }
    }
}
