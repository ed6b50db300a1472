/// Localization data types
use serde::Serialize;

/// A single edge pixel in full-image coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelPos {
    pub row: u32,
    pub col: u32,
}

impl PixelPos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Reference point of a detected feature
///
/// A platform anchor with a zero row or zero column means "not found".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub row: u32,
    pub col: u32,
}

impl Anchor {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this anchor is a real coordinate rather than the zero sentinel
    pub fn is_found(&self) -> bool {
        self.row != 0 && self.col != 0
    }
}

/// Best template match, mapped back to original screenshot coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoundingBox {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
    /// Screenshot resize factor the match was found at
    pub scale: f64,
    /// Normalized correlation score (higher is better)
    pub score: f32,
}

impl BoundingBox {
    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.left == 0 && self.bottom == 0 && self.right == 0
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Three 8-bit channel values of one screenshot pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorSample(pub [u8; 3]);

impl ColorSample {
    /// Every channel within `tolerance` of `other` (inclusive)
    pub fn is_near(&self, other: &ColorSample, tolerance: u8) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff(*b) <= tolerance)
    }
}

impl From<image::Rgb<u8>> for ColorSample {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}

/// Horizontal run found by the band scan: row, leftmost column and width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Band {
    pub row: u32,
    pub left: u32,
    pub width: u32,
}

impl Band {
    /// Midpoint of the band as a platform anchor
    pub fn center(&self) -> Anchor {
        Anchor::new(self.row, self.left + (self.width + 1) / 2)
    }
}
