//! Score and platform crops for later stages

use crate::error::{LocateError, LocateResult};
use image::RgbImage;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CroppedRegions {
    /// Rows `[h/11, h/6)`, left half of the screen
    pub score: RgbImage,
    /// Rows `[h/6, 2h/3)`, columns `[left, right)`
    pub platform: RgbImage,
}

impl CroppedRegions {
    pub fn save(&self, score_path: &Path, platform_path: &Path) -> LocateResult<()> {
        for (image, path) in [(&self.score, score_path), (&self.platform, platform_path)] {
            image.save(path).map_err(|source| LocateError::Save {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("✂️ Wrote {}x{} crop to {:?}", image.width(), image.height(), path);
        }
        Ok(())
    }
}

/// Cut the score strip and the platform area out of a screenshot
///
/// `right` of `None` or `Some(0)` means the full width.
pub fn crop_regions(image: &RgbImage, left: u32, right: Option<u32>) -> LocateResult<CroppedRegions> {
    let (width, height) = image.dimensions();
    LocateError::check_dimensions(width, height)?;

    let right = right.filter(|r| *r > 0).unwrap_or(width);
    if left >= right || right > width {
        return Err(LocateError::InvalidCrop { left, right, width });
    }

    let score_top = height / 11;
    let score = image::imageops::crop_imm(image, 0, score_top, width / 2, height / 6 - score_top)
        .to_image();

    let platform_top = height / 6;
    let platform = image::imageops::crop_imm(
        image,
        left,
        platform_top,
        right - left,
        height * 2 / 3 - platform_top,
    )
    .to_image();

    Ok(CroppedRegions { score, platform })
}
