//! Avatar anchor from the best template match

use super::matcher::TemplateLocator;
use super::types::{Anchor, BoundingBox};
use crate::error::{LocateError, LocateResult};
use image::{GrayImage, RgbImage};
use serde::Serialize;

/// Where the avatar was found
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AvatarLocation {
    /// Contact point near the bottom of the sprite, used for aiming
    pub anchor: Anchor,
    /// `(row, col)` of the box's top-left corner
    pub top_left: (u32, u32),
    /// `(row, col)` of the box's bottom-right corner
    pub bottom_right: (u32, u32),
    pub bbox: BoundingBox,
}

impl AvatarLocation {
    /// Anchor row sits 13/14 of the way down the box, column at its midpoint
    pub fn from_bounding_box(bbox: BoundingBox) -> Self {
        let row = ((bbox.top as f64 + 13.0 * bbox.bottom as f64) / 14.0).round() as u32;
        let col = (bbox.left + bbox.right) / 2;
        Self {
            anchor: Anchor::new(row, col),
            top_left: (bbox.top, bbox.left),
            bottom_right: (bbox.bottom, bbox.right),
            bbox,
        }
    }
}

/// Locate the avatar in a color screenshot
///
/// `Ok(None)` means the match collapsed to the top of the frame, which happens
/// when the screenshot is not showing the game.
pub fn locate_avatar(
    image: &RgbImage,
    template: &GrayImage,
    locator: &TemplateLocator,
) -> LocateResult<Option<AvatarLocation>> {
    LocateError::check_dimensions(image.width(), image.height())?;

    let gray = image::imageops::grayscale(image);
    let bbox = locator.multiscale_match(&gray, template)?;
    let location = AvatarLocation::from_bounding_box(bbox);

    if location.anchor.row == 0 {
        log::warn!("Please confirm whether the screen is the game interface.");
        return Ok(None);
    }

    log::debug!(
        "🧍 Avatar anchor ({},{}) box [{},{}]-[{},{}]",
        location.anchor.row,
        location.anchor.col,
        bbox.top,
        bbox.left,
        bbox.bottom,
        bbox.right
    );
    Ok(Some(location))
}
