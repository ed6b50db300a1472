//! Edge extraction over the full screenshot

use crate::error::{LocateError, LocateResult};
use image::{GrayImage, RgbImage};
use imageproc::edges::canny;
use std::path::Path;

/// Run Canny over the whole screenshot and return a 0/255 edge map
///
/// When `debug_path` is set the map is also written there; a failed write is
/// logged and does not affect the result.
pub fn detect_edges(
    image: &RgbImage,
    low_threshold: f32,
    high_threshold: f32,
    debug_path: Option<&Path>,
) -> LocateResult<GrayImage> {
    LocateError::check_dimensions(image.width(), image.height())?;

    let gray = image::imageops::grayscale(image);
    let edges = canny(&gray, low_threshold, high_threshold);

    log::trace!(
        "Canny {}x{} low={} high={}",
        edges.width(),
        edges.height(),
        low_threshold,
        high_threshold
    );

    if let Some(path) = debug_path {
        save_debug_edges(&edges, path);
    }

    Ok(edges)
}

fn save_debug_edges(edges: &GrayImage, path: &Path) {
    match edges.save(path) {
        Ok(()) => log::debug!("🖼️ Edge map written to {:?}", path),
        Err(e) => log::warn!("⚠️ Could not write edge map to {:?}: {}", path, e),
    }
}
