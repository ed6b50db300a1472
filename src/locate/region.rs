//! Fractional search regions and edge pixel lookup

use super::types::PixelPos;
use image::GrayImage;

/// Rectangle expressed as fractions of the full image width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRegion {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl SearchRegion {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Full width, rows 20%..70% of the screen
    pub fn default_band(left: f64, right: f64) -> Self {
        Self::new(left, right, 0.20, 0.70)
    }

    /// Absolute `(row0, row1, col0, col1)` bounds, half-open, clipped to the image
    pub fn to_pixels(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let scale = |fraction: f64, extent: u32| -> u32 {
            let clamped = fraction.clamp(0.0, 1.0);
            ((extent as f64 * clamped).floor() as u32).min(extent)
        };
        (
            scale(self.top, height),
            scale(self.bottom, height),
            scale(self.left, width),
            scale(self.right, width),
        )
    }
}

/// Coordinates of every non-zero edge pixel inside `region`
///
/// Results are in full-image coordinates, row-major order.
pub fn find_edge_pixels(edge_map: &GrayImage, region: &SearchRegion) -> Vec<PixelPos> {
    let (row0, row1, col0, col1) = region.to_pixels(edge_map.width(), edge_map.height());
    let mut positions = Vec::new();

    for row in row0..row1 {
        for col in col0..col1 {
            if edge_map.get_pixel(col, row)[0] != 0 {
                positions.push(PixelPos::new(row, col));
            }
        }
    }

    log::trace!(
        "🔍 {} edge pixels in rows [{},{}) cols [{},{})",
        positions.len(),
        row0,
        row1,
        col0,
        col1
    );

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_pixel_bounds_use_floor() {
        let region = SearchRegion::new(0.25, 0.75, 0.20, 0.70);
        assert_eq!(region.to_pixels(101, 55), (11, 38, 25, 75));
    }

    #[test]
    fn test_fractions_are_clamped() {
        let region = SearchRegion::new(-0.5, 1.5, 0.0, 2.0);
        assert_eq!(region.to_pixels(80, 60), (0, 60, 0, 80));
    }

    #[test]
    fn test_empty_map_yields_nothing() {
        let edges = GrayImage::new(50, 50);
        assert!(find_edge_pixels(&edges, &SearchRegion::default_band(0.0, 1.0)).is_empty());
    }

    #[test]
    fn test_results_stay_inside_region() {
        let edges = GrayImage::from_pixel(60, 40, Luma([255]));
        let region = SearchRegion::new(0.1, 0.5, 0.25, 0.5);
        let (row0, row1, col0, col1) = region.to_pixels(60, 40);
        let positions = find_edge_pixels(&edges, &region);

        assert_eq!(positions.len(), ((row1 - row0) * (col1 - col0)) as usize);
        for p in &positions {
            assert!(p.row >= row0 && p.row < row1);
            assert!(p.col >= col0 && p.col < col1);
        }
    }

    #[test]
    fn test_row_major_order_and_translation() {
        let mut edges = GrayImage::new(20, 20);
        edges.put_pixel(15, 8, Luma([255]));
        edges.put_pixel(3, 8, Luma([255]));
        edges.put_pixel(9, 5, Luma([1]));
        // outside the vertical band
        edges.put_pixel(9, 19, Luma([255]));

        let positions = find_edge_pixels(&edges, &SearchRegion::default_band(0.0, 1.0));
        assert_eq!(
            positions,
            vec![PixelPos::new(5, 9), PixelPos::new(8, 3), PixelPos::new(8, 15)]
        );
    }

    #[test]
    fn test_reversed_bounds_are_empty() {
        let edges = GrayImage::from_pixel(20, 20, Luma([255]));
        let region = SearchRegion::new(0.8, 0.2, 0.2, 0.7);
        assert!(find_edge_pixels(&edges, &region).is_empty());
    }
}
