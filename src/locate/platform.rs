//! Platform localization from edge pixels and color continuity
//!
//! The top face of the next platform is a flat run of one color. The primary
//! scan locks onto that color from a vertical stack of identical pixels, then
//! keeps the widest horizontal band of edge pixels with that color. When that
//! fails the spare scan takes the widest band regardless of color.

use super::config::LocatorConfig;
use super::region::{SearchRegion, find_edge_pixels};
use super::types::{Anchor, Band, ColorSample, PixelPos};
use crate::error::{LocateError, LocateResult};
use image::{GrayImage, RgbImage};

/// Edge-scan platform locator
pub struct PlatformLocator {
    edge_top: f64,
    platform_bottom: f64,
    noise_fraction: f64,
    color_tolerance: u8,
}

impl PlatformLocator {
    pub fn new(config: &LocatorConfig) -> Self {
        Self {
            edge_top: config.edge_top,
            platform_bottom: config.platform_bottom,
            noise_fraction: config.noise_fraction,
            color_tolerance: config.color_tolerance,
        }
    }

    /// Edge pixels in the platform search band between columns `left` and `right`
    ///
    /// `right` of `None` or `Some(0)` means the full width.
    pub fn platform_edge_pixels(
        &self,
        edge_map: &GrayImage,
        left: u32,
        right: Option<u32>,
    ) -> Vec<PixelPos> {
        let width = edge_map.width().max(1) as f64;
        let right = right.filter(|r| *r > 0).unwrap_or(edge_map.width());
        let region = SearchRegion::new(
            left as f64 / width,
            right as f64 / width,
            self.edge_top,
            self.platform_bottom,
        );
        find_edge_pixels(edge_map, &region)
    }

    /// Locate the platform center between columns `left` and `right`
    ///
    /// A zero row or column in the result means no platform was found.
    pub fn locate_platform(
        &self,
        image: &RgbImage,
        edge_map: &GrayImage,
        left: u32,
        right: Option<u32>,
    ) -> LocateResult<Anchor> {
        LocateError::check_dimensions(image.width(), image.height())?;
        if image.dimensions() != edge_map.dimensions() {
            return Err(LocateError::DimensionMismatch {
                image_width: image.width(),
                image_height: image.height(),
                edge_width: edge_map.width(),
                edge_height: edge_map.height(),
            });
        }

        let positions = self.platform_edge_pixels(edge_map, left, right);

        let Some(platform_color) = self.lock_platform_color(image, &positions) else {
            log::debug!("⚠️ No platform color lock, using spare scan");
            return Ok(locate_platform_fallback(&positions));
        };

        let tolerance = self.color_tolerance;
        let band = widest_band(
            positions.iter().filter(|p| {
                ColorSample::from(*image.get_pixel(p.col, p.row)).is_near(&platform_color, tolerance)
            }),
            false,
        );
        let platform = band.center();

        if !platform.is_found() {
            log::debug!(
                "⚠️ Color band {:?} for {:?} is degenerate, using spare scan",
                band,
                platform_color
            );
            return Ok(locate_platform_fallback(&positions));
        }

        log::debug!(
            "🟫 Platform {:?} band row {} cols [{},{}]",
            platform_color.0,
            band.row,
            band.left,
            band.left + band.width
        );
        Ok(platform)
    }

    /// Color of the first edge pixel, past the leading noise, whose three
    /// pixels directly below share exactly its color
    fn lock_platform_color(&self, image: &RgbImage, positions: &[PixelPos]) -> Option<ColorSample> {
        let noise = image.height() as f64 * self.noise_fraction;
        let mut level: u32 = 0;

        for p in positions {
            if level as f64 <= noise {
                level += 1;
                continue;
            }

            let color = ColorSample::from(*image.get_pixel(p.col, p.row));
            let stacked = (1..=3).all(|dy| {
                let row = p.row + dy;
                row < image.height() && ColorSample::from(*image.get_pixel(p.col, row)) == color
            });

            if stacked {
                log::trace!("Platform color {:?} locked at ({},{})", color.0, p.row, p.col);
                return Some(color);
            }
        }

        None
    }
}

impl Default for PlatformLocator {
    fn default() -> Self {
        Self::new(&LocatorConfig::default())
    }
}

/// Widest band over all edge pixels, no color check
///
/// Stops at the first row change that does not widen the best band.
pub fn locate_platform_fallback(edge_positions: &[PixelPos]) -> Anchor {
    let band = widest_band(edge_positions.iter(), true);
    log::debug!("Spare scan band {:?}", band);
    band.center()
}

/// Two-pointer band scan over row-major pixels
///
/// The first pixel of each new row is the left edge; the last pixel seen on an
/// earlier row is the right edge. A band replaces the best only when strictly
/// wider, so the first widest band wins.
fn widest_band<'a>(positions: impl Iterator<Item = &'a PixelPos>, stop_early: bool) -> Band {
    let mut best = Band::default();
    let mut edge_right: Option<PixelPos> = None;
    let mut current_row: Option<u32> = None;

    for p in positions {
        if current_row.is_none_or(|row| p.row > row) {
            current_row = Some(p.row);
            if let Some(right) = edge_right {
                let width = i64::from(right.col) - i64::from(p.col);
                if width > i64::from(best.width) {
                    best = Band {
                        row: right.row,
                        left: p.col,
                        width: width as u32,
                    };
                } else if stop_early {
                    break;
                }
            }
        } else {
            edge_right = Some(*p);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    fn row_span(row: u32, cols: std::ops::RangeInclusive<u32>) -> Vec<PixelPos> {
        cols.map(|c| PixelPos::new(row, c)).collect()
    }

    fn mark(edges: &mut GrayImage, row: u32, cols: std::ops::RangeInclusive<u32>) {
        for c in cols {
            edges.put_pixel(c, row, Luma([255]));
        }
    }

    /// Background where no pixel shares its color with the one below
    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(y * 2) as u8, (x * 2) as u8, 100]))
    }

    #[test]
    fn test_first_widest_band_wins() {
        let mut positions = row_span(10, 2..=8);
        positions.extend(row_span(11, 2..=8));
        positions.extend(row_span(12, 2..=8));

        let band = widest_band(positions.iter(), false);
        assert_eq!(
            band,
            Band {
                row: 10,
                left: 2,
                width: 6
            }
        );
    }

    #[test]
    fn test_last_row_is_never_a_band() {
        let positions = row_span(20, 5..=40);
        assert_eq!(widest_band(positions.iter(), false), Band::default());
        assert!(!locate_platform_fallback(&positions).is_found());
    }

    #[test]
    fn test_spare_scan_stops_when_band_does_not_widen() {
        let mut positions = row_span(10, 0..=10);
        positions.extend(row_span(11, 0..=2));
        positions.extend(row_span(12, 0..=30));
        positions.push(PixelPos::new(13, 0));

        assert_eq!(locate_platform_fallback(&positions), Anchor::new(10, 5));
        // without the early stop the later, wider row wins
        assert_eq!(widest_band(positions.iter(), false).center(), Anchor::new(12, 15));
    }

    #[test]
    fn test_empty_positions_give_sentinel() {
        assert_eq!(locate_platform_fallback(&[]), Anchor::new(0, 0));
    }

    #[test]
    fn test_color_lock_ignores_distractor_band() {
        let mut image = gradient(100, 100);
        for y in 30..=33 {
            for x in 20..=60 {
                image.put_pixel(x, y, Rgb([10, 10, 10]));
            }
        }
        let mut edges = GrayImage::new(100, 100);
        mark(&mut edges, 30, 20..=60);
        mark(&mut edges, 31, 20..=60);
        // wider edge line on the background
        mark(&mut edges, 45, 5..=95);

        let locator = PlatformLocator::default();
        let platform = locator.locate_platform(&image, &edges, 0, None).unwrap();

        assert_eq!(platform, Anchor::new(30, 40));
        assert!((20..=60).contains(&platform.col));

        let positions = locator.platform_edge_pixels(&edges, 0, None);
        assert_eq!(locate_platform_fallback(&positions), Anchor::new(31, 33));
    }

    #[test]
    fn test_no_vertical_run_falls_back() {
        let image = gradient(100, 100);
        let mut edges = GrayImage::new(100, 100);
        mark(&mut edges, 30, 20..=60);
        mark(&mut edges, 31, 20..=60);
        mark(&mut edges, 45, 5..=95);

        let locator = PlatformLocator::default();
        let positions = locator.platform_edge_pixels(&edges, 0, None);
        let platform = locator.locate_platform(&image, &edges, 0, None).unwrap();

        assert_eq!(platform, locate_platform_fallback(&positions));
    }

    #[test]
    fn test_leading_noise_pixels_are_skipped() {
        // a perfect 4-stack at the very first edge pixels must not lock
        let mut image = gradient(100, 100);
        for y in 21..=24 {
            for x in 0..=3 {
                image.put_pixel(x, y, Rgb([9, 9, 9]));
            }
        }
        let positions = row_span(21, 0..=3);
        let locator = PlatformLocator::default();
        assert_eq!(locator.lock_platform_color(&image, &positions), None);
    }

    #[test]
    fn test_column_window_restricts_search() {
        let mut edges = GrayImage::new(100, 100);
        mark(&mut edges, 30, 10..=90);
        let locator = PlatformLocator::default();

        let positions = locator.platform_edge_pixels(&edges, 50, Some(80));
        assert_eq!(positions.first(), Some(&PixelPos::new(30, 50)));
        assert_eq!(positions.last(), Some(&PixelPos::new(30, 79)));

        // bottom half of the screen is never searched
        let mut low = GrayImage::new(100, 100);
        mark(&mut low, 60, 0..=99);
        assert!(locator.platform_edge_pixels(&low, 0, None).is_empty());
    }

    #[test]
    fn test_mismatched_edge_map_rejected() {
        let image = gradient(50, 50);
        let edges = GrayImage::new(40, 50);
        let err = PlatformLocator::default()
            .locate_platform(&image, &edges, 0, None)
            .unwrap_err();
        assert!(matches!(err, LocateError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut image = gradient(100, 100);
        for y in 30..=33 {
            for x in 20..=60 {
                image.put_pixel(x, y, Rgb([10, 10, 10]));
            }
        }
        let mut edges = GrayImage::new(100, 100);
        mark(&mut edges, 30, 20..=60);
        mark(&mut edges, 31, 20..=60);

        let locator = PlatformLocator::default();
        let a = locator.locate_platform(&image, &edges, 0, None).unwrap();
        let b = locator.locate_platform(&image, &edges, 0, None).unwrap();
        assert_eq!(a, b);
    }
}
