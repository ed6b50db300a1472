//! Configuration for localization operations

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Canny lower hysteresis threshold
    pub canny_low: f32,
    /// Canny upper hysteresis threshold
    pub canny_high: f32,
    /// Top of the edge search band, as a fraction of screen height
    pub edge_top: f64,
    /// Platforms never sit below this fraction of screen height
    pub platform_bottom: f64,
    /// Leading edge pixels skipped as noise, as a fraction of screen height
    pub noise_fraction: f64,
    /// Per-channel tolerance when matching the platform color
    pub color_tolerance: u8,
    /// Half-width of the template scale search around 1.0
    pub scale_range: f64,
    /// Step between tested scales
    pub scale_step: f64,
    /// Write the edge map here after extraction (diagnostics only)
    pub debug_edge_path: Option<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 75.0,
            edge_top: 0.20,
            platform_bottom: 0.50,
            noise_fraction: 0.06,
            color_tolerance: 2,
            scale_range: 0.3,
            scale_step: 0.1,
            debug_edge_path: None,
        }
    }
}

impl LocatorConfig {
    pub fn with_debug_edges(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_edge_path = Some(path.into());
        self
    }

    pub fn with_scale(mut self, scale_range: f64, scale_step: f64) -> Self {
        self.scale_range = scale_range;
        self.scale_step = scale_step;
        self
    }

    pub fn with_canny(mut self, low: f32, high: f32) -> Self {
        self.canny_low = low;
        self.canny_high = high;
        self
    }
}
