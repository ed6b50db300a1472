//! Per-screenshot localization of avatar and platform

use super::{
    avatar::{AvatarLocation, locate_avatar},
    config::LocatorConfig,
    edges::detect_edges,
    matcher::TemplateLocator,
    platform::PlatformLocator,
    types::Anchor,
};
use crate::error::{LocateError, LocateResult};
use image::{GrayImage, RgbImage};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FrameAnalysis {
    pub avatar: Option<AvatarLocation>,
    pub platform: Anchor,
    pub processing_time_ms: u128,
}

impl FrameAnalysis {
    pub fn has_avatar(&self) -> bool {
        self.avatar.is_some()
    }

    pub fn has_platform(&self) -> bool {
        self.platform.is_found()
    }
}

/// Runs edge extraction, avatar matching and the platform scan on a screenshot
pub struct JumpDetector {
    config: LocatorConfig,
    template: GrayImage,
    template_locator: TemplateLocator,
    platform_locator: PlatformLocator,
}

impl JumpDetector {
    pub fn new(config: LocatorConfig, template: GrayImage) -> LocateResult<Self> {
        LocateError::check_dimensions(template.width(), template.height())?;
        Ok(Self {
            template_locator: TemplateLocator::new(config.scale_range, config.scale_step),
            platform_locator: PlatformLocator::new(&config),
            config,
            template,
        })
    }

    /// Analyze an encoded (PNG/JPEG) screenshot
    pub fn analyze_bytes(&self, screenshot_bytes: &[u8]) -> LocateResult<FrameAnalysis> {
        let screenshot = image::load_from_memory(screenshot_bytes)?.to_rgb8();
        self.analyze(&screenshot)
    }

    /// Locate avatar and platform across the full screenshot width
    pub fn analyze(&self, screenshot: &RgbImage) -> LocateResult<FrameAnalysis> {
        self.analyze_columns(screenshot, 0, None)
    }

    /// Same as [`JumpDetector::analyze`] with the platform search limited to
    /// columns `[left, right)`
    pub fn analyze_columns(
        &self,
        screenshot: &RgbImage,
        left: u32,
        right: Option<u32>,
    ) -> LocateResult<FrameAnalysis> {
        let start_time = std::time::Instant::now();

        let edges = detect_edges(
            screenshot,
            self.config.canny_low,
            self.config.canny_high,
            self.config.debug_edge_path.as_deref(),
        )?;

        let avatar = locate_avatar(screenshot, &self.template, &self.template_locator)?;
        let platform = self
            .platform_locator
            .locate_platform(screenshot, &edges, left, right)?;

        let result = FrameAnalysis {
            avatar,
            platform,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        log::info!(
            "🔍 Frame analyzed in {}ms: avatar={:?} platform=({},{})",
            result.processing_time_ms,
            result.avatar.map(|a| (a.anchor.row, a.anchor.col)),
            result.platform.row,
            result.platform.col
        );

        Ok(result)
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn update_config(&mut self, config: LocatorConfig) {
        self.template_locator = TemplateLocator::new(config.scale_range, config.scale_step);
        self.platform_locator = PlatformLocator::new(&config);
        self.config = config;
    }
}
