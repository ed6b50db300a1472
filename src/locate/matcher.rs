//! Multiscale template matching
//!
//! The avatar is drawn at slightly different sizes depending on the device, so
//! the screenshot is resized over a small window of factors around 1.0 and the
//! unscaled template is matched against each copy.

use super::types::BoundingBox;
use crate::error::{LocateError, LocateResult};
use image::{GrayImage, Luma, imageops::FilterType};
use imageproc::definitions::Image;
use imageproc::template_matching::{MatchTemplateMethod, match_template};
use std::borrow::Cow;

/// Best correlation peak found at one scale, in resized-screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMatch {
    pub row: u32,
    pub col: u32,
    pub scale: f64,
    pub score: f32,
}

impl ScaleMatch {
    /// Map the matched window back to original screenshot coordinates
    pub fn to_bounding_box(&self, template_width: u32, template_height: u32) -> BoundingBox {
        let back = |v: u32| (v as f64 / self.scale).round() as u32;
        BoundingBox {
            top: back(self.row),
            left: back(self.col),
            bottom: back(self.row + template_height),
            right: back(self.col + template_width),
            scale: self.scale,
            score: self.score,
        }
    }
}

/// Template locator searching a window of screenshot scales
pub struct TemplateLocator {
    scale_range: f64,
    scale_step: f64,
}

impl TemplateLocator {
    pub fn new(scale_range: f64, scale_step: f64) -> Self {
        Self {
            scale_range,
            scale_step,
        }
    }

    /// Scale factors in `[1 - range, 1 + range)`, ascending
    pub fn scale_factors(&self) -> Vec<f64> {
        if self.scale_step <= 0.0 || self.scale_range <= 0.0 {
            return Vec::new();
        }
        let start = 1.0 - self.scale_range;
        // the epsilon keeps float noise from adding the excluded end point
        let count = ((2.0 * self.scale_range / self.scale_step) - 1e-9).ceil() as usize;
        (0..count)
            .map(|i| start + i as f64 * self.scale_step)
            .filter(|s| *s > 0.0)
            .collect()
    }

    /// Find the best-scoring placement of `template` in `screen`
    ///
    /// Returns an all-zero box when no scale can be matched.
    pub fn multiscale_match(
        &self,
        screen: &GrayImage,
        template: &GrayImage,
    ) -> LocateResult<BoundingBox> {
        LocateError::check_dimensions(screen.width(), screen.height())?;
        LocateError::check_dimensions(template.width(), template.height())?;

        let mut best: Option<ScaleMatch> = None;

        for scale in self.scale_factors() {
            if let Some(candidate) = self.match_at_scale(screen, template, scale) {
                log::trace!(
                    "  scale {:.2}: peak {:.4} at ({},{})",
                    scale,
                    candidate.score,
                    candidate.row,
                    candidate.col
                );
                best = keep_better(best, candidate);
            }
        }

        match best {
            Some(found) => {
                let bbox = found.to_bounding_box(template.width(), template.height());
                log::debug!(
                    "✅ Template matched at scale {:.2} score {:.3}: [{},{}]-[{},{}]",
                    bbox.scale,
                    bbox.score,
                    bbox.top,
                    bbox.left,
                    bbox.bottom,
                    bbox.right
                );
                Ok(bbox)
            }
            None => {
                log::debug!("⚠️ No scale produced a template match");
                Ok(BoundingBox::default())
            }
        }
    }

    fn match_at_scale(
        &self,
        screen: &GrayImage,
        template: &GrayImage,
        scale: f64,
    ) -> Option<ScaleMatch> {
        let new_width = (screen.width() as f64 * scale).round() as u32;
        let new_height = (screen.height() as f64 * scale).round() as u32;

        // Skip if template is larger than the resized screen
        if template.width() > new_width || template.height() > new_height {
            log::debug!(
                "⚠️ Skipping scale {:.2} - template {}x{} larger than screen {}x{}",
                scale,
                template.width(),
                template.height(),
                new_width,
                new_height
            );
            return None;
        }

        let resized: Cow<'_, GrayImage> =
            if new_width == screen.width() && new_height == screen.height() {
                Cow::Borrowed(screen)
            } else {
                Cow::Owned(image::imageops::resize(
                    screen,
                    new_width,
                    new_height,
                    FilterType::Triangle,
                ))
            };

        let scores = match_template(
            &resized,
            template,
            MatchTemplateMethod::CrossCorrelationNormalized,
        );

        peak(&scores).map(|(row, col, score)| ScaleMatch {
            row,
            col,
            scale,
            score,
        })
    }
}

impl Default for TemplateLocator {
    fn default() -> Self {
        Self::new(0.3, 0.1)
    }
}

/// Only a strictly greater score replaces the current best
fn keep_better(best: Option<ScaleMatch>, candidate: ScaleMatch) -> Option<ScaleMatch> {
    match best {
        Some(current) if candidate.score <= current.score => Some(current),
        _ => Some(candidate),
    }
}

/// First maximum in row-major order as `(row, col, score)`, ignoring NaN scores
/// from flat windows
fn peak(scores: &Image<Luma<f32>>) -> Option<(u32, u32, f32)> {
    let mut best: Option<(u32, u32, f32)> = None;
    for (x, y, pixel) in scores.enumerate_pixels() {
        let score = pixel[0];
        if !score.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, _, s)| score > s) {
            best = Some((y, x, score));
        }
    }
    best
}
