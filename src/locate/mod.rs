//! Feature localization for jump-style game screenshots
//!
//! This module finds the player avatar by multiscale template matching and the
//! next platform by scanning edge pixels for a uniform-color band.

pub mod avatar;
pub mod config;
pub mod crop;
pub mod detector;
pub mod edges;
pub mod matcher;
pub mod platform;
pub mod region;
pub mod types;


// Re-export main types and functions
pub use avatar::{AvatarLocation, locate_avatar};
pub use config::LocatorConfig;
pub use crop::{CroppedRegions, crop_regions};
pub use detector::{FrameAnalysis, JumpDetector};
pub use edges::detect_edges;
pub use matcher::TemplateLocator;
pub use platform::{PlatformLocator, locate_platform_fallback};
pub use region::{SearchRegion, find_edge_pixels};
pub use types::{Anchor, BoundingBox, ColorSample, PixelPos};
