use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for localization operations.
pub type LocateResult<T> = Result<T, LocateError>;

/// The error type for all localization operations.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Image has no pixels ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },

    #[error(
        "Edge map is {edge_width}x{edge_height} but the screenshot is {image_width}x{image_height}"
    )]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        edge_width: u32,
        edge_height: u32,
    },

    #[error("Crop columns [{left},{right}) are outside the screenshot width {width}")]
    InvalidCrop { left: u32, right: u32, width: u32 },

    #[error("Image decode or encode failed: {source}")]
    Image {
        #[from]
        source: image::ImageError,
    },

    #[error("Failed to write {path:?}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl LocateError {
    /// Reject zero-sized buffers before any scan touches them
    pub fn check_dimensions(width: u32, height: u32) -> LocateResult<()> {
        if width == 0 || height == 0 {
            Err(LocateError::InvalidImage { width, height })
        } else {
            Ok(())
        }
    }
}
