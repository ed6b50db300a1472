pub mod error;
pub mod locate;

pub use error::{LocateError, LocateResult};
pub use locate::{FrameAnalysis, JumpDetector, LocatorConfig};
