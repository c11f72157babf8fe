pub mod border;
pub mod sobel;
pub mod tenengrad;

use crate::error::InvalidImageError;
use crate::frame::Frame;

pub use border::BorderMode;
pub use tenengrad::{tenengrad_score, Tenengrad};

/// Turns one grayscale frame into a scalar focus score.
///
/// Implementations are pure: no I/O, no logging, no state shared between
/// calls, so any number of frames may be scored concurrently.
pub trait SharpnessScorer: Send + Sync {
    fn score(&self, frame: &Frame) -> Result<f64, InvalidImageError>;
}

/// Score a frame with the default Tenengrad configuration.
pub fn score(frame: &Frame) -> Result<f64, InvalidImageError> {
    Tenengrad::default().score(frame)
}
