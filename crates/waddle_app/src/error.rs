//! Error types for the application layer.

use thiserror::Error;
use waddle_animation::OscillatorError;

/// Application-level failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// The spring was handed an invalid tuning configuration. The frame that
    /// hit this did not advance; fix the tuning before stepping again.
    #[error("spring tuning rejected: {0}")]
    Tuning(#[from] OscillatorError),
}

pub type Result<T> = std::result::Result<T, AppError>;
