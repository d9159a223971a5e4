// Gesture binding and configuration errors

use thiserror::Error;

/// Errors raised at the outer surfaces (DOM attachment, threshold parsing).
/// Recognition itself never fails; malformed input is ignored.
#[derive(Error, Debug)]
pub enum GestureError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("failed to register `{event}` listener: {message}")]
    Listener {
        event: &'static str,
        message: String,
    },

    #[error("invalid threshold `{name}`: {value}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
    },

    #[error("failed to parse gesture thresholds: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GestureError>;
