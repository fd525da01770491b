use thiserror::Error;

use super::repr::Representation;

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("width must be 1..=8 bytes, got {width}")]
    BadWidth { width: usize },
    #[error("byte count does not match requested width: need {expected}, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
    #[error("value {value} out of range for {width}-byte {repr}")]
    Overflow {
        value: i128,
        width: usize,
        repr: Representation,
    },
    #[error("invalid integer literal '{literal}'")]
    InvalidLiteral { literal: String },
}
