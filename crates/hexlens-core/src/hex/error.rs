use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexError {
    #[error("continuous hex input must have an even number of digits, got {digits}")]
    OddLength { digits: usize },
    #[error("invalid hex byte '{token}'")]
    InvalidByte { token: String },
    #[error("too many bytes: limit {max}, got {actual}")]
    TooManyBytes { max: usize, actual: usize },
}
