use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("group size must be one of 1, 2, 4 or 8, got {size}")]
    BadGroupSize { size: usize },
    #[error("invalid group pattern token '{token}'")]
    BadPattern { token: String },
    #[error("group of {len} bytes exceeds the {max}-byte limit")]
    GroupTooWide { len: usize, max: usize },
}
