use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlideshowError {
    /// No item carries the role a transition needs as its reference point.
    #[error("No active item present: {0}")]
    NoActiveItem(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Slide index {index} out of range for a deck of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
