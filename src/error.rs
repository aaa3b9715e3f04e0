//! Errors

/// Result type used by fallible constructors
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when binding external pixel data
///
/// Drawing itself never fails; out of range spans are programming
/// errors and panic instead.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bounds: {width}x{height}")]
    InvalidBounds { width: usize, height: usize },

    #[error("stride {stride} is smaller than a row of {min} bytes")]
    InvalidStride { stride: usize, min: usize },

    #[error("buffer holds {len} bytes, {required} required")]
    BufferTooSmall { len: usize, required: usize },
}
