use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Sample slice does not match `width * height * channels`
    BufferSize { expected: usize, actual: usize },
    ZeroDimension,
    /// Width, height or stride do not fit the 16 bit header fields
    TooLarge { width: u32, height: u32 },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferSize { expected, actual } => {
                write!(f, "expected {expected} channel samples, got {actual}")
            }
            Error::ZeroDimension => write!(f, "image dimensions must be non-zero"),
            Error::TooLarge { width, height } => {
                write!(f, "image {width}x{height} exceeds the LVGL header limits")
            }
        }
    }
}

impl core::error::Error for Error {}
