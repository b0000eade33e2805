use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    /// Missing or undecodable input image
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Output file could not be written
    Io { path: PathBuf, source: io::Error },
    Core(lvimg_core::Error),
    InvalidSize { width: u32, height: u32 },
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<lvimg_core::Error> for Error {
    fn from(err: lvimg_core::Error) -> Self {
        Error::Core(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Image { path, source } => {
                write!(f, "failed to load {}: {source}", path.display())
            }
            Error::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Error::Core(err) => write!(f, "failed to pack image: {err}"),
            Error::InvalidSize { width, height } => {
                write!(f, "invalid target size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image { source, .. } => Some(source),
            Error::Io { source, .. } => Some(source),
            Error::Core(err) => Some(err),
            Error::InvalidSize { .. } => None,
        }
    }
}
