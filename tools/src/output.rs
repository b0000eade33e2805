use std::path::PathBuf;

use log::info;

use crate::{Error, Result};

/// Rendered text waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
    /// Appended to the summary line, e.g. "(25 bytes, 2x2 RGB565)"
    pub detail: Option<String>,
}

impl GeneratedFile {
    pub fn new(path: PathBuf, contents: String) -> Self {
        Self {
            path,
            contents,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Overwrites the target unconditionally.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.contents).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        match &self.detail {
            Some(detail) => info!("Generated {} {}", self.path.display(), detail),
            None => info!("Generated {}", self.path.display()),
        }
        Ok(())
    }
}

/// Writes `files` in order, stopping at the first failure.
pub fn write_all(files: &[GeneratedFile]) -> Result<()> {
    files.iter().try_for_each(GeneratedFile::write)
}
