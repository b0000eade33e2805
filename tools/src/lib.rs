//! Build-time converters that turn PNG logos into LVGL 9 C sources.
//!
//! Each job loads and resamples its inputs, renders the source and header text
//! in memory and only then writes both files, so a failed decode never leaves
//! a half-updated pair behind.

pub mod boot;
mod error;
pub mod loader;
pub mod output;
pub mod tokens;

pub use error::{Error, Result};
