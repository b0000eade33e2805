use std::path::Path;

use image::{
    RgbaImage,
    imageops::{self, FilterType},
};
use log::debug;
use lvimg_core::{ColorFormat, ImageDescriptor, serialize};

use crate::{Error, Result};

/// Decoded image resampled to the target size, as raw 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resampled {
    pub width: u32,
    pub height: u32,
    pub format: ColorFormat,
    /// Row-major samples, [`ColorFormat::source_channels`] per pixel
    pub samples: Vec<u8>,
}

/// Decodes `path`, converts it to the channel model of `format` and resamples
/// it to exactly `width`x`height` with a Lanczos3 filter.
pub fn load_resampled(
    path: &Path,
    width: u32,
    height: u32,
    format: ColorFormat,
) -> Result<Resampled> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidSize { width, height });
    }
    let image = image::open(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} ({}x{}), resampling to {}x{} {}",
        path.display(),
        image.width(),
        image.height(),
        width,
        height,
        format.label()
    );

    // Channel conversion happens before resampling
    let resized = match format {
        ColorFormat::Rgb565 => {
            let rgb = image.into_rgb8();
            let resized = imageops::resize(&rgb, width, height, FilterType::Lanczos3);
            (resized.dimensions(), resized.into_raw())
        }
        ColorFormat::Argb8888 => {
            let mut rgba = image.into_rgba8();
            premultiply(&mut rgba);
            let mut resized = imageops::resize(&rgba, width, height, FilterType::Lanczos3);
            unpremultiply(&mut resized);
            (resized.dimensions(), resized.into_raw())
        }
    };
    let ((width, height), samples) = resized;

    Ok(Resampled {
        width,
        height,
        format,
        samples,
    })
}

/// Scales colour by alpha so transparent pixels carry no colour into the
/// filter taps.
fn premultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u32;
        for c in &mut pixel.0[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u32;
        for c in &mut pixel.0[..3] {
            *c = match a {
                0 => 0,
                a => ((*c as u32 * 255 + a / 2) / a).min(255) as u8,
            };
        }
    }
}

impl Resampled {
    pub fn pack(&self) -> Result<ImageDescriptor> {
        Ok(serialize::pack(self.format, self.width, self.height, &self.samples)?)
    }
}

/// [`load_resampled`] followed by packing into the target format.
pub fn load_packed(
    path: &Path,
    width: u32,
    height: u32,
    format: ColorFormat,
) -> Result<ImageDescriptor> {
    load_resampled(path, width, height, format)?.pack()
}
