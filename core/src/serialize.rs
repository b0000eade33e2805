use alloc::vec::Vec;
use log::trace;

use crate::{ColorFormat, Error, ImageDescriptor, ImageHeader, Result};

/// Packs a row-major grid of 8-bit channel samples into an image descriptor.
///
/// `samples` must hold `width * height * format.source_channels()` values,
/// origin top-left, red first. Pixels are emitted in the same order, so row
/// `y` of the packed buffer starts at `y * stride`.
pub fn pack(
    format: ColorFormat,
    width: u32,
    height: u32,
    samples: &[u8],
) -> Result<ImageDescriptor> {
    let header = ImageHeader::new(format, width, height)?;
    let channels = format.source_channels();
    let expected = width as usize * height as usize * channels;
    if samples.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: samples.len(),
        });
    }

    let mut data = Vec::with_capacity(header.data_size());
    for pixel in samples.chunks_exact(channels) {
        format.pack_into(pixel, &mut data);
    }
    trace!(
        "Packed {}x{} {} image into {} bytes",
        width,
        height,
        format.label(),
        data.len()
    );

    ImageDescriptor::new(header, data)
}
