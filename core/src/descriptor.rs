use alloc::vec::Vec;

use crate::{ColorFormat, Error, Result};

/// `LV_IMAGE_HEADER_MAGIC` from LVGL 9.
pub const LV_IMAGE_HEADER_MAGIC: u8 = 0x19;

/// Mirror of the fields of `lv_image_header_t` the generated sources fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub magic: u8,
    pub cf: ColorFormat,
    pub w: u16,
    pub h: u16,
    /// Bytes per row
    pub stride: u16,
}

impl ImageHeader {
    pub fn new(cf: ColorFormat, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension);
        }
        let too_large = Error::TooLarge { width, height };
        let stride = width as usize * cf.bytes_per_pixel();
        Ok(Self {
            magic: LV_IMAGE_HEADER_MAGIC,
            cf,
            w: u16::try_from(width).map_err(|_| too_large)?,
            h: u16::try_from(height).map_err(|_| too_large)?,
            stride: u16::try_from(stride).map_err(|_| too_large)?,
        })
    }

    pub fn data_size(&self) -> usize {
        self.stride as usize * self.h as usize
    }
}

/// A packed pixel buffer together with the header describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    header: ImageHeader,
    data: Vec<u8>,
}

impl ImageDescriptor {
    pub(crate) fn new(header: ImageHeader, data: Vec<u8>) -> Result<Self> {
        if data.len() != header.data_size() {
            return Err(Error::BufferSize {
                expected: header.data_size(),
                actual: data.len(),
            });
        }
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn width(&self) -> u32 {
        self.header.w as u32
    }

    pub fn height(&self) -> u32 {
        self.header.h as u32
    }

    pub fn format(&self) -> ColorFormat {
        self.header.cf
    }

    /// Iterates over the packed rows, top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.header.stride as usize)
    }
}
