use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};

/// Pixel encodings the converters can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum ColorFormat {
    /// 16 bit, little-endian, red in the high bits
    Rgb565,
    /// 32 bit, stored as blue, green, red, alpha
    Argb8888,
}

impl ColorFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::Rgb565 => 2,
            ColorFormat::Argb8888 => 4,
        }
    }

    /// Number of 8-bit channels per pixel the packer consumes.
    pub fn source_channels(self) -> usize {
        match self {
            ColorFormat::Rgb565 => 3,
            ColorFormat::Argb8888 => 4,
        }
    }

    /// The `lv_color_format_t` enumerator used in generated descriptors.
    pub fn lvgl_tag(self) -> &'static str {
        match self {
            ColorFormat::Rgb565 => "LV_COLOR_FORMAT_RGB565",
            ColorFormat::Argb8888 => "LV_COLOR_FORMAT_ARGB8888",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Rgb565 => "RGB565",
            ColorFormat::Argb8888 => "ARGB8888",
        }
    }

    /// Appends one packed pixel to `out`.
    ///
    /// `samples` holds exactly [`source_channels`](Self::source_channels)
    /// values in red, green, blue (, alpha) order.
    pub fn pack_into(self, samples: &[u8], out: &mut alloc::vec::Vec<u8>) {
        match (self, samples) {
            (ColorFormat::Rgb565, &[r, g, b]) => {
                out.extend_from_slice(&rgb565(r, g, b).to_le_bytes())
            }
            (ColorFormat::Argb8888, &[r, g, b, a]) => out.extend_from_slice(&argb8888(r, g, b, a)),
            _ => debug_assert!(
                false,
                "{} expects {} channels",
                self.label(),
                self.source_channels()
            ),
        }
    }
}

/// Truncates each channel to 5/6/5 bits.
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    Rgb565::new(r >> 3, g >> 2, b >> 3).into_storage()
}

/// Memory order of an LVGL ARGB8888 pixel on a little-endian target.
pub fn argb8888(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    [b, g, r, a]
}
