/*!
Pixel packing and C source rendering for LVGL 9 image descriptors.

The crate turns already decoded 8-bit channel samples into the packed buffers
`lv_image_dsc_t` expects and renders them as C source text. It does no I/O;
decoding and writing files is left to the caller.

## Usage
```
# use lvimg_core::{ColorFormat, SourceWriter, Symbols, serialize};
# fn main() -> Result<(), lvimg_core::Error> {
let red = [255u8, 0, 0].repeat(4);
let image = serialize::pack(ColorFormat::Rgb565, 2, 2, &red)?;
assert_eq!(image.data(), &[0x00, 0xf8, 0x00, 0xf8, 0x00, 0xf8, 0x00, 0xf8]);

let mut source = SourceWriter::new();
source.include("lvgl.h").blank().image(&Symbols::from_stem("dot"), &image);
let text = source.finish();
assert!(text.contains("const lv_image_dsc_t dot_dsc = {"));
# Ok(())
# }
```
*/
#![no_std]

extern crate alloc;

pub mod color;
pub mod descriptor;
pub mod emit;
mod error;
pub mod serialize;

pub use color::ColorFormat;
pub use descriptor::{ImageDescriptor, ImageHeader, LV_IMAGE_HEADER_MAGIC};
pub use emit::{License, SourceWriter, Symbols};
pub use error::{Error, Result};
