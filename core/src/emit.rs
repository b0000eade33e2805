//! Line based writer for the generated C sources and headers.
//!
//! Every line pushed is terminated with `\n` by [`SourceWriter::finish`], so a
//! trailing [`blank`](SourceWriter::blank) produces an empty last line.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Write;

use crate::{ImageDescriptor, LV_IMAGE_HEADER_MAGIC};

/// C identifiers for one image: the byte array and the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub data: String,
    pub descriptor: String,
}

impl Symbols {
    /// `{stem}_data` / `{stem}_dsc`
    pub fn from_stem(stem: &str) -> Self {
        Self {
            data: format!("{stem}_data"),
            descriptor: format!("{stem}_dsc"),
        }
    }

    /// `{name}_data` / `{name}`
    pub fn from_descriptor(name: &str) -> Self {
        Self {
            data: format!("{name}_data"),
            descriptor: name.to_string(),
        }
    }
}

/// SPDX licence block placed at the top of generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License<'a> {
    pub copyright: &'a str,
    pub identifier: &'a str,
}

#[derive(Debug, Default)]
pub struct SourceWriter {
    lines: Vec<String>,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line(String::new())
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(format!("// {text}"))
    }

    /// Block comment followed by an empty line.
    pub fn license(&mut self, license: &License) -> &mut Self {
        self.line("/*")
            .line(format!(" * SPDX-FileCopyrightText: {}", license.copyright))
            .line(format!(" * SPDX-License-Identifier: {}", license.identifier))
            .line(" */")
            .blank()
    }

    pub fn include(&mut self, header: &str) -> &mut Self {
        self.line(format!("#include \"{header}\""))
    }

    pub fn pragma_once(&mut self) -> &mut Self {
        self.line("#pragma once")
    }

    /// `static const uint8_t` array with one source line per packed row.
    pub fn byte_array(&mut self, symbol: &str, image: &ImageDescriptor) -> &mut Self {
        self.line(format!("static const uint8_t {symbol}[] = {{"));
        for row in image.rows() {
            let mut line = String::with_capacity(4 + row.len() * 6);
            line.push_str("    ");
            for (idx, byte) in row.iter().enumerate() {
                if idx > 0 {
                    line.push_str(", ");
                }
                // writing into a String cannot fail
                let _ = write!(line, "0x{byte:02x}");
            }
            line.push(',');
            self.lines.push(line);
        }
        self.line("};")
    }

    /// `lv_image_dsc_t` initializer pointing at the array named `symbols.data`.
    pub fn descriptor(&mut self, symbols: &Symbols, image: &ImageDescriptor) -> &mut Self {
        let header = image.header();
        debug_assert_eq!(header.magic, LV_IMAGE_HEADER_MAGIC);
        self.line(format!("const lv_image_dsc_t {} = {{", symbols.descriptor))
            .line("    .header = {")
            .line("        .magic = LV_IMAGE_HEADER_MAGIC,")
            .line(format!("        .cf = {},", header.cf.lvgl_tag()))
            .line(format!("        .w = {},", header.w))
            .line(format!("        .h = {},", header.h))
            .line(format!("        .stride = {},", header.stride))
            .line("    },")
            .line(format!("    .data_size = sizeof({}),", symbols.data))
            .line(format!("    .data = {},", symbols.data))
            .line("};")
    }

    /// Byte array, empty line, descriptor.
    pub fn image(&mut self, symbols: &Symbols, image: &ImageDescriptor) -> &mut Self {
        self.byte_array(&symbols.data, image)
            .blank()
            .descriptor(symbols, image)
    }

    pub fn extern_descriptor(&mut self, symbols: &Symbols) -> &mut Self {
        self.line(format!("extern const lv_image_dsc_t {};", symbols.descriptor))
    }

    pub fn finish(&self) -> String {
        let len = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(len);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::{ColorFormat, serialize};

    fn checker() -> ImageDescriptor {
        let samples = [
            255, 255, 255, 0, 0, 0,
            0, 0, 0, 255, 255, 255,
        ];
        serialize::pack(ColorFormat::Rgb565, 2, 2, &samples).unwrap()
    }

    #[test]
    fn test_symbols() {
        let boot = Symbols::from_stem("boot_logo");
        assert_eq!(boot.data, "boot_logo_data");
        assert_eq!(boot.descriptor, "boot_logo_dsc");

        let token = Symbols::from_descriptor("img_sui_logo");
        assert_eq!(token.data, "img_sui_logo_data");
        assert_eq!(token.descriptor, "img_sui_logo");
    }

    #[test]
    fn test_image_text() {
        let mut writer = SourceWriter::new();
        writer.image(&Symbols::from_stem("checker"), &checker());
        let expected = "\
static const uint8_t checker_data[] = {
    0xff, 0xff, 0x00, 0x00,
    0x00, 0x00, 0xff, 0xff,
};

const lv_image_dsc_t checker_dsc = {
    .header = {
        .magic = LV_IMAGE_HEADER_MAGIC,
        .cf = LV_COLOR_FORMAT_RGB565,
        .w = 2,
        .h = 2,
        .stride = 4,
    },
    .data_size = sizeof(checker_data),
    .data = checker_data,
};
";
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn test_header_text() {
        let mut writer = SourceWriter::new();
        writer
            .license(&License { copyright: "2025 Someone", identifier: "MIT" })
            .pragma_once()
            .blank()
            .include("lvgl.h")
            .blank()
            .extern_descriptor(&Symbols::from_descriptor("img_a"))
            .extern_descriptor(&Symbols::from_descriptor("img_b"))
            .blank();
        let expected = "\
/*
 * SPDX-FileCopyrightText: 2025 Someone
 * SPDX-License-Identifier: MIT
 */

#pragma once

#include \"lvgl.h\"

extern const lv_image_dsc_t img_a;
extern const lv_image_dsc_t img_b;

";
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn test_finish_is_repeatable() {
        let mut writer = SourceWriter::new();
        writer.comment("hello").image(&Symbols::from_stem("c"), &checker());
        assert_eq!(writer.finish(), writer.finish());
        assert!(writer.finish().starts_with("// hello\nstatic const uint8_t c_data[] = {\n"));
    }
}
