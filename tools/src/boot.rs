//! Boot splash: one fixed-size RGB565 image.

use std::path::PathBuf;

use lvimg_core::{ColorFormat, SourceWriter, Symbols};

use crate::{
    Result, loader,
    output::{self, GeneratedFile},
};

pub const TARGET_WIDTH: u32 = 320;
pub const TARGET_HEIGHT: u32 = 172;
pub const STEM: &str = "boot_logo";
pub const DEFAULT_INPUT: &str = "docs/images/layout_lean_version.png";
pub const DEFAULT_OUTPUT_DIR: &str = "main";

const FORMAT: ColorFormat = ColorFormat::Rgb565;

#[derive(Debug, Clone)]
pub struct BootLogo {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl BootLogo {
    pub fn new(input: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input,
            output_dir,
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Renders `boot_logo.c` and `boot_logo.h` without touching the disk.
    pub fn render(&self) -> Result<[GeneratedFile; 2]> {
        let image = loader::load_packed(&self.input, self.width, self.height, FORMAT)?;
        let (w, h, label) = (image.width(), image.height(), image.format().label());
        let symbols = Symbols::from_stem(STEM);
        let header_name = format!("{STEM}.h");

        let mut source = SourceWriter::new();
        source
            .comment(&format!("Auto-generated boot logo, {w}x{h} {label}"))
            .comment("Do not edit, regenerate with `cargo run --bin boot_logo`")
            .include(&header_name)
            .blank()
            .image(&symbols, &image);

        let mut header = SourceWriter::new();
        header
            .pragma_once()
            .include("lvgl.h")
            .blank()
            .extern_descriptor(&symbols);

        Ok([
            GeneratedFile::new(self.output_dir.join(format!("{STEM}.c")), source.finish())
                .with_detail(format!("({} bytes, {w}x{h} {label})", image.data_size())),
            GeneratedFile::new(self.output_dir.join(header_name), header.finish()),
        ])
    }

    pub fn run(&self) -> Result<()> {
        output::write_all(&self.render()?)
    }
}
