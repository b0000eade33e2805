//! Token logos: a fixed list of square ARGB8888 images sharing one source file.

use std::path::PathBuf;

use log::{debug, info};
use lvimg_core::{ColorFormat, License, SourceWriter, Symbols};

use crate::{
    Result, loader,
    output::{self, GeneratedFile},
};

pub const SOURCE_NAME: &str = "crypto_logos.c";
pub const HEADER_NAME: &str = "crypto_logos.h";
pub const DEFAULT_INPUT_DIR: &str = "docs/images/crypto_logos";
pub const DEFAULT_OUTPUT_DIR: &str = "main";

pub const LICENSE: License<'static> = License {
    copyright: "2025-2026 Bruce",
    identifier: "CC-BY-NC-4.0",
};

const FORMAT: ColorFormat = ColorFormat::Argb8888;

/// One entry of the logo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLogo {
    /// Input file, relative to the input directory
    pub file: &'static str,
    /// Descriptor identifier, the byte array gets a `_data` suffix
    pub name: &'static str,
    /// Edge length of the square output
    pub size: u32,
}

impl TokenLogo {
    pub const fn new(file: &'static str, name: &'static str, size: u32) -> Self {
        Self { file, name, size }
    }
}

pub const TOKEN_LOGOS: &[TokenLogo] = &[
    TokenLogo::new("bitcoin.png", "img_bitcoin_logo", 36),
    TokenLogo::new("ethereum.png", "img_ethereum_logo", 36),
    TokenLogo::new("paxg.png", "img_paxg_logo", 36),
    TokenLogo::new("chainbase.png", "img_chainbase_logo", 36),
    TokenLogo::new("sui.png", "img_sui_logo", 36),
    TokenLogo::new("doge.png", "img_doge_logo", 36),
    TokenLogo::new("solana.png", "img_solana_logo", 36),
    TokenLogo::new("tron.png", "img_tron_logo", 36),
    TokenLogo::new("usdc.png", "img_usdc_logo", 36),
    TokenLogo::new("usdt.png", "img_usdt_logo", 36),
];

/// Size summary of one converted logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLogo {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub data_size: usize,
}

impl PackedLogo {
    /// `NAME: WxH ARGB8888 = N bytes`
    pub fn summary(&self) -> String {
        format!(
            "{}: {}x{} {} = {} bytes",
            self.name,
            self.width,
            self.height,
            FORMAT.label(),
            self.data_size
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub source: GeneratedFile,
    pub header: GeneratedFile,
    pub logos: Vec<PackedLogo>,
}

#[derive(Debug, Clone)]
pub struct TokenLogos<'a> {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub logos: &'a [TokenLogo],
    pub license: Option<License<'a>>,
}

impl<'a> TokenLogos<'a> {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            logos: TOKEN_LOGOS,
            license: Some(LICENSE),
        }
    }

    pub fn with_logos(mut self, logos: &'a [TokenLogo]) -> Self {
        self.logos = logos;
        self
    }

    pub fn with_license(mut self, license: Option<License<'a>>) -> Self {
        self.license = license;
        self
    }

    /// Converts every logo in order and renders both files in memory.
    pub fn render(&self) -> Result<Rendered> {
        let mut source = SourceWriter::new();
        let mut header = SourceWriter::new();
        if let Some(license) = &self.license {
            source.license(license);
            header.license(license);
        }
        source
            .comment("Auto-generated crypto token logos for LVGL 9")
            .include("lvgl.h")
            .blank();
        header.pragma_once().blank().include("lvgl.h").blank();

        let mut logos = Vec::with_capacity(self.logos.len());
        for logo in self.logos {
            let path = self.input_dir.join(logo.file);
            let image = loader::load_packed(&path, logo.size, logo.size, FORMAT)?;
            let (w, h) = (image.width(), image.height());
            debug!("Packed {} as {} ({}x{})", logo.file, logo.name, w, h);

            let symbols = Symbols::from_descriptor(logo.name);
            source
                .comment(&format!("{} -> {w}x{h} {}", logo.file, FORMAT.label()))
                .image(&symbols, &image)
                .blank();
            header.extern_descriptor(&symbols);
            logos.push(PackedLogo {
                name: logo.name,
                width: w,
                height: h,
                data_size: image.data_size(),
            });
        }
        header.blank();

        let source = source.finish();
        let source_detail = format!("({} bytes)", source.len());
        let header = header.finish();
        let header_detail = format!("({} bytes)", header.len());
        Ok(Rendered {
            source: GeneratedFile::new(self.output_dir.join(SOURCE_NAME), source)
                .with_detail(source_detail),
            header: GeneratedFile::new(self.output_dir.join(HEADER_NAME), header)
                .with_detail(header_detail),
            logos,
        })
    }

    pub fn run(&self) -> Result<()> {
        let rendered = self.render()?;
        output::write_all(&[rendered.source, rendered.header])?;
        for logo in &rendered.logos {
            info!("  {}", logo.summary());
        }
        Ok(())
    }
}
