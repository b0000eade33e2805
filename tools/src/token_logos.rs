use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use lvimg_tools::tokens::{self, TokenLogos};

#[derive(FromArgs)]
/// Convert the token logo PNGs into LVGL 9 ARGB8888 image descriptors.
struct Args {
    /// directory holding the logo PNGs
    #[argh(option, short = 'i', default = "PathBuf::from(tokens::DEFAULT_INPUT_DIR)")]
    input_dir: PathBuf,

    /// directory receiving crypto_logos.c and crypto_logos.h
    #[argh(option, short = 'o', default = "PathBuf::from(tokens::DEFAULT_OUTPUT_DIR)")]
    output_dir: PathBuf,

    /// omit the SPDX licence block
    #[argh(switch)]
    no_license: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let mut job = TokenLogos::new(args.input_dir, args.output_dir);
    if args.no_license {
        job = job.with_license(None);
    }

    match job.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
