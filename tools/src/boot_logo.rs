use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use lvimg_tools::boot::{self, BootLogo};

#[derive(FromArgs)]
/// Convert the boot splash PNG into an LVGL 9 RGB565 image descriptor.
struct Args {
    /// input image path
    #[argh(option, short = 'i', default = "PathBuf::from(boot::DEFAULT_INPUT)")]
    input: PathBuf,

    /// directory receiving boot_logo.c and boot_logo.h
    #[argh(option, short = 'o', default = "PathBuf::from(boot::DEFAULT_OUTPUT_DIR)")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match BootLogo::new(args.input, args.output_dir).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
