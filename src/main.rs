//! Pixmorph - command-line driver for the raster transforms

use std::process::ExitCode;

use pixmorph::cli;

fn main() -> ExitCode {
    cli::run()
}
