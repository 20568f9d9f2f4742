//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations. The commands are a thin layer over
//! the library: load images, run transforms, and print or display results.

mod demo;
mod morph;
mod transform;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, PxmConfig, MAX_DISPLAY_SCALE};
use crate::error::TransformError;
use crate::ppm::load_image;
use crate::print::format_image;
use crate::raster::Image;
use crate::sink::{self, TerminalSink};
use crate::transforms::{apply_transforms, parse_transform_str, Transform};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixmorph - flip, grayscale, scale, blend and morph PPM images
#[derive(Parser)]
#[command(name = "pxm")]
#[command(about = "Pixmorph - flip, grayscale, scale, blend and morph PPM images")]
#[command(version)]
pub struct Cli {
    /// Path to a pxm.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How a single-image result is emitted
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Draw the result in the terminal instead of printing RGB values
    #[arg(long)]
    pub show: bool,

    /// Terminal half cells per pixel edge when using --show (default from config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DISPLAY_SCALE as i64))]
    pub zoom: Option<u32>,

    /// Extra transform to apply afterwards: flip-h, flip-v, gray, scale:WxH (repeatable)
    #[arg(long = "then", value_parser = parse_transform_arg)]
    pub then: Vec<Transform>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the RGB values of an image
    Print {
        /// Input image (.ppm plain text, or any format the image crate reads)
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Mirror an image (horizontally unless --vertical)
    Flip {
        /// Input image
        input: PathBuf,

        /// Flip top-bottom instead of left-right
        #[arg(long)]
        vertical: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert an image to grayscale using luminance
    Gray {
        /// Input image
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Resize an image with nearest-neighbor sampling
    Scale {
        /// Input image
        input: PathBuf,

        /// Target width in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Target height in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Blend two same-size images: alpha * first + (1 - alpha) * second
    Blend {
        /// First image
        first: PathBuf,

        /// Second image
        second: PathBuf,

        /// Weight of the first image, 0.0 to 1.0
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Animate a morph from one image to another in the terminal
    Morph {
        /// Image to start from
        source: PathBuf,

        /// Image to end at (rescaled to the source's size)
        target: PathBuf,

        /// Number of blend steps; frames shown = steps + 1 (default from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        steps: Option<u32>,

        /// Pause after each frame in milliseconds (default from config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Terminal half cells per pixel edge (default from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DISPLAY_SCALE as i64))]
        zoom: Option<u32>,
    },

    /// Print an image followed by its flipped, grayscale and 3x5 scaled versions
    Demo {
        /// Input image
        input: PathBuf,
    },
}

fn parse_transform_arg(s: &str) -> Result<Transform, String> {
    parse_transform_str(s).map_err(|e| e.to_string())
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match cli.command {
        Commands::Print { input, output } => transform::run_print(&input, &output, &config),
        Commands::Flip { input, vertical, output } => {
            transform::run_flip(&input, vertical, &output, &config)
        }
        Commands::Gray { input, output } => transform::run_gray(&input, &output, &config),
        Commands::Scale { input, width, height, output } => {
            transform::run_scale(&input, width as usize, height as usize, &output, &config)
        }
        Commands::Blend { first, second, alpha, output } => {
            transform::run_blend(&first, &second, alpha, &output, &config)
        }
        Commands::Morph { source, target, steps, delay_ms, zoom } => {
            morph::run_morph(&source, &target, steps, delay_ms, zoom, config)
        }
        Commands::Demo { input } => demo::run_demo(&input),
    }
}

/// Load an input image, reporting failures on stderr.
pub(crate) fn open_input(path: &Path) -> Result<Image, ExitCode> {
    load_image(path).map_err(|e| {
        eprintln!("Error: Cannot read image '{}': {}", path.display(), e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

/// Report a library error and return the matching exit code.
pub(crate) fn fail(err: TransformError) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::from(EXIT_ERROR)
}

/// Apply `--then` transforms and print or display the result.
pub(crate) fn emit(image: &Image, output: &OutputArgs, config: &PxmConfig) -> ExitCode {
    let image = match apply_transforms(image, &output.then) {
        Ok(img) => img,
        Err(e) => return fail(e),
    };

    if output.show {
        let zoom = output.zoom.unwrap_or(config.display.scale) as usize;
        let mut terminal = TerminalSink::stdout(zoom);
        if let Err(e) = sink::display(&mut terminal, &image) {
            return fail(e);
        }
    } else {
        println!("{}", format_image(&image));
    }

    ExitCode::from(EXIT_SUCCESS)
}
