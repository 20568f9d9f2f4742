//! Single-image commands: print, flip, gray, scale and blend

use std::path::Path;
use std::process::ExitCode;

use crate::config::PxmConfig;
use crate::transforms::{blend, flip_horizontal, flip_vertical, grayscale, scale};

use super::{emit, fail, open_input, OutputArgs};

/// Print (or show) an image unchanged, apart from any `--then` transforms.
pub fn run_print(input: &Path, output: &OutputArgs, config: &PxmConfig) -> ExitCode {
    match open_input(input) {
        Ok(image) => emit(&image, output, config),
        Err(code) => code,
    }
}

/// Mirror an image left-right, or top-bottom with `vertical`.
pub fn run_flip(input: &Path, vertical: bool, output: &OutputArgs, config: &PxmConfig) -> ExitCode {
    let image = match open_input(input) {
        Ok(img) => img,
        Err(code) => return code,
    };
    let flipped = if vertical { flip_vertical(&image) } else { flip_horizontal(&image) };
    emit(&flipped, output, config)
}

/// Replace each pixel with its luminance.
pub fn run_gray(input: &Path, output: &OutputArgs, config: &PxmConfig) -> ExitCode {
    match open_input(input) {
        Ok(image) => emit(&grayscale(&image), output, config),
        Err(code) => code,
    }
}

/// Nearest-neighbor resize.
pub fn run_scale(
    input: &Path,
    width: usize,
    height: usize,
    output: &OutputArgs,
    config: &PxmConfig,
) -> ExitCode {
    let image = match open_input(input) {
        Ok(img) => img,
        Err(code) => return code,
    };
    match scale(&image, width, height) {
        Ok(scaled) => emit(&scaled, output, config),
        Err(e) => fail(e),
    }
}

/// Blend two same-size images.
pub fn run_blend(
    first: &Path,
    second: &Path,
    alpha: f64,
    output: &OutputArgs,
    config: &PxmConfig,
) -> ExitCode {
    let a = match open_input(first) {
        Ok(img) => img,
        Err(code) => return code,
    };
    let b = match open_input(second) {
        Ok(img) => img,
        Err(code) => return code,
    };
    match blend(&a, &b, alpha) {
        Ok(mixed) => emit(&mixed, output, config),
        Err(e) => fail(e),
    }
}
