//! Morph command implementation (terminal animation)

use std::path::Path;
use std::process::ExitCode;

use crate::config::{merge_cli_overrides, CliOverrides, PxmConfig};
use crate::morph::Morph;
use crate::sink::TerminalSink;

use super::{fail, open_input, EXIT_SUCCESS};

/// Play a morph from `source` to `target` on standard output.
///
/// Flags override the `[morph]` and `[display]` config sections.
pub fn run_morph(
    source: &Path,
    target: &Path,
    steps: Option<u32>,
    delay_ms: Option<u64>,
    zoom: Option<u32>,
    mut config: PxmConfig,
) -> ExitCode {
    merge_cli_overrides(
        &mut config,
        &CliOverrides { steps, frame_delay_ms: delay_ms, scale: zoom },
    );

    let source_image = match open_input(source) {
        Ok(img) => img,
        Err(code) => return code,
    };
    let target_image = match open_input(target) {
        Ok(img) => img,
        Err(code) => return code,
    };

    let sequence = match Morph::new(&source_image, &target_image, config.morph.steps) {
        Ok(m) => m,
        Err(e) => return fail(e),
    };

    let mut terminal = TerminalSink::stdout(config.display.scale as usize);
    match sequence.play(&mut terminal, config.frame_delay()) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => fail(e),
    }
}
