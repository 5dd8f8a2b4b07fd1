//! Backdrop command implementation.
//!
//! Places every icon of a directory on a wide, clipped canvas with a uniform
//! outline, for use as a page background.

use std::path::Path;

use anyhow::{Context, Result};

use super::common::{
    Tally, collect_svg_files, display_name, ensure_input_dir, load_document, resolve_dir,
    write_output,
};
use crate::cli::args::BackdropArgs;
use crate::config::Config;
use crate::logger::ProgressLine;
use crate::svg::geometry::{BackdropLayout, compose_backdrop};
use crate::{debug, log};

/// Execute backdrop command
pub fn run_backdrop(args: &BackdropArgs, config: &Config) -> Result<()> {
    let input = args.input.as_path();
    ensure_input_dir(input)?;
    let output = resolve_dir(input, &config.backdrop.output_dir);
    let layout = config.backdrop_layout();

    let files = collect_svg_files(input, false, std::slice::from_ref(&output));
    let mut tally = Tally::default();

    let progress = ProgressLine::new("backdrop", &[("placed", files.len())]);
    for path in &files {
        match backdrop_file(path, &output, &layout) {
            Ok(()) => tally.written += 1,
            Err(e) => tally.fail("error", path, &e),
        }
        progress.inc("placed");
    }
    progress.finish();

    log!("done"; "{} into {}", tally.summary(), output.display());
    Ok(())
}

fn backdrop_file(path: &Path, output: &Path, layout: &BackdropLayout) -> Result<()> {
    let doc = load_document(path)?;
    let (composed, window) = compose_backdrop(&doc, layout);
    if let Err(reason) = window {
        debug!("backdrop"; "{}: {reason}, using default viewBox", display_name(path));
    }
    let bytes = composed
        .serialize()
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_output(&output.join(display_name(path)), &bytes)
}
