//! Theme command implementation.
//!
//! Rewrites every icon in a directory so its paint follows a color token,
//! writing results to a separate folder. Sources are never modified.

use std::path::Path;

use anyhow::{Context, Result};

use super::common::{
    Tally, collect_svg_files, display_name, ensure_input_dir, load_document, resolve_dir,
    write_output,
};
use crate::cli::args::{ThemeArgs, ThemeMode};
use crate::config::Config;
use crate::log;
use crate::logger::ProgressLine;
use crate::svg::Document;
use crate::svg::rewrite::{
    apply_non_scaling_stroke, rewrite_for_masks, rewrite_for_theming, rewrite_unified,
    strip_dimensions,
};

/// Execute theme command
pub fn run_theme(args: &ThemeArgs, config: &Config) -> Result<()> {
    let input = args.input.as_path();
    ensure_input_dir(input)?;
    let output = resolve_dir(input, &config.theme.output_dir);

    let files = collect_svg_files(input, false, std::slice::from_ref(&output));
    let rewrite = rewriter(args.mode, config);
    let mut tally = Tally::default();

    let progress = ProgressLine::new("theme", &[("rewritten", files.len())]);
    for path in &files {
        match theme_file(path, &output, rewrite.as_ref()) {
            Ok(()) => tally.written += 1,
            Err(e) => tally.fail("error", path, &e),
        }
        progress.inc("rewritten");
    }
    progress.finish();

    log!("done"; "{} into {}", tally.summary(), output.display());
    Ok(())
}

/// Pick the document transform for a mode, with config values bound.
fn rewriter(mode: ThemeMode, config: &Config) -> Box<dyn Fn(&Document) -> Document> {
    match mode {
        ThemeMode::Theme => {
            let policy = config.theme_policy();
            Box::new(move |doc: &Document| rewrite_for_theming(doc, &policy))
        }
        ThemeMode::Unified => {
            let policy = config.theme_policy();
            Box::new(move |doc: &Document| rewrite_unified(doc, &policy))
        }
        ThemeMode::Mask => {
            let policy = config.mask_policy();
            Box::new(move |doc: &Document| rewrite_for_masks(doc, &policy))
        }
        ThemeMode::NonScaling => {
            let width = config.theme.stroke_width.clone();
            Box::new(move |doc: &Document| apply_non_scaling_stroke(doc, &width))
        }
        ThemeMode::Strip => Box::new(|doc: &Document| strip_dimensions(doc)),
    }
}

fn theme_file(path: &Path, output: &Path, rewrite: &dyn Fn(&Document) -> Document) -> Result<()> {
    let doc = load_document(path)?;
    let bytes = rewrite(&doc)
        .serialize()
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_output(&output.join(display_name(path)), &bytes)
}
