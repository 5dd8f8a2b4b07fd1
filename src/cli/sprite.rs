//! Sprite command implementation.
//!
//! Walks the input tree, derives a key for every icon from its file name and
//! writes two files into the output directory:
//!
//! ```text
//! <output>/<name>.svg           hidden container of <symbol>s
//! <output>/<name>-config.json   index of icons, categories and palette
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::common::{Tally, collect_svg_files, ensure_input_dir, load_document, write_output};
use crate::cli::args::SpriteArgs;
use crate::config::Config;
use crate::logger::ProgressLine;
use crate::svg::Document;
use crate::svg::sprite::{SourceKey, SpriteMetadata, SpriteSource, compose};
use crate::{debug, log};

/// Execute sprite command
pub fn run_sprite(args: &SpriteArgs, config: &Config) -> Result<()> {
    let input = args.input.as_path();
    ensure_input_dir(input)?;
    let output = config.sprite.output_dir.as_path();

    let files = collect_svg_files(input, true, &exclusions(input, output));
    let mut tally = Tally::default();

    let progress = ProgressLine::new("sprite", &[("parsed", files.len())]);
    let mut loaded: Vec<(SourceKey, String, Document)> = Vec::with_capacity(files.len());
    for path in &files {
        match load_document(path) {
            Ok(doc) => {
                let key = source_key(path, &config.sprite.background_dir);
                loaded.push((key, doc.source.clone(), doc));
            }
            Err(e) => tally.fail("error", path, &e),
        }
        progress.inc("parsed");
    }
    progress.finish();

    let sources: Vec<SpriteSource<'_>> = loaded
        .iter()
        .map(|(key, file_name, document)| SpriteSource {
            key: key.clone(),
            document,
            file_name: file_name.clone(),
        })
        .collect();
    let sprite = compose(&sources, &config.compose_options());

    for (identifier, reason) in &sprite.fallbacks {
        debug!("sprite"; "{identifier}: {reason}, using default viewBox");
    }
    for rejected in &sprite.rejected {
        log!("warn"; "{rejected}");
    }
    tally.skipped = sprite.rejected.len();

    let name = config.sprite.name.as_str();
    let svg_path = output.join(format!("{name}.svg"));
    let bytes = sprite
        .document(format!("{name}.svg"))
        .serialize()
        .context("Failed to serialize sprite")?;
    write_output(&svg_path, &bytes)?;

    let json_path = output.join(format!("{name}-config.json"));
    let metadata = SpriteMetadata::new(&sprite, name, &config.sprite.url_prefix);
    let json = metadata.to_json().context("Failed to serialize sprite metadata")?;
    write_output(&json_path, json.as_bytes())?;
    tally.written = sprite.entries.len();

    log!("sprite"; "wrote {} and {}", svg_path.display(), json_path.display());
    log!(
        "done";
        "{} entries ({} symbols), {} rejected, {} unreadable",
        sprite.entries.len(),
        sprite.symbols.len(),
        tally.skipped,
        tally.failed
    );
    Ok(())
}

/// Key for one file; files directly inside a folder named `background_dir`
/// (case-insensitive) are backgrounds.
fn source_key(path: &Path, background_dir: &str) -> SourceKey {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_background = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir.to_string_lossy().eq_ignore_ascii_case(background_dir));
    SourceKey::parse(&stem, is_background)
}

/// Keep a previous sprite out of the next one when output sits inside input.
///
/// The returned path is spelled relative to `input`, the way the walk
/// reports entries, whichever form each argument was given in.
fn exclusions(input: &Path, output: &Path) -> Vec<PathBuf> {
    let absolute = |p: &Path| std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
    match absolute(output).strip_prefix(absolute(input)) {
        Ok(inner) => vec![input.join(inner)],
        Err(_) => Vec::new(),
    }
}
