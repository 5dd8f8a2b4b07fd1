//! Dedup command implementation.
//!
//! Finds content-identical icons and moves every later copy into a
//! duplicates folder. Nothing is deleted or rewritten; the first file in
//! path order survives.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::common::{Tally, collect_svg_files, ensure_input_dir, load_document, relocate, resolve_dir};
use crate::cli::args::DedupArgs;
use crate::config::Config;
use crate::logger::ProgressLine;
use crate::svg::{Document, find_duplicates};
use crate::{debug, log};

/// Execute dedup command
pub fn run_dedup(args: &DedupArgs, config: &Config) -> Result<()> {
    let input = args.input.as_path();
    ensure_input_dir(input)?;
    let dest = resolve_dir(input, &config.dedup.output_dir);

    let files = collect_svg_files(input, args.recursive, std::slice::from_ref(&dest));
    let mut tally = Tally::default();
    let documents = load_all(input, &files, &mut tally);

    let index = find_duplicates(&documents);
    for (doc, err) in &index.failures {
        log!("dedup"; "{}: cannot compare ({}), kept as unique", doc.source, err);
    }

    for (duplicate, original) in index.pairs() {
        log!("dedup"; "{} → duplicate of {}", duplicate.source, original.source);
        if args.dry_run {
            tally.skipped += 1;
            continue;
        }
        let src = input.join(&duplicate.source);
        match relocate(&src, &dest) {
            Ok(moved) => {
                debug!("dedup"; "moved to {}", moved.display());
                tally.written += 1;
            }
            Err(e) => tally.fail("error", &src, &e),
        }
    }

    let verb = if args.dry_run { "found" } else { "moved" };
    log!(
        "done";
        "{} duplicates {verb}, {} unique, {} unreadable",
        index.duplicate_count(),
        index.unique_count(),
        tally.failed
    );
    Ok(())
}

/// Parse every file; documents are keyed by their path relative to `input`.
fn load_all(input: &Path, files: &[PathBuf], tally: &mut Tally) -> Vec<Document> {
    let progress = ProgressLine::new("dedup", &[("parsed", files.len())]);
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        match load_document(path) {
            Ok(mut doc) => {
                doc.source = relative_key(input, path);
                documents.push(doc);
            }
            Err(e) => tally.fail("error", path, &e),
        }
        progress.inc("parsed");
    }
    progress.finish();
    documents
}

fn relative_key(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
