//! Sort command implementation.
//!
//! Copies each icon into one of two folders depending on whether any of its
//! elements draws a stroke. Files are copied byte for byte.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::common::{
    Tally, collect_svg_files, display_name, ensure_input_dir, load_document, resolve_dir,
};
use crate::cli::args::SortArgs;
use crate::config::Config;
use crate::logger::ProgressLine;
use crate::svg::style::has_active_stroke;
use crate::{debug, log};

/// Execute sort command
pub fn run_sort(args: &SortArgs, config: &Config) -> Result<()> {
    let input = args.input.as_path();
    ensure_input_dir(input)?;
    let output = resolve_dir(input, &config.sort.output_dir);
    let stroke_dir = output.join(&config.sort.stroke_dir);
    let fill_dir = output.join(&config.sort.fill_dir);

    let files = collect_svg_files(input, false, std::slice::from_ref(&output));
    let mut tally = Tally::default();
    let (mut stroked, mut filled) = (0usize, 0usize);

    let progress = ProgressLine::new("sort", &[("sorted", files.len())]);
    for path in &files {
        match sort_file(path, &stroke_dir, &fill_dir) {
            Ok(dest) => {
                debug!("sort"; "{} → {}", display_name(path), dest.display());
                if dest.starts_with(&stroke_dir) {
                    stroked += 1;
                } else {
                    filled += 1;
                }
                tally.written += 1;
            }
            Err(e) => tally.fail("error", path, &e),
        }
        progress.inc("sorted");
    }
    progress.finish();

    log!("done"; "{stroked} with strokes, {filled} fill-only, {} failed", tally.failed);
    Ok(())
}

fn sort_file(path: &Path, stroke_dir: &Path, fill_dir: &Path) -> Result<PathBuf> {
    let doc = load_document(path)?;
    let dir = if has_active_stroke(&doc) {
        stroke_dir
    } else {
        fill_dir
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    let dest = dir.join(display_name(path));
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy {} to {}", path.display(), dest.display()))?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(input: &Path) -> SortArgs {
        SortArgs {
            input: input.to_path_buf(),
            output: None,
        }
    }

    #[test]
    fn test_splits_by_stroke() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("line.svg"), r#"<svg><path stroke="red"/></svg>"#).unwrap();
        fs::write(root.join("styled.svg"), r#"<svg><g style="stroke: #000"/></svg>"#).unwrap();
        fs::write(root.join("solid.svg"), r#"<svg><path fill="red" stroke="none"/></svg>"#).unwrap();
        fs::write(root.join("broken.svg"), "<svg><g></svg>").unwrap();

        run_sort(&args(root), &Config::default()).unwrap();

        let sorted = root.join("sorted");
        assert!(sorted.join("Has_Strokes/line.svg").exists());
        assert!(sorted.join("Has_Strokes/styled.svg").exists());
        assert!(sorted.join("Fill_Only/solid.svg").exists());
        assert!(!sorted.join("Fill_Only/broken.svg").exists());
        assert!(!sorted.join("Has_Strokes/broken.svg").exists());
        // originals stay in place
        assert!(root.join("line.svg").exists());
    }

    #[test]
    fn test_copies_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let markup = "<svg>\n  <circle r='1'/>\n</svg>\n";
        fs::write(dir.path().join("dot.svg"), markup).unwrap();

        let mut config = Config::default();
        config.sort.output_dir = dir.path().join("out");
        run_sort(&args(dir.path()), &config).unwrap();

        let copied = fs::read_to_string(dir.path().join("out/Fill_Only/dot.svg")).unwrap();
        assert_eq!(copied, markup);
    }
}
