//! Common utilities shared across CLI commands.
//!
//! Everything that touches the filesystem lives here so the `svg` core stays
//! pure: sorted input enumeration, document loading, output writing and
//! non-destructive relocation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::{Parallelism, WalkDir};

use crate::log;
use crate::svg::Document;

/// File extension of every input the tool reads.
const EXTENSION: &str = "svg";

/// Fail early when the input directory does not exist.
pub fn ensure_input_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("Input directory not found: {}", dir.display());
    }
    Ok(())
}

/// Collect `.svg` files under `dir` in lexicographic path order.
///
/// Anything inside one of `exclude` is skipped, so a run never reads its own
/// output from a previous run.
pub fn collect_svg_files(dir: &Path, recursive: bool, exclude: &[PathBuf]) -> Vec<PathBuf> {
    let walker = WalkDir::new(dir)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .max_depth(if recursive { usize::MAX } else { 1 });

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_svg(path))
        .filter(|path| !exclude.iter().any(|ex| path.starts_with(ex)))
        .collect();
    files.sort();
    files
}

#[inline]
fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
}

/// Resolve a configured output directory against a base directory.
pub fn resolve_dir(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

/// File name for log lines.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and parse one document, keyed by its file name.
pub fn load_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Document::parse(display_name(path), &bytes)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write bytes, creating parent directories as needed.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

/// First free path for `file_name` in `dir`: `name.svg`, then `name_1.svg`,
/// `name_2.svg`, …
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| dir.join(format!("{stem}_{n}{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Move a file into `dest_dir` without overwriting anything there.
///
/// Falls back to copy + remove when a rename is not possible (e.g. across
/// filesystems). Returns the final location.
pub fn relocate(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create directory {}", dest_dir.display()))?;
    let dest = unique_destination(dest_dir, &display_name(src));

    if fs::rename(src, &dest).is_err() {
        fs::copy(src, &dest)
            .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
        fs::remove_file(src).with_context(|| format!("Failed to remove {}", src.display()))?;
    }
    Ok(dest)
}

// ============================================================================
// Batch bookkeeping
// ============================================================================

/// Per-run counters for the closing summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Tally {
    /// Log a per-item failure and keep going.
    pub fn fail(&mut self, module: &str, path: &Path, err: &anyhow::Error) {
        self.failed += 1;
        log!(module; "{}: {:#}", display_name(path), err);
    }

    pub fn summary(&self) -> String {
        format!(
            "{} written, {} skipped, {} failed",
            self.written, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_is_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("b.svg"), "<svg/>");
        touch(&root.join("a.SVG"), "<svg/>");
        touch(&root.join("notes.txt"), "x");
        touch(&root.join("sub/c.svg"), "<svg/>");

        let flat = collect_svg_files(root, false, &[]);
        assert_eq!(flat, [root.join("a.SVG"), root.join("b.svg")]);

        let deep = collect_svg_files(root, true, &[]);
        assert_eq!(deep.len(), 3);
        assert_eq!(deep[2], root.join("sub/c.svg"));
    }

    #[test]
    fn test_collect_skips_excluded_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("a.svg"), "<svg/>");
        touch(&root.join("duplicates/a.svg"), "<svg/>");

        let files = collect_svg_files(root, true, &[root.join("duplicates")]);
        assert_eq!(files, [root.join("a.svg")]);
    }

    #[test]
    fn test_unique_destination_appends_counter() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        assert_eq!(unique_destination(root, "icon.svg"), root.join("icon.svg"));

        touch(&root.join("icon.svg"), "");
        assert_eq!(unique_destination(root, "icon.svg"), root.join("icon_1.svg"));

        touch(&root.join("icon_1.svg"), "");
        assert_eq!(unique_destination(root, "icon.svg"), root.join("icon_2.svg"));
    }

    #[test]
    fn test_relocate_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let dest = root.join("duplicates");
        touch(&dest.join("copy.svg"), "existing");
        touch(&root.join("copy.svg"), "moved");

        let moved = relocate(&root.join("copy.svg"), &dest).unwrap();
        assert_eq!(moved, dest.join("copy_1.svg"));
        assert!(!root.join("copy.svg").exists());
        assert_eq!(fs::read_to_string(dest.join("copy.svg")).unwrap(), "existing");
        assert_eq!(fs::read_to_string(moved).unwrap(), "moved");
    }

    #[test]
    fn test_resolve_dir() {
        let base = Path::new("/icons");
        assert_eq!(resolve_dir(base, Path::new("themed")), PathBuf::from("/icons/themed"));
        assert_eq!(resolve_dir(base, Path::new("/tmp/out")), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_load_document_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.svg");
        touch(&path, "<svg><g></svg>");
        let err = load_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.svg"));

        touch(&path, "<svg/>");
        assert_eq!(load_document(&path).unwrap().source, "broken.svg");
    }

    #[test]
    fn test_write_output_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/out.svg");
        write_output(&path, b"<svg/>").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<svg/>");
    }

    #[test]
    fn test_tally_summary() {
        let tally = Tally {
            written: 3,
            skipped: 1,
            failed: 0,
        };
        assert_eq!(tally.summary(), "3 written, 1 skipped, 0 failed");
    }
}
