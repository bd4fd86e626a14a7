//! The tween fix run: discover, rewrite, persist, report.

use crate::engine::{RewriteOutcome, Rewriter};
use crate::error::FixError;
use crate::output;
use crate::utils::{collect_source_files, WalkOptions};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for a fix run
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// Report what would change without writing
    pub dry_run: bool,
    /// Print `[VERBOSE]` diagnostics to stderr
    pub verbose: bool,
    /// Directory names to skip, already merged with the defaults
    pub excludes: Vec<String>,
    /// File extensions to scan
    pub extensions: Vec<String>,
    /// Honor `.gitignore`
    pub respect_gitignore: bool,
}

/// Terminal outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed and was written (or would be, in dry-run mode).
    Fixed,
    /// No rule changed the content.
    Unchanged,
    /// Reading, rewriting or writing failed.
    Error(String),
}

/// Per-file entry of a run.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File that was processed
    pub path: PathBuf,
    /// What happened to it
    pub status: FileStatus,
    /// Codes of the rules that changed it
    pub applied: Vec<&'static str>,
}

/// Everything a run produced, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One entry per candidate file
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Paths of the fixed files, in processing order.
    #[must_use]
    pub fn fixed_paths(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Fixed)
            .map(|f| f.path.as_path())
            .collect()
    }

    /// Number of files that ended in an error.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Error(_)))
            .count()
    }
}

/// Reads, rewrites and (unless `dry_run`) writes back one file.
///
/// The file is written only when the final text differs from what was read.
///
/// # Errors
///
/// Returns a `FixError` if the file cannot be read as UTF-8, a rule fails,
/// or the write fails.
pub fn fix_file(
    path: &Path,
    rewriter: &Rewriter,
    dry_run: bool,
) -> Result<RewriteOutcome, FixError> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = rewriter
        .rewrite(&content)
        .map_err(|source| FixError::Rewrite {
            path: path.to_path_buf(),
            source,
        })?;

    if !dry_run && outcome.text != content {
        fs::write(path, &outcome.text).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(outcome)
}

/// Runs the fix over every candidate file under `options.root`.
///
/// Per-file failures are reported and recorded; they never stop the run.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn run_fix<W: Write>(options: &FixOptions, mut writer: W) -> Result<RunSummary> {
    let rewriter = Rewriter::default();

    let (files, dir_count) = collect_source_files(
        &options.root,
        &WalkOptions {
            excludes: &options.excludes,
            extensions: &options.extensions,
            respect_gitignore: options.respect_gitignore,
            verbose: options.verbose,
        },
    );

    if options.verbose {
        eprintln!(
            "[VERBOSE] Walked {} directories under {}",
            dir_count,
            options.root.display()
        );
    }

    output::print_candidate_count(&mut writer, files.len(), &options.extensions)?;

    let mut summary = RunSummary::default();
    for path in files {
        let display = display_path(&options.root, &path);
        let report = match fix_file(&path, &rewriter, options.dry_run) {
            Ok(outcome) => FileReport {
                path,
                status: if outcome.changed() {
                    FileStatus::Fixed
                } else {
                    FileStatus::Unchanged
                },
                applied: outcome.applied,
            },
            Err(e) => FileReport {
                path,
                status: FileStatus::Error(e.to_string()),
                applied: Vec::new(),
            },
        };
        if options.verbose && !report.applied.is_empty() {
            eprintln!("[VERBOSE] {display}: applied {}", report.applied.join(", "));
        }
        output::print_file_status(&mut writer, &display, &report.status, options.dry_run)?;
        summary.files.push(report);
    }

    let fixed: Vec<String> = summary
        .fixed_paths()
        .into_iter()
        .map(|p| display_path(&options.root, p))
        .collect();
    output::print_summary(&mut writer, &fixed, summary.error_count(), options.dry_run)?;

    Ok(summary)
}

/// Path shown to the user: relative to the root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    crate::utils::normalize_display_path(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::merge_excludes;
    use tempfile::TempDir;

    fn options(root: &Path) -> FixOptions {
        FixOptions {
            root: root.to_path_buf(),
            excludes: merge_excludes(&[], &[]),
            extensions: vec!["ts".to_owned(), "tsx".to_owned()],
            ..FixOptions::default()
        }
    }

    #[test]
    fn test_fix_file_writes_only_on_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Hero.tsx");
        let src = "animate={{ scale: [1, 1.2, 1] }}\ntransition={{ duration: 2, repeat: Infinity }}\n";
        fs::write(&path, src).unwrap();

        let outcome = fix_file(&path, &Rewriter::default(), false).unwrap();
        assert!(outcome.changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), outcome.text);

        let again = fix_file(&path, &Rewriter::default(), false).unwrap();
        assert!(!again.changed());
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        let src = "transition={{ duration: 1, repeat: Infinity }}";
        fs::write(&path, src).unwrap();

        let outcome = fix_file(&path, &Rewriter::default(), true).unwrap();
        assert!(outcome.changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), src);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = fix_file(&dir.path().join("gone.tsx"), &Rewriter::default(), false).unwrap_err();
        assert!(matches!(err, FixError::Read { ref path, .. } if path.ends_with("gone.tsx")));
    }

    #[test]
    fn test_run_fix_collects_summary() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.tsx"),
            "transition={{ duration: 2, repeat: Infinity }}",
        )
        .unwrap();
        fs::write(dir.path().join("b.ts"), "export const b = 1;\n").unwrap();
        fs::write(dir.path().join("c.tsx"), [0xff_u8, 0xfe, 0x00]).unwrap();

        let mut buffer = Vec::new();
        let summary = run_fix(&options(dir.path()), &mut buffer).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert_eq!(summary.files.len(), 3);
        assert_eq!(summary.fixed_paths().len(), 1);
        assert_eq!(summary.error_count(), 1);
        assert!(out.contains("Found 3 .ts/.tsx files to check"));
        assert!(out.contains("Fixed: a.tsx"));
        assert!(out.contains("No changes needed: b.ts"));
        assert!(out.contains("Error processing c.tsx"));
        assert!(out.contains("Fixed 1 files total"));
        assert!(out.contains("  - a.tsx"));
        assert_eq!(summary.files[0].applied, vec![crate::rules::ids::RULE_ID_LITERAL_TABLE]);
        assert!(summary.files[1].applied.is_empty());
    }
}
