//! Path utilities for tweenfix.
//!
//! - Cross-platform display normalization
//! - Source file discovery with directory exclusion

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tweenfix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\app\\page.tsx")), "app/page.tsx");
/// assert_eq!(normalize_display_path(Path::new("./components/Navbar.tsx")), "components/Navbar.tsx");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    for exclude in excludes {
        if exclude.starts_with("*.") {
            if name.ends_with(&exclude[1..]) {
                return true;
            }
        } else if name == exclude {
            return true;
        }
    }
    false
}

/// Merges user excludes with the defaults, then drops force-included names.
#[must_use]
pub fn merge_excludes(exclude: &[String], include: &[String]) -> Vec<String> {
    let defaults = DEFAULT_EXCLUDE_FOLDERS().iter().map(|&s| s.to_owned());

    let mut all_excludes: Vec<String> = exclude.iter().cloned().chain(defaults).collect();
    all_excludes.sort_unstable();
    all_excludes.dedup();
    all_excludes.retain(|ex| !include.iter().any(|inc| ex == inc));
    all_excludes
}

/// Options controlling source file discovery.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions<'a> {
    /// Directory names to skip (already merged with defaults).
    pub excludes: &'a [String],
    /// Accepted file extensions, without the leading dot.
    pub extensions: &'a [String],
    /// Honor `.gitignore`, `.git/info/exclude` and the global gitignore.
    pub respect_gitignore: bool,
    /// Print walk errors to stderr.
    pub verbose: bool,
}

/// Collects source files under `root`, sorted by path.
///
/// Excluded directories are pruned at traversal time so nothing inside them
/// is ever opened. Hidden entries are skipped.
///
/// # Returns
/// Tuple of (sorted file paths, directory count)
#[must_use]
pub fn collect_source_files(root: &Path, options: &WalkOptions<'_>) -> (Vec<PathBuf>, usize) {
    use ignore::WalkBuilder;

    let excludes_for_filter = options.excludes.to_vec();
    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .parents(options.respect_gitignore)
        .ignore(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .require_git(false)
        .filter_entry(move |entry| {
            // Always allow the root directory
            if entry.path() == root_for_filter {
                return true;
            }

            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &excludes_for_filter) {
                    return false;
                }
            }

            true
        })
        .build();

    let mut files = Vec::new();
    let mut dir_count = 0;

    for result in walker {
        match result {
            Ok(entry) => {
                let path = entry.path();

                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    if path != root {
                        dir_count += 1;
                    }
                    continue;
                }

                let matches_extension = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| options.extensions.iter().any(|e| e == ext));

                if matches_extension {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                if options.verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files.sort();
    (files, dir_count)
}
