//! Terminal output for fix runs and the rule list.

use crate::rules::RuleMetadata;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::io::Write;

/// Print the exclusion list in styled format.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_exclusion_list(writer: &mut impl Write, folders: &[String]) -> std::io::Result<()> {
    let list = folders
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(writer, "{} {}", "Excluding:".yellow().bold(), list.dimmed())
}

/// Print the number of candidate files.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_candidate_count(
    writer: &mut impl Write,
    count: usize,
    extensions: &[String],
) -> std::io::Result<()> {
    let kinds = extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join("/");
    writeln!(
        writer,
        "Found {} {} files to check",
        count.to_string().bold(),
        kinds
    )
}

/// Print the terminal status line for one file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_status(
    writer: &mut impl Write,
    path: &str,
    status: &crate::commands::FileStatus,
    dry_run: bool,
) -> std::io::Result<()> {
    use crate::commands::FileStatus;

    match status {
        FileStatus::Fixed if dry_run => {
            writeln!(writer, "  {} {}", "Would fix:".yellow(), path)
        }
        FileStatus::Fixed => writeln!(writer, "  {} {}", "Fixed:".green(), path),
        FileStatus::Unchanged => {
            writeln!(writer, "  {} {}", "No changes needed:".dimmed(), path)
        }
        FileStatus::Error(message) => writeln!(
            writer,
            "  {} {}: {}",
            "Error processing".red(),
            path,
            message
        ),
    }
}

/// Print the closing summary: fixed count and the fixed paths.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(
    writer: &mut impl Write,
    fixed: &[String],
    errors: usize,
    dry_run: bool,
) -> std::io::Result<()> {
    writeln!(writer)?;
    let verb = if dry_run { "Would fix" } else { "Fixed" };
    writeln!(
        writer,
        "{}",
        format!("{verb} {} files total!", fixed.len()).green().bold()
    )?;
    if errors > 0 {
        writeln!(
            writer,
            "{}",
            format!("{errors} files could not be processed").red()
        )?;
    }

    if !fixed.is_empty() {
        writeln!(writer)?;
        let header = if dry_run {
            "Files that would be fixed:"
        } else {
            "Fixed files:"
        };
        writeln!(writer, "{header}")?;
        for path in fixed {
            writeln!(writer, "  - {path}")?;
        }
    }
    Ok(())
}

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print the rule table in evaluation order.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rules(writer: &mut impl Write, rules: &[RuleMetadata]) -> std::io::Result<()> {
    let mut table = create_table(vec!["Rule ID", "Name", "Description"]);
    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.id).add_attribute(Attribute::Dim),
            Cell::new(rule.name).add_attribute(Attribute::Bold),
            Cell::new(rule.description),
        ]);
    }
    writeln!(writer, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FileStatus;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_status_lines() {
        let fixed = render(|w| print_file_status(w, "app/page.tsx", &FileStatus::Fixed, false));
        assert_eq!(fixed, "  Fixed: app/page.tsx\n");

        let dry = render(|w| print_file_status(w, "app/page.tsx", &FileStatus::Fixed, true));
        assert_eq!(dry, "  Would fix: app/page.tsx\n");

        let err = render(|w| {
            print_file_status(w, "x.ts", &FileStatus::Error("denied".to_owned()), false)
        });
        assert_eq!(err, "  Error processing x.ts: denied\n");
    }

    #[test]
    fn test_summary_without_fixes_has_no_list() {
        let out = render(|w| print_summary(w, &[], 0, false));
        assert!(out.contains("Fixed 0 files total!"));
        assert!(!out.contains("Fixed files:"));
    }

    #[test]
    fn test_summary_lists_paths() {
        let fixed = vec!["a.tsx".to_owned(), "b/c.ts".to_owned()];
        let out = render(|w| print_summary(w, &fixed, 1, false));
        assert!(out.contains("Fixed 2 files total!"));
        assert!(out.contains("1 files could not be processed"));
        assert!(out.contains("Fixed files:\n  - a.tsx\n  - b/c.ts\n"));
    }

    #[test]
    fn test_candidate_count() {
        let exts = vec!["ts".to_owned(), "tsx".to_owned()];
        let out = render(|w| print_candidate_count(w, 4, &exts));
        assert_eq!(out, "Found 4 .ts/.tsx files to check\n");
    }
}
