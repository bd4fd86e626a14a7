//! Argument parsing and dispatch for the `tweenfix` binaries.

use crate::cli::Cli;
use crate::commands::{run_fix, run_list_rules, FixOptions};
use crate::config::Config;
use crate::engine::Rewriter;
use crate::utils::merge_excludes;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Runs tweenfix with the given arguments.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run tweenfix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// The exit code is 0 even when individual files fail; only usage errors
/// return 1.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["tweenfix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if cli_var.list_rules {
        run_list_rules(&Rewriter::default(), &mut *writer)?;
        return Ok(0);
    }

    let root = cli_var.root.clone().unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        eprintln!(
            "Error: The directory '{}' does not exist.",
            root.display()
        );
        return Ok(1);
    }

    let config = Config::load_from_path(&root);
    let settings = &config.tweenfix;

    let mut exclude = settings.exclude_folders.clone().unwrap_or_default();
    exclude.extend(cli_var.exclude_folders.iter().cloned());
    let mut include = settings.include_folders.clone().unwrap_or_default();
    include.extend(cli_var.include_folders.iter().cloned());
    let excludes = merge_excludes(&exclude, &include);

    let options = FixOptions {
        root,
        dry_run: cli_var.output.dry_run,
        verbose: cli_var.output.verbose,
        excludes,
        extensions: settings.extensions(),
        respect_gitignore: cli_var.gitignore || settings.respect_gitignore.unwrap_or(false),
    };

    if options.verbose {
        eprintln!("[VERBOSE] tweenfix v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
            None => eprintln!("[VERBOSE] Config: defaults"),
        }
        eprintln!("[VERBOSE] Root: {}", options.root.display());
        eprintln!("[VERBOSE] Extensions: {:?}", options.extensions);
        eprintln!("[VERBOSE] Respect .gitignore: {}", options.respect_gitignore);
        crate::output::print_exclusion_list(&mut std::io::stderr(), &options.excludes)?;
        eprintln!();
    }

    run_fix(&options, &mut *writer)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (i32, String) {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        let code = run_with_args_to(args.iter().map(|&a| a.to_owned()).collect(), &mut buffer)
            .unwrap();
        (code, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_help_goes_to_writer() {
        let (code, out) = run(&["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("--dry-run"));
        assert!(out.contains(".tweenfix.toml"));
    }

    #[test]
    fn test_bad_flag_is_usage_error() {
        let (code, _) = run(&["--no-such-flag"]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let (code, _) = run(&["--root", missing.to_str().unwrap()]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_config_excludes_are_applied() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".tweenfix.toml"),
            "[tweenfix]\nexclude_folders = [\"legacy\"]\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("legacy")).unwrap();
        fs::write(
            dir.path().join("legacy/old.tsx"),
            "transition={{ duration: 2, repeat: Infinity }}",
        )
        .unwrap();
        fs::write(dir.path().join("new.tsx"), "export {};\n").unwrap();

        let (code, out) = run(&["--root", dir.path().to_str().unwrap()]);
        assert_eq!(code, 0);
        assert!(out.contains("Found 1 .ts/.tsx files to check"));
        assert!(!out.contains("old.tsx"));
    }

    #[test]
    fn test_list_rules() {
        let (code, out) = run(&["--list-rules"]);
        assert_eq!(code, 0);
        assert!(out.contains("motion-block"));
        assert!(out.contains("literal-table"));
    }
}
