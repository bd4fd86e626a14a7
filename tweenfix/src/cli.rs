//! Command line definition.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.tweenfix.toml):
  Create this file in your project root to set defaults.

  [tweenfix]
  exclude_folders = [\"dist\", \"out\"]    # Skipped in addition to node_modules and .next
  include_folders = []                   # Force-include a default exclusion
  extensions = [\"ts\", \"tsx\"]            # File extensions to scan
  respect_gitignore = false              # Also skip what .gitignore ignores

  The same keys may live in a \"tweenfix\" object in package.json.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Enable verbose output for debugging (config source, exclusions, rules applied per file).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show which files would be fixed without writing them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Command line interface configuration using `clap`.
/// With no arguments the current directory is fixed in place.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tweenfix - add type: \"tween\" to Framer Motion transitions driven by multi-keyframe animations",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Project root to scan (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Folders to exclude in addition to the defaults.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Folders to force-include (overrides default exclusions).
    #[arg(long, alias = "include-folder")]
    pub include_folders: Vec<String>,

    /// Respect .gitignore files while walking.
    #[arg(long)]
    pub gitignore: bool,

    /// Print the rule table and exit.
    #[arg(long)]
    pub list_rules: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tweenfix"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.output.dry_run);
        assert!(cli.exclude_folders.is_empty());
    }

    #[test]
    fn test_repeatable_excludes() {
        let cli = Cli::try_parse_from([
            "tweenfix",
            "--exclude-folders",
            "dist",
            "--exclude-folder",
            "out",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.exclude_folders, vec!["dist", "out"]);
        assert!(cli.output.dry_run);
    }
}
