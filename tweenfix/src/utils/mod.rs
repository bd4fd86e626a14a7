//! Utilities module for tweenfix.

mod paths;

pub use paths::{
    collect_source_files, is_excluded, merge_excludes, normalize_display_path, WalkOptions,
};
