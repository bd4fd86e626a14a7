//! Commands module - CLI command implementations.

mod fix;
mod rules;

pub use fix::{fix_file, run_fix, FileReport, FileStatus, FixOptions, RunSummary};
pub use rules::run_list_rules;
