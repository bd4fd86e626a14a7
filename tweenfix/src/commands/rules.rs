//! `--list-rules` command.

use crate::engine::Rewriter;
use crate::output;
use crate::rules::ids::RULE_ID_KEYFRAME_SCAN;
use crate::rules::RuleMetadata;

use anyhow::Result;
use std::io::Write;

/// Print the detection pass followed by every rewrite rule, in order.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_list_rules<W: Write>(rewriter: &Rewriter, mut writer: W) -> Result<()> {
    let mut rows = vec![RuleMetadata {
        id: RULE_ID_KEYFRAME_SCAN,
        name: "keyframe-scan",
        description: "Flag animate blocks with a 3+-entry x/y/scale/rotate/opacity array",
    }];
    rows.extend(rewriter.rules().iter().map(|r| r.metadata()));
    output::print_rules(&mut writer, &rows)?;
    Ok(())
}
